use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pwmtunes", about = "Convert sound-effect recordings into a C header of 8-bit PWM sample arrays")]
pub struct Cli {
    /// Output header file (.h)
    pub output: PathBuf,

    /// Directory containing poweron*, poweroff*, hum*, swing* and clash* recordings
    #[arg(short, long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Config file (defaults to pwmtunes.toml in the input directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sample values per line in the generated arrays
    #[arg(long, default_value_t = 16)]
    pub values_per_line: usize,

    /// Text for the @brief line of the header comment
    #[arg(long)]
    pub brief: Option<String>,

    /// Convert every clip but do not write the header
    #[arg(long)]
    pub dry_run: bool,
}
