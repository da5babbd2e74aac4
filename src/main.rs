mod audio;
mod cli;
mod config;
mod error;
mod header;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use cli::Cli;
use config::default_values_per_line;
use header::document::HeaderOptions;
use header::record::RecordStyle;
use pipeline::RunOptions;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    // Load config: explicit --config path, or auto-detect pwmtunes.toml / global config
    let config_path = cli.config.clone().or_else(|| {
        let in_input = cli.input_dir.join("pwmtunes.toml");
        if in_input.exists() {
            return Some(in_input);
        }
        let local = PathBuf::from("pwmtunes.toml");
        if local.exists() {
            return Some(local);
        }
        if let Some(home) = dirs::home_dir() {
            let xdg = home.join(".config").join("pwmtunes").join("config.toml");
            if xdg.exists() {
                return Some(xdg);
            }
        }
        if let Some(config_dir) = dirs::config_dir() {
            let platform = config_dir.join("pwmtunes").join("config.toml");
            if platform.exists() {
                return Some(platform);
            }
        }
        None
    });

    let mut cfg = config::Config::default();
    if let Some(ref path) = config_path {
        if let Some(loaded) = config::load_config(path) {
            log::info!("Loaded config from {}", path.display());
            cfg = loaded;
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    // Merge: CLI values win unless left at their defaults
    let values_per_line = if cli.values_per_line != default_values_per_line() {
        cli.values_per_line
    } else {
        cfg.header.values_per_line
    };
    if values_per_line == 0 {
        anyhow::bail!("--values-per-line must be at least 1");
    }

    let file_name = cli
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.output.display().to_string());

    let opts = RunOptions {
        input_dir: cli.input_dir.clone(),
        extensions: cfg.input.extensions,
        header: HeaderOptions {
            file_name,
            brief: cli.brief.clone().unwrap_or(cfg.header.brief),
            include: cfg.header.include,
            style: RecordStyle {
                values_per_line,
                data_attribute: cfg.header.data_attribute,
            },
        },
    };

    log::info!("pwmtunes - PWM sound table generator");
    log::info!("Input directory: {}", opts.input_dir.display());
    log::info!("Output: {}", cli.output.display());

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} clips {msg}")?
            .progress_chars("=>-"),
    );

    let output = (!cli.dry_run).then_some(cli.output.as_path());
    let summary = pipeline::run(&opts, output, &pb);
    pb.finish_and_clear();
    let summary = summary?;

    for (name, len) in &summary.tunes {
        log::info!("  {:<24} {:>8} samples", name, len);
    }
    for name in &summary.ignored {
        log::warn!("Ignored duplicate: {}", name);
    }
    if !summary.unrecognized.is_empty() {
        log::info!("Skipped {} file(s) with no category", summary.unrecognized.len());
    }
    log::info!(
        "Swing: {}, clash: {}, total: {} samples ({:.2}s at {}Hz)",
        summary.swing_count,
        summary.clash_count,
        summary.total_samples,
        summary.total_samples as f64 / audio::resample::TARGET_SAMPLE_RATE as f64,
        audio::resample::TARGET_SAMPLE_RATE
    );

    if cli.dry_run {
        log::info!("Dry run, no header written");
    } else {
        log::info!("Done! Output: {}", cli.output.display());
    }
    Ok(())
}
