use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub header: HeaderConfig,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_brief")]
    pub brief: String,
    #[serde(default = "default_include")]
    pub include: String,
    #[serde(default = "default_data_attribute")]
    pub data_attribute: String,
    #[serde(default = "default_values_per_line")]
    pub values_per_line: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            brief: default_brief(),
            include: default_include(),
            data_attribute: default_data_attribute(),
            values_per_line: default_values_per_line(),
        }
    }
}

fn default_extensions() -> Vec<String> { vec!["wav".into()] }
fn default_brief() -> String { "PWM audio tunes".into() }
fn default_include() -> String { "pico/platform.h".into() }
fn default_data_attribute() -> String { "__in_flash()".into() }
pub fn default_values_per_line() -> usize { 16 }

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Option<Config> {
    match toml::from_str(content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::debug!("Config parse error: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.input.extensions, vec!["wav"]);
        assert_eq!(cfg.header.values_per_line, 16);
        assert_eq!(cfg.header.data_attribute, "__in_flash()");
        assert_eq!(cfg.header.include, "pico/platform.h");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = parse_config(
            r#"
            [input]
            extensions = ["wav", "flac"]

            [header]
            values_per_line = 8
            "#,
        )
        .unwrap();
        assert_eq!(cfg.input.extensions, vec!["wav", "flac"]);
        assert_eq!(cfg.header.values_per_line, 8);
        assert_eq!(cfg.header.brief, "PWM audio tunes");
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(parse_config("[header\nbrief = 1").is_none());
    }
}
