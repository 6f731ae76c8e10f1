use clap::ValueEnum;
use config::{Config, ConfigError, File};
use extractors::PatternConfig;
use serde::{Deserialize, Serialize};
use shared_types::UNKNOWN_NAME;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ImportConfig {
    pub patterns: PatternConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Written in place of names the extractor could not find.
    pub unknown_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            unknown_name: UNKNOWN_NAME.to_string(),
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[patterns]
# Whole-line shape of a member identifier (regular expression)
member_id_pattern = '[A-Z]{2}[0-9]{5}'
# Lines that look like names but never are, compared case-insensitively
# stoplist = ["FELLOW", "MEMBER", "NAME", "CATEGORY", "EMAIL", "TEL1", "Lagos"]
anchor_window = 2
sequential_window = 5
min_chunk_lines = 3
# Also try "Name: ..." / "Email: ..." blocks when nothing else matches
labeled_fields = false

[output]
# "json" or "csv"
format = "json"
unknown_name = "Unknown"
"#;

impl ImportConfig {
    /// Loads the per-user config, writing the default file on first run.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("rollcall").join("import.toml")
    } else {
        PathBuf::from("import.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_matches_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.toml");
        std::fs::write(&path, DEFAULT_CONFIG).unwrap();

        let config = ImportConfig::load_from(&path).unwrap();
        assert_eq!(config.patterns, PatternConfig::default());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.unknown_name, "Unknown");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.toml");
        std::fs::write(
            &path,
            "[patterns]\nmember_id_pattern = 'M-[0-9]{4}'\nlabeled_fields = true\n\n[output]\nformat = \"csv\"\n",
        )
        .unwrap();

        let config = ImportConfig::load_from(&path).unwrap();
        assert_eq!(config.patterns.member_id_pattern, "M-[0-9]{4}");
        assert!(config.patterns.labeled_fields);
        assert_eq!(config.patterns.anchor_window, 2);
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.output.unknown_name, "Unknown");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ImportConfig::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
