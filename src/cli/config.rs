//! Runner configuration file
//!
//! Optional JSON file passed with `run --config`. Every field has a
//! default, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::experiments;
use crate::observability::LogFormat;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log line format (optional, default "text")
    #[serde(default)]
    pub log_format: LogFormat,

    /// Stop at the first failing probe (optional, default false)
    #[serde(default)]
    pub fail_fast: bool,

    /// Experiments to run (optional, default all)
    #[serde(default)]
    pub experiments: Vec<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Every listed experiment must exist
    fn validate(&self) -> CliResult<()> {
        for name in &self.experiments {
            if !experiments::NAMES.contains(&name.as_str()) {
                return Err(CliError::config_error(format!(
                    "Invalid experiment '{}'. Must be one of: {}.",
                    name,
                    experiments::NAMES.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"{ "log_format": "json", "fail_fast": true, "experiments": ["frozen"] }"#,
        )
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.fail_fast);
        assert_eq!(config.experiments, vec!["frozen"]);
    }

    #[test]
    fn test_unknown_experiment_rejected() {
        let err = Config::parse(r#"{ "experiments": ["rounding"] }"#).unwrap_err();
        assert_eq!(err.code_str(), "PROBE_CLI_CONFIG_ERROR");
        assert!(err.message().contains("rounding"));
    }

    #[test]
    fn test_unknown_key_and_format_rejected() {
        assert!(Config::parse(r#"{ "verbose": true }"#).is_err());
        assert!(Config::parse(r#"{ "log_format": "xml" }"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("modelprobe.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }
}
