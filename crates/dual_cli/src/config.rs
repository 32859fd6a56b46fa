//! CLI configuration management
//!
//! Loads `dualad.toml` (or the file given with `--config`). Every field is
//! optional; missing fields and a missing file fall back to defaults.
//!
//! ```toml
//! precision = 6
//! log_level = "debug"
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::{CliError, Result};

/// Largest number of decimals shown; beyond this f64 output is noise.
const MAX_PRECISION: usize = 15;

/// Log levels accepted in the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Settings shared by all commands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Decimals shown for values and derivatives
    pub precision: usize,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            log_level: LogLevel::Info,
        }
    }
}

impl CliConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map(Some)
    }

    fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(CliError::Config(format!(
                "precision {} exceeds maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.precision, 4);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::from_toml_str("precision = 6\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.precision, 6);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = CliConfig::from_toml_str("precision = 2\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_rejects_excessive_precision() {
        assert!(matches!(
            CliConfig::from_toml_str("precision = 40\n"),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(CliConfig::from_toml_str("colour = true\n").is_err());
    }

    #[test]
    fn test_missing_file_is_none() {
        let loaded = CliConfig::load(Path::new("/nonexistent/dualad.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }
}
