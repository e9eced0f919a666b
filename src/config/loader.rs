use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::config::types::{Config, IdStrategy};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::ParseError { source: e })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Date and time formats are non-empty strftime patterns that can be
    ///   rendered from a local date-time (no time-zone directives)
    /// - Sequential ids have a non-empty prefix
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_format("date_format", &self.time.date_format)?;
        check_format("time_format", &self.time.time_format)?;

        if self.items.id_strategy == IdStrategy::Sequential && self.items.id_prefix.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "id_prefix must not be empty for sequential ids".to_string(),
            });
        }

        Ok(())
    }
}

fn check_format(name: &str, pattern: &str) -> Result<(), ConfigError> {
    if pattern.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: format!("{} must not be empty", name),
        });
    }

    // Rendering catches both unparsable directives and ones a naive
    // date-time cannot supply, such as time zones.
    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveDateTime::default().format(pattern)).is_err() {
        return Err(ConfigError::ValidationError {
            message: format!(
                "{} '{}' is not a valid strftime pattern for a local date-time",
                name, pattern
            ),
        });
    }

    Ok(())
}
