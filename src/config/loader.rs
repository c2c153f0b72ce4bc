use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;
use crate::form::FieldId;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/contactform/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("contactform").join("config.toml")
    }

    /// Default log file location, under the platform cache directory.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("contactform").join("contactform.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint URL parses as an http(s) URL
    /// - Every field has a non-empty identifier
    /// - No two fields share an identifier
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.endpoint.url).map_err(|e| ConfigError::ValidationError {
            message: format!("Endpoint URL '{}' is invalid: {}", self.endpoint.url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("Endpoint URL '{}' must use http or https", self.endpoint.url),
            });
        }

        let mut seen = HashSet::new();
        for field in FieldId::ALL {
            let id = self.endpoint.fields.get(field).trim();
            if id.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Field '{}' has an empty identifier", field),
                });
            }
            if !seen.insert(id) {
                return Err(ConfigError::ValidationError {
                    message: format!("Identifier '{}' is used by more than one field", id),
                });
            }
        }

        Ok(())
    }
}
