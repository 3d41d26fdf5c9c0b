use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

impl Config {
    /// Returns the default path of the configuration file.
    ///
    /// `~/.config/cinescout/config.toml` on Unix/macOS, the platform
    /// equivalent elsewhere via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cinescout").join("config.toml")
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

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that both service URLs look like HTTP endpoints and that every
    /// timeout and the tick interval are non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_url("location.base_url", &self.location.base_url)?;

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                message: "api.timeout_seconds must be greater than zero".to_string(),
            });
        }
        if self.location.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                message: "location.timeout_seconds must be greater than zero".to_string(),
            });
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation {
                message: "ui.tick_ms must be greater than zero".to_string(),
            });
        }
        if !self.ui.map_lat_span.is_finite() || self.ui.map_lat_span <= 0.0 {
            return Err(ConfigError::Validation {
                message: "ui.map_lat_span must be a positive number".to_string(),
            });
        }
        if !self.ui.map_lon_span.is_finite() || self.ui.map_lon_span <= 0.0 {
            return Err(ConfigError::Validation {
                message: "ui.map_lon_span must be a positive number".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(ConfigError::Validation {
        message: format!("{} must start with http:// or https://, got '{}'", field, value),
    })
}
