//! Application configuration loaded from TOML.

use crate::theme::ThemeConfig;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Runtime configuration for the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// File the tracing output is written to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Capture mouse events so cells and the reset button are clickable.
    #[serde(default = "default_mouse")]
    mouse: bool,

    /// Colour palette.
    #[serde(default)]
    theme: ThemeConfig,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("ocean_tictactoe.log")
}

#[instrument]
fn default_mouse() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            mouse: default_mouse(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(e) => {
                return Err(ConfigError::new(format!("Failed to read config file: {}", e)));
            }
        };

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string and validates the theme.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => return Err(ConfigError::new(format!("Failed to parse config: {}", e))),
        };
        config.theme.palette()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes the configuration back to TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        match toml::to_string(self) {
            Ok(text) => Ok(text),
            Err(e) => Err(ConfigError::new(format!("Failed to serialize config: {}", e))),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_setters_override() {
        let config = AppConfig::default()
            .with_mouse(false)
            .with_log_file(PathBuf::from("other.log"));
        assert!(!*config.mouse());
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let err = AppConfig::from_toml("mouse = \"sometimes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"), "{}", err);
        assert!(err.file.ends_with("config.rs"), "{}", err);
    }

    #[test]
    fn test_error_records_call_site() {
        let line = line!() + 1;
        let err = ConfigError::new("boom".to_string());
        assert_eq!(err.line, line);
        assert!(err.file.ends_with("config.rs"));
    }
}
