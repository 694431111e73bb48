//! Application configuration loaded from a TOML file
//!
//! Configuration lives at `<config dir>/boletim/config.toml`. A missing file
//! means defaults; command-line flags override whatever was loaded.

use crate::tea::message::LayoutMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine config directory")]
    NoConfigDir,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// Post service endpoints and request behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the post service
    pub base_url: String,

    /// Optional auxiliary endpoint serving the status banner
    pub service_url: Option<String>,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Interface defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How many posts to request on startup
    pub post_limit: u16,

    /// Layout presentation to start in
    pub layout: LayoutMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            service_url: None,
            request_timeout_secs: 10,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            post_limit: 5,
            layout: LayoutMode::Cards,
        }
    }
}

impl ApiConfig {
    /// Request timeout as a std `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    /// Load configuration from disk, falling back to defaults when missing
    pub fn load(config_dir: Option<&Path>) -> ConfigResult<Self> {
        let config_path = Self::config_file_path(config_dir)?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self, config_dir: Option<&Path>) -> ConfigResult<()> {
        let config_path = Self::config_file_path(config_dir)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Path of the configuration file, honoring an explicit directory override
    fn config_file_path(config_dir: Option<&Path>) -> ConfigResult<PathBuf> {
        let dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("boletim"),
        };

        Ok(dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.api.service_url, None);
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.ui.post_limit, 5);
        assert_eq!(config.ui.layout, LayoutMode::Cards);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            post_limit = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.post_limit, 20);
        assert_eq!(config.ui.layout, LayoutMode::Cards);
        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.api.service_url = Some("http://localhost:3000".to_string());
        config.ui.post_limit = 42;
        config.ui.layout = LayoutMode::List;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
