//! Configuration management for the AnimeSensei toolkit.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,

    /// AniList metadata API settings
    pub anilist: AnilistConfig,

    /// Streaming-metadata mirror settings
    pub mirrors: MirrorsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

/// AniList GraphQL API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnilistConfig {
    /// GraphQL endpoint URL
    pub base_url: String,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Total request timeout in seconds
    pub request_timeout_secs: u64,

    /// Default page size for catalog listings
    pub page_size: u32,

    /// Number of entries in the trending ranking
    pub trending_size: u32,
}

/// Streaming-metadata mirror configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorsConfig {
    /// Interchangeable base URLs for the streaming-metadata service.
    /// Tried in order starting from the current rotation cursor.
    pub endpoints: Vec<String>,

    /// Per-attempt timeout in seconds
    pub request_timeout_secs: u64,

    /// Timeout for health probes in seconds
    pub health_timeout_secs: u64,

    /// Keep the rotation cursor across calls instead of resetting it to
    /// the first mirror for every logical operation
    #[serde(default = "default_sticky")]
    pub sticky_cursor: bool,
}

fn default_sticky() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                log_dir: "logs".to_string(),
                default_level: "info".to_string(),
                console: true,
                file: true,
                json_format: false,
            },
            anilist: AnilistConfig {
                base_url: "https://graphql.anilist.co".to_string(),
                connect_timeout_secs: 5,
                request_timeout_secs: 30,
                page_size: 12,
                trending_size: 10,
            },
            mirrors: MirrorsConfig {
                endpoints: vec![
                    "https://api.consumet.org/anime/gogoanime".to_string(),
                    "https://consumet-api.vercel.app/anime/gogoanime".to_string(),
                    "https://api-consumet-org.vercel.app/anime/gogoanime".to_string(),
                ],
                request_timeout_secs: 15,
                health_timeout_secs: 5,
                sticky_cursor: true,
            },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load configuration from a TOML file or fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration saved successfully"
        );

        Ok(())
    }

    /// Get the path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.logging.log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.anilist.base_url, "https://graphql.anilist.co");
        assert_eq!(config.mirrors.endpoints.len(), 3);
        assert_eq!(config.mirrors.request_timeout_secs, 15);
        assert_eq!(config.mirrors.health_timeout_secs, 5);
        assert!(config.mirrors.sticky_cursor);
    }

    #[test]
    fn test_save_and_load_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let original_config = Config::default();
        original_config.save(&config_path)?;

        assert!(config_path.exists());

        let loaded_config = Config::from_file(&config_path)?;
        assert_eq!(loaded_config.anilist.base_url, original_config.anilist.base_url);
        assert_eq!(loaded_config.mirrors.endpoints, original_config.mirrors.endpoints);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        // Should return default config without error
        assert_eq!(config.mirrors.endpoints.len(), 3);
    }

    #[test]
    fn test_sticky_cursor_defaults_on_when_missing() {
        let toml_str = r#"
            [logging]
            log_dir = "logs"
            default_level = "info"
            console = true
            file = false
            json_format = false

            [anilist]
            base_url = "https://graphql.anilist.co"
            connect_timeout_secs = 5
            request_timeout_secs = 30
            page_size = 12
            trending_size = 10

            [mirrors]
            endpoints = ["https://a.example", "https://b.example"]
            request_timeout_secs = 15
            health_timeout_secs = 5
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.mirrors.sticky_cursor);
        assert_eq!(config.mirrors.endpoints.len(), 2);
    }
}
