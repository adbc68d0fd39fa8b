//! Configuration management for the Farm Assistant
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FARM__ prefix (FARM__CHAT__REPLY_DELAY_MS)

use std::path::PathBuf;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Language;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Key-value storage configuration
    pub storage: StorageConfig,

    /// Interface defaults
    pub ui: UiConfig,

    /// Chat reply timing
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Where persisted keys live
    pub backend: StorageBackend,

    /// JSON file used by the file backend
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Language used until a saved preference is loaded
    pub default_language: Language,

    /// Location whose weather is shown on startup
    pub default_location: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// Minimum "thinking" delay before the bot answers
    pub reply_delay_ms: u64,

    /// Random extra delay added on top, drawn from 0..reply_jitter_ms
    pub reply_jitter_ms: u64,
}

impl ChatConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.reply_jitter_ms)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("storage.backend", "file")?
            .set_default("storage.path", "farm-assistant-data.json")?
            .set_default("ui.default_language", "en")?
            .set_default("ui.default_location", shared::DEFAULT_LOCATION)?
            .set_default("chat.reply_delay_ms", 1500)?
            .set_default("chat.reply_jitter_ms", 1000)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM__ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            storage: StorageConfig::default(),
            ui: UiConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            path: PathBuf::from("farm-assistant-data.json"),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: Language::English,
            default_location: shared::DEFAULT_LOCATION.to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            reply_jitter_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.ui.default_language, Language::English);
        assert_eq!(config.ui.default_location, "New Delhi");
        assert_eq!(config.chat.base_delay(), Duration::from_millis(1500));
        assert_eq!(config.chat.jitter(), Duration::from_millis(1000));
    }

    #[test]
    fn test_load_uses_code_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.ui.default_location, "New Delhi");
        assert!(config.chat.reply_delay_ms > 0);
    }
}
