//! Configuration management for flashdeck.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name used under the platform config directory.
const APP_DIR_NAME: &str = "flashdeck";

/// Default deck file, relative to the working directory.
const DECK_FILE_NAME: &str = "deck.json";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FLASHDECK_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLASHDECK_`, nested keys split on `__`)
/// 2. TOML config file at `~/.config/flashdeck/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the deck file.
    /// Defaults to `deck.json` in the working directory.
    pub deck_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.storage.deck_path {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "deck_path must not be empty".to_string(),
                });
            }

            if path.is_dir() {
                return Err(Error::ConfigValidation {
                    message: format!("deck_path {} is a directory", path.display()),
                });
            }
        }

        Ok(())
    }

    /// Get the deck path, resolving defaults if not set.
    #[must_use]
    pub fn deck_path(&self) -> PathBuf {
        self.storage
            .deck_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DECK_FILE_NAME))
    }

    /// Replace the deck path, typically from a command-line override.
    ///
    /// The result is validated again so an override obeys the same rules as
    /// a configured path.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn with_deck_path(mut self, path: Option<PathBuf>) -> Result<Self> {
        if path.is_some() {
            self.storage.deck_path = path;
        }
        self.validate()?;
        Ok(self)
    }
}
