//! Configuration module for the ferrule CLI.
//!
//! Loads `ferrule.toml`, which holds output preferences and the
//! `[runtime]` table passed straight to [`ferrule_ident::Runtime`].

use std::path::{Path, PathBuf};

use dirs::config_dir;
use ferrule_ident::RuntimeConfig;
use serde::{Deserialize, Serialize};

use crate::commands::common::OutputFormat;
use crate::error::{FerruleError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ferrule.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Default output format for reports.
    #[serde(default)]
    pub format: OutputFormat,

    /// Identifier runtime layout.
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then the user's configuration
    /// directory. Returns the default configuration if no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FerruleError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| FerruleError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.runtime.validate()?;
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ferrule").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
