//! Configuration management module
//!
//! Handles loading, saving, and validation of startup defaults. The
//! config file only seeds the setup screen; a drill session itself is
//! never persisted.

use crate::{
    LetterDrillError, Result, APP_NAME, CONFIG_FILE, DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT,
    MIN_QUESTION_COUNT,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Startup defaults for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Question count used when the setup entry is left empty
    pub default_question_count: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl AppConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.default_question_count < MIN_QUESTION_COUNT
            || self.default_question_count > MAX_QUESTION_COUNT
        {
            return Err(LetterDrillError::ConfigError(format!(
                "default_question_count must be between {} and {}",
                MIN_QUESTION_COUNT, MAX_QUESTION_COUNT
            )));
        }
        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LetterDrillError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            LetterDrillError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LetterDrillError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            LetterDrillError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            LetterDrillError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/letterdrill/letterdrill.toml or the platform equivalent
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            LetterDrillError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
