//! letterdrill - terminal alphabet drill
//!
//! A TUI quiz application that shows random letters and scores answers
//! across two drill modes: opposite letters and letter places.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod quiz;

// Common error types
#[derive(Debug)]
pub enum LetterDrillError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for LetterDrillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterDrillError::IoError(err) => write!(f, "I/O error: {}", err),
            LetterDrillError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LetterDrillError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for LetterDrillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LetterDrillError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LetterDrillError {
    fn from(err: std::io::Error) -> Self {
        LetterDrillError::IoError(err)
    }
}

impl From<toml::de::Error> for LetterDrillError {
    fn from(err: toml::de::Error) -> Self {
        LetterDrillError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for LetterDrillError {
    fn from(err: toml::ser::Error) -> Self {
        LetterDrillError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for letterdrill operations
pub type Result<T> = std::result::Result<T, LetterDrillError>;

// Common types and constants
pub const APP_NAME: &str = "letterdrill";
pub const CONFIG_FILE: &str = "letterdrill.toml";

/// Question count used when the setup entry is empty or not a number
pub const DEFAULT_QUESTION_COUNT: u32 = 30;
/// Smallest allowed question count per run
pub const MIN_QUESTION_COUNT: u32 = 1;
/// Largest allowed question count per run
pub const MAX_QUESTION_COUNT: u32 = 50;
