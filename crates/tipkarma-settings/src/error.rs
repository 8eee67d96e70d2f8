//! Error types for the settings store.

use thiserror::Error;

/// Errors from reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
