//! Error types for settings management.

use thiserror::Error;

/// Settings error type
#[derive(Error, Debug)]
pub enum SettingsError {
    /// File could not be read or written
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed
    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("Invalid TOML settings: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("Failed to serialize TOML settings: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Unsupported file extension
    #[error("Settings file must be .json or .toml: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// A value failed validation
    #[error("Invalid setting {field}: {reason}")]
    Invalid {
        /// The field that failed validation.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type using SettingsError
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
