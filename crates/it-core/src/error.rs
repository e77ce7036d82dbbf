//! Error types for it-core

use thiserror::Error;

/// Core error type for Iron Test administration
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Installation home directory not found
    #[error("[E001] Iron Test home directory not found: {path}")]
    HomeNotFound { path: String },

    /// E002: Configuration file not found
    #[error("[E002] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E005: YAML parse error
    #[error("[E005] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E006: Version string is not major.minor.patch[-qualifier]
    #[error("[E006] Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    /// E007: System database URL cannot be handled
    #[error("[E007] Invalid system database URL '{url}': {reason}")]
    InvalidDatabaseUrl { url: String, reason: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
