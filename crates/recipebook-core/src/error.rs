//! Core error types for the recipebook workspace.
//!
//! Every subsystem crate defines its own error enum; this module holds the
//! workspace-level error that they all convert into.

use thiserror::Error;

/// Central error type for all recipebook operations.
#[derive(Error, Debug)]
pub enum RecipeBookError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog errors (rejected recipes)
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Arithmetic errors (division by zero, overflow)
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Pricing errors (invalid price or discount)
    #[error("pricing error: {0}")]
    Pricing(String),

    /// Authentication errors (registration, hashing)
    #[error("auth error: {0}")]
    Auth(String),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `RecipeBookError`.
pub type Result<T> = std::result::Result<T, RecipeBookError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
