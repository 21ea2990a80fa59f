//! Recipebook Core - Foundation crate for the recipebook workspace.
//!
//! This crate provides the shared error type, configuration management and
//! logging setup that the other recipebook crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`logging`] - `tracing-subscriber` initialization
//!
//! # Example
//!
//! ```rust
//! use recipebook_core::AppConfig;
//!
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.auth.min_password_len, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, AuthConfig, GeneralConfig, PricingConfig};
pub use error::{ConfigError, ConfigResult, RecipeBookError, Result};
pub use logging::{init_from_config, init_tracing};
