//! Configuration management for recipebook.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `general.log_filter`.
pub const ENV_LOG: &str = "RECIPEBOOK_LOG";
/// Environment variable overriding `pricing.max_discount_percent`.
pub const ENV_MAX_DISCOUNT_PERCENT: &str = "RECIPEBOOK_MAX_DISCOUNT_PERCENT";
/// Environment variable overriding `auth.min_password_len`.
pub const ENV_MIN_PASSWORD_LEN: &str = "RECIPEBOOK_MIN_PASSWORD_LEN";

/// Main application configuration.
///
/// This is loaded from `~/.config/recipebook/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General application settings
    pub general: GeneralConfig,
    /// Product pricing rules
    pub pricing: PricingConfig,
    /// Credential policy and password hashing cost
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML or fail validation
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `RECIPEBOOK_LOG`: Override the tracing filter directives
    /// - `RECIPEBOOK_MAX_DISCOUNT_PERCENT`: Override the discount ceiling
    /// - `RECIPEBOOK_MIN_PASSWORD_LEN`: Override the minimum password length
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup. Values that fail to parse are
    /// ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(ENV_LOG) {
            tracing::debug!("Override general.log_filter from env: {}", filter);
            self.general.log_filter = filter;
        }

        if let Some(val) = lookup(ENV_MAX_DISCOUNT_PERCENT) {
            if let Ok(percent) = val.parse() {
                self.pricing.max_discount_percent = percent;
                tracing::debug!("Override pricing.max_discount_percent from env: {}", percent);
            }
        }

        if let Some(val) = lookup(ENV_MIN_PASSWORD_LEN) {
            if let Ok(len) = val.parse() {
                self.auth.min_password_len = len;
                tracing::debug!("Override auth.min_password_len from env: {}", len);
            }
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> ConfigResult<()> {
        self.pricing.validate()?;

        let auth = &self.auth;
        if auth.min_username_len > auth.max_username_len {
            return Err(invalid(
                "auth.min_username_len",
                format!(
                    "must not exceed max_username_len ({} > {})",
                    auth.min_username_len, auth.max_username_len
                ),
            ));
        }
        if auth.min_password_len > auth.max_password_len {
            return Err(invalid(
                "auth.min_password_len",
                format!(
                    "must not exceed max_password_len ({} > {})",
                    auth.min_password_len, auth.max_password_len
                ),
            ));
        }
        if auth.argon2_memory_kb == 0 {
            return Err(invalid("auth.argon2_memory_kb", "must be positive".to_string()));
        }
        if auth.argon2_iterations == 0 {
            return Err(invalid("auth.argon2_iterations", "must be positive".to_string()));
        }

        Ok(())
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/recipebook/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/recipebook`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }
}

fn project_dirs() -> ConfigResult<ProjectDirs> {
    ProjectDirs::from("com", "recipebook", "recipebook").ok_or(ConfigError::NoConfigDir)
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: crate::logging::DEFAULT_FILTER.to_string(),
        }
    }
}

/// Product pricing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Largest discount, in percent, a product accepts
    pub max_discount_percent: f64,
}

impl PricingConfig {
    /// Check that the discount ceiling is a finite percentage in `[0, 100]`.
    pub fn validate(&self) -> ConfigResult<()> {
        let max_discount = self.max_discount_percent;
        if !max_discount.is_finite() || !(0.0..=100.0).contains(&max_discount) {
            return Err(invalid(
                "pricing.max_discount_percent",
                format!("must be between 0 and 100, got {max_discount}"),
            ));
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            max_discount_percent: 50.0,
        }
    }
}

/// Credential policy and Argon2 cost settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Minimum username length in characters
    pub min_username_len: usize,
    /// Maximum username length in characters
    pub max_username_len: usize,
    /// Minimum password length in characters
    pub min_password_len: usize,
    /// Maximum password length in characters
    pub max_password_len: usize,
    /// Argon2 memory cost in KB
    pub argon2_memory_kb: u32,
    /// Argon2 iteration count
    pub argon2_iterations: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_username_len: 3,
            max_username_len: 32,
            min_password_len: 4,
            max_password_len: 64,
            argon2_memory_kb: 19_456, // 19 MB
            argon2_iterations: 2,
        }
    }
}
