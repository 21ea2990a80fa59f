//! Tracing subscriber setup.

use crate::config::AppConfig;
use crate::error::{RecipeBookError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directives used when neither `RUST_LOG` nor configuration supply one.
pub const DEFAULT_FILTER: &str = "info,recipebook=debug";

/// Initialize the global tracing subscriber from `general.log_filter`.
///
/// `RUST_LOG` still takes precedence over the configured directives.
pub fn init_from_config(config: &AppConfig) -> Result<()> {
    init_tracing(&config.general.log_filter)
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; `default_directives` is used when it is unset
/// or unparseable.
///
/// # Errors
/// Returns `RecipeBookError::Internal` if the directives are invalid or a
/// global subscriber has already been installed.
pub fn init_tracing(default_directives: &str) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), default_directives)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .map_err(|e| RecipeBookError::Internal(format!("failed to install tracing subscriber: {e}")))
}

/// Pick `rust_log` if it parses, otherwise `fallback`.
fn build_filter(rust_log: Option<&str>, fallback: &str) -> Result<EnvFilter> {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(fallback)
        .map_err(|e| RecipeBookError::Internal(format!("invalid log filter '{fallback}': {e}")))
}
