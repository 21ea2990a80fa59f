//! Error types for authentication.

use recipebook_core::RecipeBookError;
use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email address is malformed
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    /// Username violates the credential policy
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Password violates the credential policy
    #[error("invalid password: {0}")]
    InvalidPassword(String),

    /// Username is already registered
    #[error("user already exists: {0}")]
    UserExists(String),

    /// Password hashing or hash parsing failed
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

impl From<AuthError> for RecipeBookError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidEmail(_) => RecipeBookError::Validation(err.to_string()),
            other => RecipeBookError::Auth(other.to_string()),
        }
    }
}
