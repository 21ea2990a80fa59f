//! Email address validation.

use crate::error::{AuthError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for email addresses with validation.
///
/// The local part is one or more dot-separated runs of letters, digits and
/// `_%+-`. The domain is two or more dot-separated labels of letters, digits
/// and inner hyphens. Whitespace and consecutive dots are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new `EmailAddress` from a string.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidEmail` if the address is malformed.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        if is_valid_email(&address) {
            Ok(Self(address))
        } else {
            Err(AuthError::InvalidEmail(address))
        }
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = AuthError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check whether `address` is a well-formed email address.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^[A-Za-z0-9_%+-]+(?:\.[A-Za-z0-9_%+-]+)*",
            r"@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
        ))
        .expect("valid regex")
    });

    regex.is_match(address)
}
