//! Recipebook Authentication
//!
//! Email-format validation and username/password authentication.
//!
//! # Credential policy
//!
//! - Usernames: ASCII alphanumeric, 3-32 characters by default
//! - Passwords: 4-64 characters by default
//! - Storage: Argon2id PHC strings with a random 16-byte salt
//!
//! Policy bounds and Argon2 cost come from [`recipebook_core::AuthConfig`].
//! Failed attempts are counted but never lock an account.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod authenticator;
pub mod email;
pub mod error;
pub mod password;
pub mod session;

// Re-export commonly used types
pub use authenticator::Authenticator;
pub use email::{is_valid_email, EmailAddress};
pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use session::AuthState;
