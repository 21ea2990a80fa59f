//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
//! which carry their own parameters. Verification therefore works even after
//! the configured cost changes.

use crate::error::{AuthError, Result};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, ParamsBuilder, Version};
use rand::{rngs::OsRng, RngCore};
use recipebook_core::AuthConfig;
use zeroize::Zeroizing;

/// Length of the random salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Argon2id parallelism (threads).
const PARALLELISM: u32 = 1;

fn hasher(config: &AuthConfig) -> Result<Argon2<'static>> {
    let params = ParamsBuilder::new()
        .m_cost(config.argon2_memory_kb)
        .t_cost(config.argon2_iterations)
        .p_cost(PARALLELISM)
        .build()
        .map_err(|e| AuthError::Hashing(format!("failed to build parameters: {e}")))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash `password` with a fresh random salt.
///
/// # Errors
/// Returns `AuthError::Hashing` if the configured cost parameters are
/// rejected by Argon2 or hashing fails.
pub fn hash_password(password: &str, config: &AuthConfig) -> Result<String> {
    let mut salt_bytes = Zeroizing::new([0u8; SALT_LENGTH]);
    OsRng.fill_bytes(salt_bytes.as_mut());

    let salt = SaltString::encode_b64(salt_bytes.as_ref())
        .map_err(|e| AuthError::Hashing(format!("failed to encode salt: {e}")))?;

    let hash = hasher(config)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(format!("hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Check `password` against a PHC hash string.
///
/// A mismatch is `Ok(false)`.
///
/// # Errors
/// Returns `AuthError::Hashing` if `phc` is not a valid hash string.
pub fn verify_password(password: &str, phc: &str) -> Result<bool> {
    let parsed = PasswordHash::new(phc)
        .map_err(|e| AuthError::Hashing(format!("malformed password hash: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(format!("verification failed: {e}"))),
    }
}
