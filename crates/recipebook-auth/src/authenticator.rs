//! Username/password authentication against registered credentials.

use crate::{
    error::{AuthError, Result},
    password::{hash_password, verify_password},
    session::AuthState,
};
use recipebook_core::AuthConfig;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Registered credentials plus the state of the current session.
///
/// Only Argon2id hashes are kept; plaintext passwords are never stored.
#[derive(Debug, Default)]
pub struct Authenticator {
    config: AuthConfig,
    /// PHC hash strings, indexed by username
    users: HashMap<String, String>,
    state: AuthState,
}

impl Authenticator {
    /// Create an authenticator with no registered users.
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            users: HashMap::new(),
            state: AuthState::new(),
        }
    }

    /// Register a user.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidUsername` or `AuthError::InvalidPassword`
    /// when the credentials violate the policy, `AuthError::UserExists` when
    /// the username is taken, and `AuthError::Hashing` if hashing fails.
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        self.check_username(username)?;
        self.check_password(password)?;

        if self.users.contains_key(username) {
            return Err(AuthError::UserExists(username.to_string()));
        }

        let hash = hash_password(password, &self.config)?;
        self.users.insert(username.to_string(), hash);

        info!(username, "registered user");
        Ok(())
    }

    /// Check a username/password pair.
    ///
    /// Returns `false` for policy violations, unknown users and wrong
    /// passwords alike. A success starts a session for `username`; a failure
    /// increments the failed-attempt counter.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        match self.verify(username, password) {
            Ok(()) => {
                self.state.record_success(username);
                debug!(username, "authentication succeeded");
                true
            }
            Err(reason) => {
                self.state.record_failure();
                warn!(
                    username,
                    %reason,
                    failed_attempts = self.state.failed_attempts(),
                    "authentication failed"
                );
                false
            }
        }
    }

    fn verify(&self, username: &str, password: &str) -> std::result::Result<(), String> {
        self.check_username(username).map_err(|e| e.to_string())?;
        self.check_password(password).map_err(|e| e.to_string())?;

        let hash = self
            .users
            .get(username)
            .ok_or_else(|| "unknown user".to_string())?;

        match verify_password(password, hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err("wrong password".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    fn check_username(&self, username: &str) -> Result<()> {
        let len = username.chars().count();
        if len < self.config.min_username_len || len > self.config.max_username_len {
            return Err(AuthError::InvalidUsername(format!(
                "must be {}-{} characters, got {len}",
                self.config.min_username_len, self.config.max_username_len
            )));
        }

        if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AuthError::InvalidUsername(format!(
                "must be alphanumeric, got '{username}'"
            )));
        }

        Ok(())
    }

    fn check_password(&self, password: &str) -> Result<()> {
        let len = password.chars().count();
        if len < self.config.min_password_len || len > self.config.max_password_len {
            return Err(AuthError::InvalidPassword(format!(
                "must be {}-{} characters, got {len}",
                self.config.min_password_len, self.config.max_password_len
            )));
        }
        Ok(())
    }

    /// Check whether `username` is registered.
    #[must_use]
    pub fn is_registered(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Get the number of registered users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Check if a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Get the user of the active session.
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.state.current_user()
    }

    /// Get the number of failed attempts since the last success.
    #[must_use]
    pub fn failed_attempts(&self) -> u32 {
        self.state.failed_attempts()
    }

    /// End the active session.
    pub fn lock(&mut self) {
        self.state.lock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> AuthConfig {
        AuthConfig {
            argon2_memory_kb: 64,
            argon2_iterations: 1,
            ..AuthConfig::default()
        }
    }

    fn with_admin() -> Authenticator {
        let mut auth = Authenticator::new(fast_config());
        auth.register("admin", "1234").expect("register admin");
        auth
    }

    #[test]
    fn test_valid_authentication() {
        let mut auth = with_admin();
        assert!(auth.authenticate("admin", "1234"));
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user(), Some("admin"));
    }

    #[test]
    fn test_wrong_password() {
        let mut auth = with_admin();
        assert!(!auth.authenticate("admin", "wrongpassword"));
        assert!(!auth.is_authenticated());
        assert_eq!(auth.failed_attempts(), 1);
    }

    #[test]
    fn test_unknown_user() {
        let mut auth = with_admin();
        assert!(!auth.authenticate("guest", "1234"));
    }

    #[test]
    fn test_register_duplicate() {
        let mut auth = with_admin();
        let result = auth.register("admin", "5678");
        assert_eq!(result, Err(AuthError::UserExists("admin".to_string())));
        assert_eq!(auth.user_count(), 1);
        // Original password still works
        assert!(auth.authenticate("admin", "1234"));
    }

    #[test]
    fn test_register_policy() {
        let mut auth = Authenticator::new(fast_config());
        assert!(matches!(
            auth.register("a", "1234"),
            Err(AuthError::InvalidUsername(_))
        ));
        assert!(matches!(
            auth.register("admin#123", "1234"),
            Err(AuthError::InvalidUsername(_))
        ));
        assert!(matches!(
            auth.register("admin", "123"),
            Err(AuthError::InvalidPassword(_))
        ));
        assert!(matches!(
            auth.register("admin", &"a".repeat(65)),
            Err(AuthError::InvalidPassword(_))
        ));
        assert_eq!(auth.user_count(), 0);
    }

    #[test]
    fn test_lock_ends_session() {
        let mut auth = with_admin();
        assert!(auth.authenticate("admin", "1234"));
        auth.lock();
        assert!(!auth.is_authenticated());
        // Registered users survive a lock
        assert!(auth.is_registered("admin"));
    }

    #[test]
    fn test_default_uses_default_policy() {
        let auth = Authenticator::default();
        assert_eq!(auth.user_count(), 0);
        assert_eq!(auth.config.min_password_len, 4);
    }
}
