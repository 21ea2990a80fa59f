//! Authentication session state.

/// Authentication state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthState {
    /// User of the current session, if authenticated
    current_user: Option<String>,
    /// Failed attempts since the last success
    failed_attempts: u32,
}

impl AuthState {
    /// Create a new unauthenticated state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a user is authenticated
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Get the authenticated username
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Get the number of failed attempts
    #[must_use]
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub(crate) fn record_success(&mut self, username: &str) {
        self.current_user = Some(username.to_string());
        self.failed_attempts = 0;
    }

    pub(crate) fn record_failure(&mut self) {
        self.failed_attempts = self.failed_attempts.saturating_add(1);
    }

    /// Lock the session
    pub fn lock(&mut self) {
        self.current_user = None;
        tracing::info!("Session locked");
    }
}
