//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the home-route bootstrap, route guards, and identity-dependent
//! rendering. Mutated only by the app shell's session restore and by the
//! login/logout flows; everything else reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `restoring` covers the one-time cookie-session restore at startup;
/// `loading` covers in-flight login/logout operations. Navigation decisions
/// must wait until both have cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub restoring: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: false, restoring: true }
    }
}

impl AuthState {
    /// Whether the restored session carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}
