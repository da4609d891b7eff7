//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the in-memory auth store and the resolved server configuration.
//! There is no database: sessions and pending codes are transient.

use std::sync::Arc;

use crate::services::session::AuthStore;

/// Server configuration resolved once from the environment at startup.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Echo access codes in the request-code response (dev mode, in place
    /// of email delivery).
    pub echo_codes: bool,
    /// Normalized emails granted the admin role.
    pub admin_emails: Vec<String>,
}

impl ServerConfig {
    /// Whether `email` (already normalized) holds the admin role.
    #[must_use]
    pub fn is_admin(&self, email: &str) -> bool {
        self.admin_emails.iter().any(|e| e == email)
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { auth: AuthStore::new(), config: Arc::new(config) }
    }
}
