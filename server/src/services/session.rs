//! Email access-code auth and session management.
//!
//! ARCHITECTURE
//! ============
//! Login issues a short-lived six-character code linked to an email; a
//! successful verification consumes the code and mints a long-lived session
//! token. Both live in one in-memory store; sessions and pending codes are
//! transient and there is no database behind them.
//!
//! TRADE-OFFS
//! ==========
//! Code consumption is destructive to guarantee single use; this favors
//! replay safety over retype convenience. Repeated wrong guesses burn the
//! code after a fixed attempt budget.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rand::Rng;
use uuid::Uuid;

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_TTL: Duration = Duration::from_secs(10 * 60);
const MAX_FAILED_ATTEMPTS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
}

// =============================================================================
// HELPERS
// =============================================================================

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Generate a six-character access code from an ambiguity-free alphabet.
#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.len() != CODE_LEN
        || !normalized
            .chars()
            .all(|c| CODE_ALPHABET.contains(&(c as u8)))
    {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn name_from_email(email: &str) -> String {
    let local = email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user");
    local.to_owned()
}

// =============================================================================
// SESSION USER
// =============================================================================

/// User attached to a validated session.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name, derived from the email local part.
    pub name: String,
    /// Email address the session was verified against.
    pub email: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Whether this user holds the admin role.
    pub is_admin: bool,
}

// =============================================================================
// AUTH STORE
// =============================================================================

struct PendingCode {
    code: String,
    issued_at: Instant,
    attempts: u32,
}

/// In-memory store for pending login codes and live sessions.
#[derive(Clone)]
pub struct AuthStore {
    inner: Arc<Mutex<AuthStoreInner>>,
}

struct AuthStoreInner {
    /// Pending login codes keyed by normalized email. One live code per
    /// email; issuing a new one replaces the old.
    codes: HashMap<String, PendingCode>,
    /// Live sessions keyed by token.
    sessions: HashMap<String, SessionUser>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(AuthStoreInner {
                codes: HashMap::new(),
                sessions: HashMap::new(),
            })),
        }
    }

    /// Issue a fresh access code for `email`, replacing any pending one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidEmail` for a malformed address.
    pub fn issue_code(&self, email: &str) -> Result<String, SessionError> {
        self.issue_code_at(email, Instant::now())
    }

    fn issue_code_at(&self, email: &str, now: Instant) -> Result<String, SessionError> {
        let normalized = normalize_email(email).ok_or(SessionError::InvalidEmail)?;
        let code = generate_access_code();
        let mut inner = self.lock();
        inner.codes.insert(
            normalized,
            PendingCode { code: code.clone(), issued_at: now, attempts: 0 },
        );
        Ok(code)
    }

    /// Verify `code` against the pending code for `email`, consuming it on
    /// success. Returns the normalized email.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmail`/`InvalidCode` for malformed input and
    /// `VerificationFailed` for a missing, expired, burned, or wrong code.
    pub fn verify_code(&self, email: &str, code: &str) -> Result<String, SessionError> {
        self.verify_code_at(email, code, Instant::now())
    }

    fn verify_code_at(&self, email: &str, code: &str, now: Instant) -> Result<String, SessionError> {
        let normalized_email = normalize_email(email).ok_or(SessionError::InvalidEmail)?;
        let normalized_code = normalize_code(code).ok_or(SessionError::InvalidCode)?;

        let mut inner = self.lock();
        let Some(pending) = inner.codes.get_mut(&normalized_email) else {
            return Err(SessionError::VerificationFailed);
        };
        if now.duration_since(pending.issued_at) > CODE_TTL {
            inner.codes.remove(&normalized_email);
            return Err(SessionError::VerificationFailed);
        }
        if pending.code != normalized_code {
            pending.attempts += 1;
            if pending.attempts >= MAX_FAILED_ATTEMPTS {
                inner.codes.remove(&normalized_email);
            }
            return Err(SessionError::VerificationFailed);
        }

        inner.codes.remove(&normalized_email);
        Ok(normalized_email)
    }

    /// Create a session for the given user, returning the token.
    pub fn create_session(&self, user: SessionUser) -> String {
        let token = generate_token();
        self.lock().sessions.insert(token.clone(), user);
        token
    }

    /// Validate a session token and return the associated user.
    #[must_use]
    pub fn validate_session(&self, token: &str) -> Option<SessionUser> {
        self.lock().sessions.get(token).cloned()
    }

    /// Delete a session by token.
    pub fn delete_session(&self, token: &str) {
        self.lock().sessions.remove(token);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AuthStoreInner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}
