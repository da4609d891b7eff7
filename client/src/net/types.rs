//! DTOs for the client/server API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's response payloads so serde round-trips
//! stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name, derived from the email local part unless set.
    pub name: String,
    /// Email address the session was verified against.
    pub email: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Whether this user holds the admin role.
    #[serde(default)]
    pub is_admin: bool,
}
