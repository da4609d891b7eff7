//! REST API helpers for communicating with the server.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning `None`/error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing the app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "csr")]
use serde::Deserialize;

#[cfg(any(test, feature = "csr"))]
fn request_code_failed_message(status: u16) -> String {
    format!("request code failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn verify_code_failed_message(status: u16) -> String {
    format!("verify code failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct RequestCodeResponse {
    ok: bool,
    code: Option<String>,
}

/// Request a 6-character login code via `POST /api/auth/email/request-code`.
///
/// Returns an optional code string when the server is configured to echo
/// codes instead of delivering them.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn request_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_code_failed_message(resp.status()));
        }
        let body: RequestCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = email;
        Err("not available outside the browser".to_owned())
    }
}

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct VerifyCodeResponse {
    ok: bool,
}

/// Verify a login code via `POST /api/auth/email/verify-code`. On success
/// the server sets the session cookie.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the code is rejected.
pub async fn verify_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_code_failed_message(resp.status()));
        }
        let body: VerifyCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("verify code failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, code);
        Err("not available outside the browser".to_owned())
    }
}
