//! Auth routes — access-code login, session management.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;
use uuid::Uuid;

use crate::services::session::{self, SessionError, SessionUser};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const SESSION_MAX_AGE_DAYS: i64 = 30;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = app_state
            .auth
            .validate_session(token)
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me` — current session user, 401 when unauthenticated.
pub async fn me(auth_user: AuthUser) -> Json<SessionUser> {
    Json(auth_user.user)
}

/// `POST /api/auth/logout` — drop the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        state.auth.delete_session(cookie.value());
    }
    let removal = Cookie::build((COOKIE_NAME, "")).path("/").build();
    (jar.remove(removal), StatusCode::OK).into_response()
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    email: String,
}

/// `POST /api/auth/email/request-code` — issue a 6-char login code.
///
/// Without a mail provider the code is only returned in the response, and
/// only when `AUTH_ECHO_CODES` is enabled.
pub async fn request_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    match state.auth.issue_code(&body.email) {
        Ok(code) => {
            tracing::info!(email = %body.email.trim().to_ascii_lowercase(), "login code issued");
            let echoed = state.config.echo_codes.then_some(code);
            Json(serde_json::json!({ "ok": true, "code": echoed })).into_response()
        }
        Err(SessionError::InvalidEmail) => (StatusCode::BAD_REQUEST, "invalid email").into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "code issue failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "code issue failed").into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    email: String,
    code: String,
}

/// `POST /api/auth/email/verify-code` — consume the code, mint a session,
/// set the session cookie.
pub async fn verify_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Response {
    let email = match state.auth.verify_code(&body.email, &body.code) {
        Ok(email) => email,
        Err(e @ (SessionError::InvalidEmail | SessionError::InvalidCode)) => {
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
        Err(SessionError::VerificationFailed) => {
            tracing::info!("code verification failed");
            return (StatusCode::UNAUTHORIZED, "expired or incorrect code").into_response();
        }
    };

    let user = SessionUser {
        id: Uuid::new_v4(),
        name: session::name_from_email(&email),
        is_admin: state.config.is_admin(&email),
        email,
        avatar_url: None,
    };
    tracing::info!(user_id = %user.id, "session created");
    let token = state.auth.create_session(user);

    let jar = jar.add(session_cookie(token, cookie_secure()));
    (jar, Json(serde_json::json!({ "ok": true }))).into_response()
}
