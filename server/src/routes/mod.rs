//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the auth API, the static documentation area, and
//! the built client bundle under a single Axum router, then layers the
//! edge request policy and HTTP tracing over the whole thing. The client
//! app is served as static files; the documentation lives under
//! `/dashboard/docs` so the browser app can link straight into it.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cors;
use crate::state::AppState;

/// Auth + health endpoints consumed by the browser client.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/email/request-code", post(auth::request_code))
        .route("/api/auth/email/verify-code", post(auth::verify_code))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Resolve the path to the static documentation directory.
fn docs_dir() -> PathBuf {
    std::env::var("DOCS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../docs"))
}

/// Resolve the path to the built client bundle directory.
fn client_dist_dir() -> PathBuf {
    std::env::var("CLIENT_DIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application router: API + docs + client bundle, wrapped in the
/// request policy and trace layers.
pub fn app(state: AppState) -> Router {
    let docs_service = ServeDir::new(docs_dir()).append_index_html_on_directories(true);
    let client_service = ServeDir::new(client_dist_dir()).append_index_html_on_directories(true);

    api_routes(state)
        .nest_service("/dashboard/docs", docs_service)
        .fallback_service(client_service)
        .layer(axum::middleware::from_fn(cors::apply))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
