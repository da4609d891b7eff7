//! Edge request policy: path classification and CORS header injection.
//!
//! DESIGN
//! ======
//! Every response leaving the edge gets a fixed set of permissive CORS
//! headers, with two carve-outs: built-asset paths bypass the policy
//! entirely, and the documentation area under `/dashboard/docs` passes
//! through untouched. Classification is a pure function over the request
//! path so the policy is testable without an HTTP runtime. The middleware
//! never short-circuits, rewrites, or rejects: every request is forwarded
//! and only response headers are touched.

#[cfg(test)]
#[path = "cors_test.rs"]
mod tests;

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// Path prefix of the documentation area, exempt from CORS injection.
const DOCS_PREFIX: &str = "/dashboard/docs";

const ALLOW_ORIGIN: HeaderValue = HeaderValue::from_static("*");
const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS");
const ALLOW_HEADERS: HeaderValue = HeaderValue::from_static("Content-Type, Authorization");

/// Policy class of an inbound request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestClass {
    /// Documentation content: passthrough, no header changes.
    Docs,
    /// Everything else, unknown paths included: gets CORS headers.
    Other,
}

/// Classify a request path. The docs match is a case-sensitive segment
/// prefix: `/dashboard/docs` and anything below it, but not
/// `/dashboard/docsx`.
#[must_use]
pub fn classify(path: &str) -> RequestClass {
    match path.strip_prefix(DOCS_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => RequestClass::Docs,
        _ => RequestClass::Other,
    }
}

/// Whether the policy applies to a path at all. API paths always match;
/// built-asset paths (client bundle, favicon) bypass the middleware.
#[must_use]
pub fn applies_to(path: &str) -> bool {
    if path.starts_with("/api/") {
        return true;
    }
    !(path.starts_with("/pkg/") || path.starts_with("/assets/") || path == "/favicon.ico")
}

/// Set the permissive CORS headers, overwriting any existing values.
pub fn set_cors_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN);
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS);
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS);
}

/// Axum middleware: forward the request, then stamp CORS headers on the
/// response unless the path is exempt or classified as documentation.
pub async fn apply(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;
    if applies_to(&path) && classify(&path) == RequestClass::Other {
        set_cors_headers(response.headers_mut());
    }
    response
}
