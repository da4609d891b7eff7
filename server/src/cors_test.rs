use super::*;

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[test]
fn docs_root_and_subpaths_classify_as_docs() {
    assert_eq!(classify("/dashboard/docs"), RequestClass::Docs);
    assert_eq!(classify("/dashboard/docs/"), RequestClass::Docs);
    assert_eq!(classify("/dashboard/docs/projects"), RequestClass::Docs);
    assert_eq!(classify("/dashboard/docs/guides/colors.html"), RequestClass::Docs);
}

#[test]
fn non_docs_paths_classify_as_other() {
    assert_eq!(classify("/api/users"), RequestClass::Other);
    assert_eq!(classify("/dashboard/settings"), RequestClass::Other);
    assert_eq!(classify("/"), RequestClass::Other);
}

#[test]
fn docs_match_is_segment_exact() {
    assert_eq!(classify("/dashboard/docsx"), RequestClass::Other);
    assert_eq!(classify("/dashboard/docs-old/page"), RequestClass::Other);
}

#[test]
fn docs_match_is_case_sensitive() {
    assert_eq!(classify("/Dashboard/Docs"), RequestClass::Other);
    assert_eq!(classify("/dashboard/DOCS/page"), RequestClass::Other);
}

// =============================================================================
// APPLICABILITY FILTER
// =============================================================================

#[test]
fn api_paths_always_match() {
    assert!(applies_to("/api/auth/me"));
    assert!(applies_to("/api/users"));
}

#[test]
fn asset_paths_bypass_the_policy() {
    assert!(!applies_to("/pkg/client.js"));
    assert!(!applies_to("/pkg/client_bg.wasm"));
    assert!(!applies_to("/assets/logo.svg"));
    assert!(!applies_to("/favicon.ico"));
}

#[test]
fn page_paths_match() {
    assert!(applies_to("/"));
    assert!(applies_to("/login"));
    assert!(applies_to("/dashboard"));
    assert!(applies_to("/dashboard/docs"));
}

// =============================================================================
// HEADER INJECTION
// =============================================================================

#[test]
fn cors_headers_use_exact_literal_values() {
    let mut headers = HeaderMap::new();
    set_cors_headers(&mut headers);
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "Content-Type, Authorization"
    );
}

#[test]
fn cors_headers_overwrite_without_duplicating() {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("https://example.com"));
    set_cors_headers(&mut headers);
    assert_eq!(headers.get_all(ACCESS_CONTROL_ALLOW_ORIGIN).iter().count(), 1);
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert_eq!(headers.len(), 3);
}
