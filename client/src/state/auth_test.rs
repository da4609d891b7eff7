use super::*;

#[test]
fn default_state_is_restoring_with_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.restoring);
    assert!(!state.loading);
}

#[test]
fn is_admin_false_without_user() {
    assert!(!AuthState::default().is_admin());
}

#[test]
fn is_admin_follows_user_payload() {
    let mut state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            avatar_url: None,
            is_admin: true,
        }),
        loading: false,
        restoring: false,
    };
    assert!(state.is_admin());
    if let Some(user) = state.user.as_mut() {
        user.is_admin = false;
    }
    assert!(!state.is_admin());
}
