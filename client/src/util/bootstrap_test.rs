use super::*;
use crate::net::types::User;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar_url: None,
        is_admin: false,
    }
}

fn settled(user_present: bool) -> AuthState {
    AuthState {
        user: user_present.then(|| user("u1")),
        loading: false,
        restoring: false,
    }
}

fn unsettled() -> AuthState {
    AuthState { user: None, loading: false, restoring: true }
}

#[test]
fn starts_waiting() {
    let machine = Bootstrap::new();
    assert_eq!(machine.phase(), Phase::Waiting);
}

#[test]
fn no_timer_while_loading_or_restoring() {
    let mut machine = Bootstrap::new();
    assert_eq!(machine.observe(&AuthState { user: None, loading: true, restoring: true }), None);
    assert_eq!(machine.observe(&AuthState { user: None, loading: true, restoring: false }), None);
    assert_eq!(machine.observe(&AuthState { user: None, loading: false, restoring: true }), None);
    assert_eq!(machine.phase(), Phase::Waiting);
}

#[test]
fn settling_arms_a_timer() {
    let mut machine = Bootstrap::new();
    let command = machine.observe(&settled(true));
    assert!(matches!(command, Some(Command::Arm { .. })));
    assert_eq!(machine.phase(), Phase::Pending);
}

#[test]
fn fire_navigates_to_dashboard_when_user_present() {
    let mut machine = Bootstrap::new();
    let Some(Command::Arm { generation }) = machine.observe(&settled(true)) else {
        panic!("expected arm");
    };
    assert_eq!(
        machine.timer_fired(generation, &settled(true)),
        Some(Command::Navigate { target: AUTHED_ROUTE })
    );
    assert_eq!(machine.phase(), Phase::Redirected);
}

#[test]
fn fire_navigates_to_login_when_no_user() {
    let mut machine = Bootstrap::new();
    let Some(Command::Arm { generation }) = machine.observe(&settled(false)) else {
        panic!("expected arm");
    };
    assert_eq!(
        machine.timer_fired(generation, &settled(false)),
        Some(Command::Navigate { target: LOGIN_ROUTE })
    );
}

#[test]
fn rearm_invalidates_previous_timer() {
    let mut machine = Bootstrap::new();
    let Some(Command::Arm { generation: first }) = machine.observe(&settled(false)) else {
        panic!("expected arm");
    };
    // User arrives within the grace window: the old timer must not fire.
    let Some(Command::Arm { generation: second }) = machine.observe(&settled(true)) else {
        panic!("expected re-arm");
    };
    assert_ne!(first, second);
    assert_eq!(machine.timer_fired(first, &settled(true)), None);
    assert_eq!(machine.phase(), Phase::Pending);
    // Only the latest timer navigates, and it sees the latest state.
    assert_eq!(
        machine.timer_fired(second, &settled(true)),
        Some(Command::Navigate { target: AUTHED_ROUTE })
    );
}

#[test]
fn unsettling_cancels_pending_timer() {
    let mut machine = Bootstrap::new();
    let Some(Command::Arm { generation }) = machine.observe(&settled(false)) else {
        panic!("expected arm");
    };
    assert_eq!(machine.observe(&unsettled()), None);
    assert_eq!(machine.phase(), Phase::Waiting);
    assert_eq!(machine.timer_fired(generation, &settled(false)), None);
}

#[test]
fn navigation_is_one_shot() {
    let mut machine = Bootstrap::new();
    let Some(Command::Arm { generation }) = machine.observe(&settled(true)) else {
        panic!("expected arm");
    };
    assert!(machine.timer_fired(generation, &settled(true)).is_some());
    // Late duplicate fire and further observations are ignored.
    assert_eq!(machine.timer_fired(generation, &settled(true)), None);
    assert_eq!(machine.observe(&settled(false)), None);
    assert_eq!(machine.phase(), Phase::Redirected);
}

#[test]
fn fire_reflects_state_at_fire_time() {
    // The host reads the auth signal when the timer fires; a session that
    // appeared without triggering an observation still wins.
    let mut machine = Bootstrap::new();
    let Some(Command::Arm { generation }) = machine.observe(&settled(false)) else {
        panic!("expected arm");
    };
    assert_eq!(
        machine.timer_fired(generation, &settled(true)),
        Some(Command::Navigate { target: AUTHED_ROUTE })
    );
}

#[test]
fn landing_route_follows_user_presence() {
    assert_eq!(landing_route(&settled(true)), AUTHED_ROUTE);
    assert_eq!(landing_route(&settled(false)), LOGIN_ROUTE);
}

#[test]
fn grace_period_is_fixed() {
    assert_eq!(SETTLE_GRACE, Duration::from_millis(1500));
}
