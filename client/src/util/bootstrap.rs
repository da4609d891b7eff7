//! Session-gated navigation for the home route.
//!
//! DESIGN
//! ======
//! Landing on `/` must not bounce the user while the auth session is still
//! being restored, and must not flash between destinations when the auth
//! collaborator briefly toggles states during initial load. The machine
//! waits for auth to settle, then holds a fixed grace period before issuing
//! exactly one navigation.
//!
//! The machine is synchronous and owns no timer handle. `observe` and
//! `timer_fired` return commands for the host to execute; pending timers
//! are invalidated by a generation counter, so at most one armed timer is
//! ever current and a stale fire is a no-op. Teardown cancellation is the
//! host's job (it simply stops delivering `timer_fired`).

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::time::Duration;

use crate::state::auth::AuthState;

/// Grace period between auth settling and the navigation being issued.
pub const SETTLE_GRACE: Duration = Duration::from_millis(1500);

/// Destination for an authenticated session.
pub const AUTHED_ROUTE: &str = "/dashboard";

/// Destination when no session could be restored.
pub const LOGIN_ROUTE: &str = "/login";

/// Lifecycle phase of the bootstrap sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Auth is still loading or restoring; no timer armed.
    #[default]
    Waiting,
    /// Auth has settled; a grace timer is armed.
    Pending,
    /// Navigation has been issued. Terminal.
    Redirected,
}

/// Side effect the host must execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Schedule a one-shot timer for [`SETTLE_GRACE`], tagged with
    /// `generation`. Arming implicitly cancels any earlier timer: older
    /// generations are ignored when they fire.
    Arm { generation: u64 },
    /// Navigate to `target` exactly once.
    Navigate { target: &'static str },
}

/// True once both loading flags have cleared.
#[must_use]
pub fn is_settled(auth: &AuthState) -> bool {
    !auth.loading && !auth.restoring
}

/// Destination for the given auth state.
#[must_use]
pub fn landing_route(auth: &AuthState) -> &'static str {
    if auth.user.is_some() { AUTHED_ROUTE } else { LOGIN_ROUTE }
}

/// Grace-period navigation machine for the home route.
#[derive(Debug, Default)]
pub struct Bootstrap {
    phase: Phase,
    generation: u64,
}

impl Bootstrap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feed the latest observed auth state.
    ///
    /// Every observation invalidates a pending timer. If auth has settled,
    /// a fresh timer is armed; otherwise the machine drops back to waiting.
    /// After the navigation has been issued, observations are ignored.
    pub fn observe(&mut self, auth: &AuthState) -> Option<Command> {
        if self.phase == Phase::Redirected {
            return None;
        }
        self.generation += 1;
        if is_settled(auth) {
            self.phase = Phase::Pending;
            Some(Command::Arm { generation: self.generation })
        } else {
            self.phase = Phase::Waiting;
            None
        }
    }

    /// An armed timer fired. Stale generations (superseded by a later
    /// `observe`) and anything after the redirect are ignored, so the
    /// navigation command is produced at most once per machine.
    pub fn timer_fired(&mut self, generation: u64, auth: &AuthState) -> Option<Command> {
        if self.phase != Phase::Pending || generation != self.generation {
            return None;
        }
        self.phase = Phase::Redirected;
        Some(Command::Navigate { target: landing_route(auth) })
    }
}
