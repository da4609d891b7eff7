//! Home route: session-gated entry splash.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing on `/` shows a splash while the session restore settles, then
//! routes to the workspace or the login screen. The decision logic lives in
//! `util::bootstrap`; this component only executes its commands: arming
//! grace timers with `gloo_timers` and issuing the one navigation call.
//! Unmounting stops command delivery, so a pending timer can never
//! navigate after teardown.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::bootstrap;

/// Home page — splash plus the settle-then-redirect sequence.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "csr")]
    {
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::util::bootstrap::{Bootstrap, Command};

        let navigate = use_navigate();
        let machine = Rc::new(RefCell::new(Bootstrap::new()));
        let alive = Rc::new(Cell::new(true));
        {
            let alive = alive.clone();
            on_cleanup(move || alive.set(false));
        }

        Effect::new(move || {
            let state = auth.get();
            let Some(Command::Arm { generation }) = machine.borrow_mut().observe(&state) else {
                return;
            };
            let machine = machine.clone();
            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(bootstrap::SETTLE_GRACE).await;
                if !alive.get() {
                    return;
                }
                // Decide from the state current at fire time; a superseded
                // generation is ignored inside the machine.
                let state = auth.get_untracked();
                let fired = machine.borrow_mut().timer_fired(generation, &state);
                if let Some(Command::Navigate { target }) = fired {
                    navigate(target, NavigateOptions::default());
                }
            });
        });
    }

    view! {
        <main class="home-page">
            <div class="home-page__splash">
                <h1 class="home-page__wordmark">"Brandkit"</h1>
                <p class="home-page__status">
                    {move || {
                        if bootstrap::is_settled(&auth.get()) {
                            "Taking you to your workspace..."
                        } else {
                            "Restoring your session..."
                        }
                    }}
                </p>
            </div>
        </main>
    }
}
