//! App shell: router, shared contexts, session restore.
//!
//! SYSTEM CONTEXT
//! ==============
//! All route components read `AuthState` and `UiState` through context
//! signals provided here, so there is exactly one owner for each and no
//! global lookup. Session restore is kicked off once on mount; pages only
//! ever observe its result.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{storage, theme};

/// localStorage key for the dashboard sidebar collapsed flag.
pub const SIDEBAR_COLLAPSED_KEY: &str = "brandkit_sidebar_collapsed";

/// Root component: provides contexts, restores the session, mounts routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark_mode = theme::read_preference();
    theme::apply(dark_mode);

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState {
        dark_mode,
        sidebar_collapsed: storage::load_or(SIDEBAR_COLLAPSED_KEY, false),
    });
    provide_context(auth);
    provide_context(ui);

    // Restore the cookie session exactly once. The auth state stays in its
    // restoring phase until the server has answered either way.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| {
            a.user = user;
            a.restoring = false;
        });
    });
    #[cfg(not(feature = "csr"))]
    auth.update(|a| a.restoring = false);

    view! {
        <Title text="Brandkit" />
        <Router>
            <Routes fallback=|| view! { <main class="not-found"><p>"Page not found."</p></main> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/dashboard") view=DashboardPage />
            </Routes>
        </Router>
    }
}
