//! Dashboard page: authenticated landing for the workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated destination of the home-route bootstrap. It
//! guards against unauthenticated access, renders the workspace chrome
//! (identity, theme toggle, collapsible sidebar), and links into the
//! documentation area served by the edge under `/dashboard/docs`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SIDEBAR_COLLAPSED_KEY;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{auth as auth_util, storage, theme};

/// Dashboard page — workspace chrome and entry points.
/// Redirects to `/login` once auth settles without a user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    auth_util::install_unauth_redirect(auth, navigate.clone());

    let self_identity = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.is_admin))
            .unwrap_or_else(|| ("me".to_owned(), false))
    };

    let on_toggle_sidebar = move |_| {
        ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);
        storage::save(SIDEBAR_COLLAPSED_KEY, &ui.get_untracked().sidebar_collapsed);
    };

    let on_toggle_dark = move |_| {
        let current = ui.get().dark_mode;
        let next = theme::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            auth.update(|a| a.loading = true);
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| {
                    a.user = None;
                    a.loading = false;
                });
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
    };

    view! {
        <Show
            when=move || {
                let state = auth.get();
                !state.loading && !state.restoring && state.user.is_some()
            }
            fallback=move || {
                view! {
                    <main class="dashboard-page">
                        <p>{move || {
                            let state = auth.get();
                            if state.loading || state.restoring { "Loading..." } else { "Redirecting to login..." }
                        }}</p>
                    </main>
                }
            }
        >
            <main class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <button
                        class="btn toolbar__sidebar-toggle"
                        on:click=on_toggle_sidebar
                        title="Toggle sidebar"
                    >
                        {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                    </button>
                    <span class="toolbar__wordmark">"Brandkit"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>

                    <span class="toolbar__spacer"></span>

                    <button class="btn toolbar__dark-toggle" on:click=on_toggle_dark title="Toggle dark mode">
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>

                    <span class="toolbar__self">
                        {move || self_identity().0}
                        <Show when=move || self_identity().1>
                            <span class="toolbar__self-role">" (admin)"</span>
                        </Show>
                    </span>

                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <div class="dashboard-page__body">
                    <Show when=move || !ui.get().sidebar_collapsed>
                        <nav class="dashboard-page__sidebar">
                            <a class="sidebar__link sidebar__link--active" href="/dashboard">"Overview"</a>
                            <a class="sidebar__link" href="/dashboard/docs">"Documentation"</a>
                        </nav>
                    </Show>

                    <section class="dashboard-page__content">
                        <h2>{move || format!("Welcome back, {}", self_identity().0)}</h2>
                        <p>
                            "Your brand workspace is ready. New here? Start with the "
                            <a href="/dashboard/docs">"documentation"</a>
                            "."
                        </p>
                    </section>
                </div>
            </main>
        </Show>
    }
}
