//! Login page: email + access-code sign in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::state::auth::AuthState;

#[cfg(any(test, feature = "csr"))]
fn normalized_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_ascii_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return None;
    }
    Some(email)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(email_value) = normalized_email(&email.get()) else {
                info.set("Enter a valid email first.".to_owned());
                return;
            };
            busy.set(true);
            info.set("Requesting code...".to_owned());
            echoed_code.set(None);

            leptos::task::spawn_local(async move {
                match crate::net::api::request_login_code(&email_value).await {
                    Ok(code_opt) => {
                        echoed_code.set(code_opt);
                        info.set("Code sent. Check your email or use the echoed code below.".to_owned());
                    }
                    Err(e) => info.set(format!("Code request failed: {e}")),
                }
                busy.set(false);
            });
        }
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(email_value) = normalized_email(&email.get()) else {
                info.set("Enter a valid email first.".to_owned());
                return;
            };
            let code_value = code.get().trim().to_owned();
            if code_value.is_empty() {
                info.set("Enter both email and 6-char code.".to_owned());
                return;
            }
            busy.set(true);
            info.set("Verifying code...".to_owned());
            auth.update(|a| a.loading = true);

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_login_code(&email_value, &code_value).await {
                    Ok(()) => {
                        let user = crate::net::api::fetch_current_user().await;
                        auth.update(|a| {
                            a.user = user;
                            a.loading = false;
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        auth.update(|a| a.loading = false);
                        info.set(format!("Verification failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <main class="login-page">
            <div class="login-card">
                <h1>"Brandkit"</h1>
                <p class="login-card__subtitle">"Email Access Code"</p>
                <form class="login-form" on:submit=on_request_code>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send 6-char Code"
                    </button>
                </form>
                <form class="login-form" on:submit=on_verify_code>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="ABC234"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev).to_ascii_uppercase())
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In With Code"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_code.get().is_some()>
                    <p class="login-message login-message--code">
                        "Code: "
                        <span>{move || echoed_code.get().unwrap_or_default()}</span>
                    </p>
                </Show>
            </div>
        </main>
    }
}
