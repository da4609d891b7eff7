//! Brandkit browser client.
//!
//! ARCHITECTURE
//! ============
//! `app` wires the router and shared signal contexts; `pages` owns
//! route-level orchestration; `state` holds the shared signal payloads;
//! `net` talks to the server API; `util` keeps pure helpers testable on the
//! host target. Browser-only glue is feature-gated behind `csr` so the
//! crate compiles (and its logic tests run) without a wasm toolchain.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
