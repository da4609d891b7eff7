//! Shared signal payloads provided through context by the app shell.

pub mod auth;
pub mod ui;
