//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth state so chrome
//! controls can evolve independently of session data. `dark_mode` mirrors
//! the persisted theme preference (`util::theme` owns persistence); the
//! sidebar flag is persisted by the dashboard through `util::storage`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the dashboard chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}
