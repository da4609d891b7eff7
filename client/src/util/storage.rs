//! Browser localStorage helpers for persisted UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize read/write behavior so pages can persist small
//! JSON values without repeating web-sys glue. Storage failures (quota,
//! privacy mode, corrupt payloads) are logged and swallowed: reads fall
//! back to the caller's default, writes no-op. Callers never see an error.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON value from `localStorage` for `key`, or `fallback` when the
/// key is absent or unreadable.
pub fn load_or<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return fallback;
        };
        let raw = match storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(_) => {
                log::warn!("localStorage read failed for {key}");
                return fallback;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("stored value for {key} is not valid JSON: {e}");
                fallback
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        fallback
    }
}

/// Save a JSON value to `localStorage` for `key`. Best-effort.
pub fn save<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not serialize value for {key}: {e}");
                return;
            }
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
