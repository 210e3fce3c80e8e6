//! Browser localStorage helpers for persisted client settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage access is browser-only. Off-browser builds (tests, tooling)
//! compile to no-ops so callers never branch on the target themselves.

use serde::de::DeserializeOwned;

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or(None))?;
        let raw = storage.get_item(key).unwrap_or(None)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("ignoring stored {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}
