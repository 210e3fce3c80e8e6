//! Client tunables with persisted overrides.
//!
//! Defaults cover the Tauri host. A JSON object stored under
//! [`STORAGE_KEY`] may override individual entries; entries that are missing
//! or of the wrong type keep their default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STORAGE_KEY: &str = "hermenia_client_config";
pub const DEFAULT_COMMAND: &str = "dispatch";
pub const DEFAULT_BLUR_GRACE_MS: u32 = 150;
pub const DEFAULT_LABEL_KEY: &str = "slug";
pub const DEFAULT_MISSING_TARGET_LABEL: &str = "(missing)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host command that receives `{event, payload}`.
    pub command: String,
    /// Delay before a blurred selector closes its candidate list.
    pub blur_grace_ms: u32,
    /// Record field shown as the row label and offered in selectors.
    pub label_key: String,
    /// Shown in place of an edge target absent from the node collection.
    pub missing_target_label: String,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_owned(),
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            label_key: DEFAULT_LABEL_KEY.to_owned(),
            missing_target_label: DEFAULT_MISSING_TARGET_LABEL.to_owned(),
            verbose: true,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with whatever is persisted in browser storage.
    pub fn load() -> Self {
        crate::util::storage::load_json::<Value>(STORAGE_KEY)
            .map(|raw| Self::from_overrides(&raw))
            .unwrap_or_default()
    }

    /// Defaults overlaid with the well-typed entries of `raw`.
    pub fn from_overrides(raw: &Value) -> Self {
        let mut config = Self::default();
        let Some(obj) = raw.as_object() else {
            return config;
        };

        if let Some(command) = non_empty_str(obj.get("command")) {
            config.command = command;
        }
        if let Some(ms) = obj
            .get("blur_grace_ms")
            .and_then(Value::as_u64)
            .and_then(|ms| u32::try_from(ms).ok())
        {
            config.blur_grace_ms = ms;
        }
        if let Some(key) = non_empty_str(obj.get("label_key")) {
            config.label_key = key;
        }
        if let Some(label) = non_empty_str(obj.get("missing_target_label")) {
            config.missing_target_label = label;
        }
        if let Some(verbose) = obj.get("verbose").and_then(Value::as_bool) {
            config.verbose = verbose;
        }
        config
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}
