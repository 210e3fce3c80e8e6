//! Record presentation helpers for list rows and the detail view.
//!
//! ARCHITECTURE
//! ============
//! Records stay plain data. Row behavior (press + named actions) travels next
//! to the records as a [`RowActions`] capability keyed by record id, so data
//! never holds UI callbacks.

#[cfg(test)]
#[path = "record_view_test.rs"]
mod record_view_test;

use std::sync::Arc;

use serde_json::Value;

use crate::net::types::Record;

/// Handler invoked with the id of the row it was triggered from.
pub type RowHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// What was clicked inside a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowClick<'a> {
    /// The row's own pressable area.
    Row,
    /// A named action button nested in the row.
    Action(&'a str),
}

/// Per-row behavior supplied by the list's owner.
#[derive(Clone, Default)]
pub struct RowActions {
    on_press: Option<RowHandler>,
    actions: Vec<(String, RowHandler)>,
}

impl std::fmt::Debug for RowActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowActions")
            .field("on_press", &self.on_press.is_some())
            .field("actions", &self.labels().collect::<Vec<_>>())
            .finish()
    }
}

impl RowActions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_press(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_press = Some(Arc::new(handler));
        self
    }

    /// Add a labeled action; a repeated label replaces the earlier handler.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        let label = label.into();
        let handler: RowHandler = Arc::new(handler);
        if let Some(slot) = self.actions.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = handler;
        } else {
            self.actions.push((label, handler));
        }
        self
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|(l, _)| l.as_str())
    }

    /// Route a click on row `id`.
    ///
    /// An action click runs only that action; the row's press handler is not
    /// reached, mirroring a stopped event. A row click without a press
    /// handler is a no-op.
    pub fn handle(&self, id: &str, click: RowClick<'_>) {
        match click {
            RowClick::Row => {
                if let Some(handler) = &self.on_press {
                    handler(id);
                }
            }
            RowClick::Action(label) => {
                if let Some((_, handler)) = self.actions.iter().find(|(l, _)| l == label) {
                    handler(id);
                }
            }
        }
    }

    /// Bind these actions to row `id` for a row renderer.
    pub fn bind(&self, id: impl Into<String>) -> BoundRow {
        BoundRow { id: id.into(), actions: self.clone() }
    }
}

/// Row actions bound to one record id.
#[derive(Clone, Debug)]
pub struct BoundRow {
    id: String,
    actions: RowActions,
}

impl BoundRow {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.actions.labels()
    }

    pub fn press(&self) {
        self.actions.handle(&self.id, RowClick::Row);
    }

    /// Run the action named `label`; the row press is not triggered.
    pub fn run(&self, label: &str) {
        self.actions.handle(&self.id, RowClick::Action(label));
    }
}

/// String coercion used for labels and detail lines.
///
/// Strings render bare, `null` renders empty, arrays join their elements with
/// `,`, and objects render as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Text shown for a row: `record[target_key]` when a key is given.
pub fn row_label(record: &Record, target_key: Option<&str>) -> Option<String> {
    target_key.and_then(|k| record.get(k)).map(display_value)
}

/// One `"key: value"` line per field, in the record's own key order.
pub fn detail_lines(record: &Record) -> Vec<String> {
    record
        .iter()
        .map(|(key, value)| format!("{key}: {}", display_value(value)))
        .collect()
}
