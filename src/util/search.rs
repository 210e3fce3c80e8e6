//! Searchable selector model: live query filtering plus blur grace handling.
//!
//! Losing focus does not close the candidate list immediately. The control
//! schedules a close after a short grace delay and only the most recent
//! schedule may fire, so a click on a candidate lands before the list
//! disappears and a quick re-focus cancels the pending close.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use serde_json::Value;

use crate::util::schema::SelectOption;

/// Token identifying one scheduled blur close.
pub type BlurToken = u64;

/// Query/focus state for one selector control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    focused: bool,
    blur_seq: BlurToken,
}

impl SearchState {
    /// Seed the query from the option whose value matches `current`.
    pub fn seeded(options: &[SelectOption], current: &Value) -> Self {
        Self { query: label_for(options, current), ..Self::default() }
    }

    /// Follow a value changed from outside the control (a form reset, or a
    /// multi-value append): show the matching option's label, or clear the
    /// query when no option matches.
    pub fn sync_to(&mut self, options: &[SelectOption], current: &Value) {
        self.query = label_for(options, current);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Focus the control and cancel any pending blur close.
    pub fn focus(&mut self) {
        self.focused = true;
        self.blur_seq += 1;
    }

    /// Schedule a close; pass the returned token to [`SearchState::blur_elapsed`]
    /// once the grace delay has run.
    pub fn blur(&mut self) -> BlurToken {
        self.blur_seq += 1;
        self.blur_seq
    }

    /// Apply a scheduled close unless it was superseded.
    pub fn blur_elapsed(&mut self, token: BlurToken) {
        if token == self.blur_seq {
            self.focused = false;
        }
    }

    /// The candidate list shows only while focused with a non-empty query.
    pub fn is_open(&self) -> bool {
        self.focused && !self.query.is_empty()
    }

    /// Options whose label contains the query (case-insensitive), in source order.
    pub fn candidates<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        if !self.is_open() {
            return Vec::new();
        }
        let needle = self.query.to_lowercase();
        options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve a candidate: the query shows its label and focus is dropped.
    pub fn select(&mut self, option: &SelectOption) -> Value {
        self.query.clone_from(&option.label);
        self.focused = false;
        self.blur_seq += 1;
        option.value.clone()
    }
}

/// Labels for the values held by a multi-value field, in selection order.
///
/// Values with no matching option are shown as their raw text.
pub fn selected_labels(options: &[SelectOption], current: &Value) -> Vec<String> {
    let Value::Array(values) = current else {
        return Vec::new();
    };
    values
        .iter()
        .map(|v| {
            options
                .iter()
                .find(|o| &o.value == v)
                .map_or_else(|| crate::util::record_view::display_value(v), |o| o.label.clone())
        })
        .collect()
}

fn label_for(options: &[SelectOption], current: &Value) -> String {
    options
        .iter()
        .find(|o| &o.value == current)
        .map(|o| o.label.clone())
        .unwrap_or_default()
}
