#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::net::dispatch::DispatchError;
use crate::net::types::{Collection, GraphSnapshot, Record, Slices, record_ref};
use crate::util::record_view::display_value;
use crate::util::schema::{FieldDescriptor, FieldKind, FormSchema, SchemaError, SelectOption};

/// Form field holding link targets; also the synthetic detail key.
pub const LINKS_FIELD: &str = "next";

/// Where the collections are in their request/response cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    #[default]
    Idle,
    Dispatched,
    Reconciled,
}

/// Graph screen state: cached collections, drawer, and active record.
///
/// Collections are only ever replaced from a backend snapshot, never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphState {
    pub nodes: Collection,
    pub edges: Collection,
    /// Record targeted by the open drawer; `None` means create mode.
    pub active: Option<String>,
    pub drawer_open: bool,
    /// Dispatches issued but not yet settled.
    pub in_flight: usize,
    /// Number of successful reconciliations.
    pub revision: u64,
    /// Most recent dispatch failure, kept for diagnostics only.
    pub last_error: Option<String>,
}

impl GraphState {
    pub fn phase(&self) -> SyncPhase {
        if self.in_flight > 0 {
            SyncPhase::Dispatched
        } else if self.revision > 0 {
            SyncPhase::Reconciled
        } else {
            SyncPhase::Idle
        }
    }

    pub fn open_create(&mut self) {
        self.active = None;
        self.drawer_open = true;
    }

    pub fn open_edit(&mut self, id: &str) {
        self.active = Some(id.to_owned());
        self.drawer_open = true;
    }

    /// Close the drawer and clear the active record. Safe to repeat.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
        self.active = None;
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        if open {
            self.drawer_open = true;
        } else {
            self.close_drawer();
        }
    }

    /// Close the drawer after a submit, unless the user has since moved it
    /// to a different record.
    pub fn settle_drawer(&mut self, submitted_for: Option<&str>) {
        if self.active.as_deref() == submitted_for {
            self.close_drawer();
        }
    }

    pub fn begin_dispatch(&mut self) {
        self.in_flight += 1;
    }

    /// Replace the collections `slices` owns with those in `snapshot`.
    ///
    /// Returns `false` when the snapshot did not carry any owned slice; the
    /// collections are then left as they were.
    pub fn reconcile(&mut self, slices: Slices, snapshot: GraphSnapshot) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        let mut replaced = false;
        if slices.nodes {
            if let Some(nodes) = snapshot.node {
                self.nodes = nodes;
                replaced = true;
            }
        }
        if slices.edges {
            if let Some(edges) = snapshot.edge {
                self.edges = edges;
                replaced = true;
            }
        }
        if replaced {
            self.revision += 1;
            self.last_error = None;
        }
        replaced
    }

    /// Settle a failed dispatch; collections stay untouched.
    pub fn fail_dispatch(&mut self, event: &str, error: &DispatchError) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_error = Some(format!("{event}: {error}"));
    }

    pub fn active_record(&self) -> Option<&Record> {
        self.active.as_deref().and_then(|id| self.nodes.get(id))
    }

    /// Display label of node `id`, falling back to the id itself.
    pub fn node_label(&self, id: &str, label_key: &str) -> Option<String> {
        let node = self.nodes.get(id)?;
        let label = node.get(label_key).map(display_value).unwrap_or_default();
        Some(if label.is_empty() { id.to_owned() } else { label })
    }

    /// Target ids of edges leaving `id`, in edge-collection order.
    pub fn targets_of(&self, id: &str) -> Vec<String> {
        self.edges
            .values()
            .filter(|edge| record_ref(edge, "source").as_deref() == Some(id))
            .filter_map(|edge| record_ref(edge, "target"))
            .collect()
    }

    /// Node `id` plus a synthetic `next` list of its targets' labels.
    ///
    /// Targets missing from the node collection show the configured
    /// placeholder instead of failing.
    pub fn detail_record(&self, id: &str, config: &ClientConfig) -> Option<Record> {
        let mut record = self.nodes.get(id)?.clone();
        let next = self
            .targets_of(id)
            .into_iter()
            .map(|target| {
                self.node_label(&target, &config.label_key)
                    .unwrap_or_else(|| config.missing_target_label.clone())
            })
            .map(Value::String)
            .collect();
        record.insert(LINKS_FIELD.to_owned(), Value::Array(next));
        Some(record)
    }

    /// Node rows in collection order.
    pub fn node_rows(&self) -> Vec<(String, Record)> {
        self.nodes.iter().map(|(id, record)| (id.clone(), record.clone())).collect()
    }

    /// Form schema for the drawer: create mode when no record is active,
    /// otherwise pre-filled from the active record.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateField` when the configured label key collides with
    /// a reserved field.
    pub fn node_schema(&self, config: &ClientConfig) -> Result<FormSchema, SchemaError> {
        let label_key = config.label_key.as_str();
        let active = self
            .active
            .as_deref()
            .and_then(|id| self.nodes.get(id).map(|record| (id, record)));

        let mut label_field = FieldDescriptor::text(label_key);
        if let Some(value) = active.and_then(|(_, record)| record.get(label_key)) {
            label_field = label_field.with_default(value.clone());
        }

        let (title, submit) = if active.is_some() { ("Edit node", "Save") } else { ("New node", "Create") };
        let mut schema = FormSchema::new()
            .with_title(title)
            .with_submit_text(submit)
            .field(label_field)?;

        if let Some((id, record)) = active {
            schema = schema.field(FieldDescriptor::text("id").with_default(id).hidden())?;
            for (key, value) in record {
                if key == "id" || key == label_key || key == LINKS_FIELD {
                    continue;
                }
                let kind = match value {
                    Value::Number(n) => FieldKind::Number { integer: n.is_i64() || n.is_u64() },
                    Value::String(_) => FieldKind::Text,
                    _ => continue,
                };
                schema = schema.field(FieldDescriptor::new(key.clone(), kind).with_default(value.clone()))?;
            }
        }

        let options = self
            .nodes
            .keys()
            .filter(|id| Some(id.as_str()) != active.map(|(active_id, _)| active_id))
            .map(|id| {
                let label = self.node_label(id, label_key).unwrap_or_else(|| id.clone());
                SelectOption::new(label, id.clone())
            })
            .collect();
        schema.field(FieldDescriptor::new(LINKS_FIELD, FieldKind::SearchMultiple { options }).with_title("Links"))
    }
}

/// Single-writer access to `GraphState` from async dispatch flows.
pub trait GraphStore: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&GraphState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut GraphState));
}

impl GraphStore for RwSignal<GraphState> {
    fn read<R>(&self, f: impl FnOnce(&GraphState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut GraphState)) {
        self.update(f);
    }
}

/// Headless store for driving the protocol outside a reactive runtime.
impl GraphStore for Rc<RefCell<GraphState>> {
    fn read<R>(&self, f: impl FnOnce(&GraphState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut GraphState)) {
        f(&mut self.borrow_mut());
    }
}
