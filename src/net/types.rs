//! Shared wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Records stay schema-less (`serde_json::Map` with preserved key order) so
//! the backend can evolve node/edge fields without client changes. Events are
//! a closed enum so every call site names the payload it sends.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node or edge entity: field name → dynamically-typed value.
pub type Record = Map<String, Value>;

/// Every record of one kind currently known, keyed by record id, in the
/// order the backend listed them.
pub type Collection = IndexMap<String, Record>;

/// Full graph state as returned by the backend after any event.
///
/// Either slice may be absent; an absent slice means "not reported", which is
/// distinct from an empty map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub node: Option<Collection>,
    #[serde(default)]
    pub edge: Option<Collection>,
}

impl GraphSnapshot {
    /// Response substituted when no backend bridge is reachable.
    pub fn empty_default() -> Value {
        serde_json::json!({ "node": {} })
    }
}

/// Which collections an event's response is authoritative for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slices {
    pub nodes: bool,
    pub edges: bool,
}

/// Named events understood by the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphEvent {
    /// Initial load; payload `{}`.
    AppStarted,
    /// Create a node from form fields; payload is the field map (e.g. `{slug}`).
    NodeCreated { fields: Record },
    /// Update node `id`; payload is `{id, ..fields}`.
    NodeUpdated { id: String, fields: Record },
    /// Delete node `id`; payload `{id}`.
    NodeDeleted { id: String },
    /// Link `source` → `target`; payload `{source, target}`.
    EdgeCreated { source: String, target: String },
}

impl GraphEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AppStarted => "app_started",
            Self::NodeCreated { .. } => "node_created",
            Self::NodeUpdated { .. } => "node_updated",
            Self::NodeDeleted { .. } => "node_deleted",
            Self::EdgeCreated { .. } => "edge_created",
        }
    }

    /// JSON payload object for the event.
    pub fn payload(&self) -> Value {
        match self {
            Self::AppStarted => Value::Object(Map::new()),
            Self::NodeCreated { fields } => Value::Object(fields.clone()),
            Self::NodeUpdated { id, fields } => {
                let mut payload = Map::new();
                payload.insert("id".to_owned(), Value::String(id.clone()));
                for (key, value) in fields {
                    if key != "id" {
                        payload.insert(key.clone(), value.clone());
                    }
                }
                Value::Object(payload)
            }
            Self::NodeDeleted { id } => serde_json::json!({ "id": id }),
            Self::EdgeCreated { source, target } => serde_json::json!({
                "source": source,
                "target": target,
            }),
        }
    }

    /// Collections this event's response replaces.
    pub fn slices(&self) -> Slices {
        match self {
            Self::AppStarted => Slices { nodes: true, edges: true },
            Self::NodeCreated { .. } | Self::NodeUpdated { .. } | Self::NodeDeleted { .. } => {
                Slices { nodes: true, edges: false }
            }
            Self::EdgeCreated { .. } => Slices { nodes: false, edges: true },
        }
    }
}

/// Read a record's id, accepting string or numeric ids.
pub fn record_id(record: &Record) -> Option<String> {
    record_ref(record, "id")
}

/// Read a field holding a record id (`id`, or `source`/`target` on edges).
pub fn record_ref(record: &Record, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
