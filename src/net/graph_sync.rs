//! Graph synchronization protocol between screen state and the backend.
//!
//! Each operation dispatches one or more events and reconciles the
//! collection slice each response owns. Responses replace collections
//! wholesale; nothing is patched optimistically.
//!
//! CONCURRENCY
//! ===========
//! A multi-target submit fires the node dispatch and every edge dispatch
//! together. They settle in any order and each reconciles only its own
//! slice, so callers must not assume edges land after the node.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and recorded on the state; collections stay as they
//! were and nothing is retried.

#[cfg(test)]
#[path = "graph_sync_test.rs"]
mod graph_sync_test;

use std::collections::BTreeSet;

use futures::future::join_all;
use serde_json::Value;

use crate::net::dispatch::DispatchClient;
use crate::net::types::{Collection, GraphEvent, Record};
use crate::state::graph::{GraphState, GraphStore, LINKS_FIELD};

/// Drives graph events for one store.
#[derive(Clone, Debug)]
pub struct GraphSync<S> {
    client: DispatchClient,
    store: S,
}

impl<S: GraphStore> GraphSync<S> {
    pub fn new(client: DispatchClient, store: S) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the initial snapshot.
    pub async fn start(&self) -> bool {
        self.run(GraphEvent::AppStarted).await
    }

    /// Submit drawer form values for the active record (or a new node).
    ///
    /// Link targets in `values[LINKS_FIELD]` become one `edge_created` per
    /// target. In edit mode they run alongside the node update; in create
    /// mode they wait for the new node's id.
    pub async fn submit(&self, values: Record) {
        let active = self.store.read(|s| s.active.clone());
        let (fields, targets) = split_links(values);

        if let Some(id) = active {
            let node = async {
                self.run(GraphEvent::NodeUpdated { id: id.clone(), fields }).await;
                self.store.write(|s| s.settle_drawer(Some(&id)));
            };
            futures::join!(node, self.link(&id, &targets));
            return;
        }

        let before = self.store.read(|s| s.nodes.keys().cloned().collect::<BTreeSet<_>>());
        let created = self.run(GraphEvent::NodeCreated { fields }).await;
        self.store.write(|s| s.settle_drawer(None));

        if !created || targets.is_empty() {
            return;
        }
        match self.store.read(|s| created_id(&before, &s.nodes)) {
            Some(source) => {
                self.link(&source, &targets).await;
            }
            None => leptos::logging::warn!("skipping {} link(s): new node id is ambiguous", targets.len()),
        }
    }

    /// Delete node `id`; closes the drawer if it was editing that node.
    pub async fn delete(&self, id: String) -> bool {
        let deleted = self.run(GraphEvent::NodeDeleted { id: id.clone() }).await;
        if deleted {
            self.store.write(|s| {
                if s.active.as_deref() == Some(id.as_str()) {
                    s.close_drawer();
                }
            });
        }
        deleted
    }

    /// Create one edge per target, concurrently. Returns how many succeeded.
    pub async fn link(&self, source: &str, targets: &[String]) -> usize {
        let dispatches = targets.iter().map(|target| {
            self.run(GraphEvent::EdgeCreated { source: source.to_owned(), target: target.clone() })
        });
        join_all(dispatches).await.into_iter().filter(|ok| *ok).count()
    }

    async fn run(&self, event: GraphEvent) -> bool {
        let name = event.name();
        let slices = event.slices();
        self.store.write(GraphState::begin_dispatch);

        match self.client.send(&event).await {
            Ok(snapshot) => {
                let mut replaced = false;
                self.store.write(|s| replaced = s.reconcile(slices, snapshot));
                if !replaced {
                    leptos::logging::warn!("{name} response carried no collection to reconcile");
                }
                true
            }
            Err(e) => {
                leptos::logging::warn!("{name} dispatch failed: {e}");
                self.store.write(|s| s.fail_dispatch(name, &e));
                false
            }
        }
    }
}

/// Split submitted values into node fields and link target ids.
///
/// `id` is dropped (the event carries it) and so are empty targets.
fn split_links(mut values: Record) -> (Record, Vec<String>) {
    values.shift_remove("id");
    let targets = match values.shift_remove(LINKS_FIELD) {
        Some(Value::Array(items)) => items.iter().filter_map(target_id).collect(),
        Some(single) => target_id(&single).into_iter().collect(),
        None => Vec::new(),
    };
    (values, targets)
}

fn target_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The single id present in `after` but not in `before`.
fn created_id(before: &BTreeSet<String>, after: &Collection) -> Option<String> {
    let mut added = after.keys().filter(|id| !before.contains(*id));
    let first = added.next()?;
    if added.next().is_some() { None } else { Some(first.clone()) }
}
