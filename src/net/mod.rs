//! Networking modules for the host dispatch protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dispatch` owns the request/response round trip, `tauri` adapts it to the
//! desktop host, `graph_sync` drives graph events against screen state, and
//! `types` defines the shared wire schema.

pub mod dispatch;
pub mod graph_sync;
pub mod tauri;
pub mod types;

#[cfg(test)]
#[path = "bridge_stub_test.rs"]
pub(crate) mod bridge_stub;
