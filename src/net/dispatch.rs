//! Dispatch client: the single I/O boundary between UI state and the backend.
//!
//! Every mutation is a named event plus a JSON-encoded payload. The backend
//! answers with JSON text describing the full graph, which callers reconcile
//! wholesale.
//!
//! ERROR HANDLING
//! ==============
//! A missing bridge is not an error: the client answers with an empty node map
//! so the UI stays usable outside its host. Bridge rejections and malformed
//! responses surface as `DispatchError` and are never retried here.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde_json::Value;
use thiserror::Error;

use crate::net::types::{GraphEvent, GraphSnapshot};

/// Request envelope handed to the host bridge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeRequest {
    pub event: String,
    /// JSON-encoded payload object.
    pub payload: String,
}

/// Host-side entry point that answers dispatched events with JSON text.
pub trait BridgeHandle {
    fn invoke(&self, request: BridgeRequest) -> LocalBoxFuture<'static, Result<String, DispatchError>>;
}

/// Whether a backend bridge is reachable, decided once at startup.
#[derive(Clone, Default)]
pub enum Bridge {
    Connected(Arc<dyn BridgeHandle + Send + Sync>),
    #[default]
    Disconnected,
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected(_) => f.write_str("Bridge::Connected"),
            Self::Disconnected => f.write_str("Bridge::Disconnected"),
        }
    }
}

/// Failures surfaced by a dispatch round trip.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("bridge rejected request: {0}")]
    Bridge(String),
    #[error("bridge returned a non-string response")]
    NonStringResponse,
    #[error("failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("response is not a graph snapshot: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}

/// Sends named events through the bridge and parses the JSON reply.
#[derive(Clone, Debug, Default)]
pub struct DispatchClient {
    bridge: Bridge,
}

impl DispatchClient {
    pub fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.bridge, Bridge::Connected(_))
    }

    /// Send `event` with `payload` and resolve with the parsed JSON response.
    ///
    /// # Errors
    ///
    /// Returns the bridge's rejection untouched, or a parse error when the
    /// response text is not JSON.
    pub async fn dispatch(&self, event: &str, payload: &Value) -> Result<Value, DispatchError> {
        let Bridge::Connected(handle) = &self.bridge else {
            return Ok(GraphSnapshot::empty_default());
        };

        let payload = serde_json::to_string(payload).map_err(DispatchError::Encode)?;
        let raw = handle
            .invoke(BridgeRequest { event: event.to_owned(), payload })
            .await?;
        serde_json::from_str(&raw).map_err(DispatchError::MalformedResponse)
    }

    /// Dispatch a typed graph event and decode the snapshot it returns.
    ///
    /// # Errors
    ///
    /// Same as [`DispatchClient::dispatch`], plus `UnexpectedShape` when the
    /// JSON is valid but not a snapshot.
    pub async fn send(&self, event: &GraphEvent) -> Result<GraphSnapshot, DispatchError> {
        let value = self.dispatch(event.name(), &event.payload()).await?;
        serde_json::from_value(value).map_err(DispatchError::UnexpectedShape)
    }
}
