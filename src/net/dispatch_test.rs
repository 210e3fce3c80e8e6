use futures::executor::block_on;

use super::*;
use crate::net::bridge_stub::{StubBridge, connected};
use crate::net::types::Record;

// =============================================================
// Disconnected fallback
// =============================================================

#[test]
fn disconnected_client_resolves_to_empty_node_map() {
    let client = DispatchClient::new(Bridge::Disconnected);
    let value = block_on(client.dispatch("node_created", &serde_json::json!({ "slug": "x" })))
        .expect("fallback never fails");
    assert_eq!(value, serde_json::json!({ "node": {} }));
    assert!(!client.is_connected());
}

#[test]
fn disconnected_client_decodes_fallback_as_empty_snapshot() {
    let client = DispatchClient::default();
    let snapshot = block_on(client.send(&GraphEvent::AppStarted)).expect("fallback snapshot");
    assert_eq!(snapshot.node.map(|n| n.len()), Some(0));
    assert!(snapshot.edge.is_none());
}

// =============================================================
// Connected round trips
// =============================================================

#[test]
fn dispatch_serializes_payload_as_json_text() {
    let stub = StubBridge::echo(r#"{"node":{}}"#);
    let client = DispatchClient::new(connected(&stub));

    block_on(client.dispatch("node_created", &serde_json::json!({ "slug": "example-slug" })))
        .expect("dispatch");

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].event, "node_created");
    assert_eq!(calls[0].payload, r#"{"slug":"example-slug"}"#);
}

#[test]
fn send_decodes_echoed_snapshot() {
    let stub = StubBridge::echo(r#"{"node":{"1":{"id":"1","slug":"example-slug"}}}"#);
    let client = DispatchClient::new(connected(&stub));

    let mut fields = Record::new();
    fields.insert("slug".to_owned(), serde_json::json!("example-slug"));
    let snapshot = block_on(client.send(&GraphEvent::NodeCreated { fields })).expect("snapshot");

    let nodes = snapshot.node.expect("node slice");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes["1"]["slug"], serde_json::json!("example-slug"));
}

// =============================================================
// Failures
// =============================================================

#[test]
fn bridge_rejection_propagates_untouched() {
    let stub = StubBridge::new(|_| Err(DispatchError::Bridge("backend down".to_owned())));
    let client = DispatchClient::new(connected(&stub));

    let err = block_on(client.dispatch("app_started", &serde_json::json!({}))).expect_err("rejection");
    assert!(matches!(err, DispatchError::Bridge(ref reason) if reason == "backend down"));
    assert_eq!(stub.calls().len(), 1);
}

#[test]
fn malformed_response_is_a_parse_error() {
    let stub = StubBridge::echo("not json");
    let client = DispatchClient::new(connected(&stub));

    let err = block_on(client.dispatch("app_started", &serde_json::json!({}))).expect_err("parse failure");
    assert!(matches!(err, DispatchError::MalformedResponse(_)));
}

#[test]
fn non_snapshot_json_is_unexpected_shape() {
    let stub = StubBridge::echo(r#"{"node":"nope"}"#);
    let client = DispatchClient::new(connected(&stub));

    let err = block_on(client.send(&GraphEvent::AppStarted)).expect_err("shape failure");
    assert!(matches!(err, DispatchError::UnexpectedShape(_)));
}
