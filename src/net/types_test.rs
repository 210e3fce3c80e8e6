use super::*;

// =============================================================
// GraphEvent
// =============================================================

#[test]
fn event_names_match_backend_contract() {
    assert_eq!(GraphEvent::AppStarted.name(), "app_started");
    assert_eq!(GraphEvent::NodeCreated { fields: Record::new() }.name(), "node_created");
    assert_eq!(
        GraphEvent::NodeUpdated { id: "1".to_owned(), fields: Record::new() }.name(),
        "node_updated"
    );
    assert_eq!(GraphEvent::NodeDeleted { id: "1".to_owned() }.name(), "node_deleted");
    assert_eq!(
        GraphEvent::EdgeCreated { source: "1".to_owned(), target: "2".to_owned() }.name(),
        "edge_created"
    );
}

#[test]
fn app_started_payload_is_empty_object() {
    assert_eq!(GraphEvent::AppStarted.payload(), serde_json::json!({}));
}

#[test]
fn node_updated_payload_leads_with_id_and_ignores_field_id() {
    let mut fields = Record::new();
    fields.insert("id".to_owned(), serde_json::json!("stale"));
    fields.insert("slug".to_owned(), serde_json::json!("renamed"));
    let event = GraphEvent::NodeUpdated { id: "7".to_owned(), fields };

    let payload = event.payload();
    assert_eq!(payload, serde_json::json!({ "id": "7", "slug": "renamed" }));
    let keys = payload.as_object().map(|o| o.keys().cloned().collect::<Vec<_>>()).unwrap_or_default();
    assert_eq!(keys, vec!["id".to_owned(), "slug".to_owned()]);
}

#[test]
fn edge_created_payload_carries_endpoints() {
    let event = GraphEvent::EdgeCreated { source: "1".to_owned(), target: "2".to_owned() };
    assert_eq!(event.payload(), serde_json::json!({ "source": "1", "target": "2" }));
}

#[test]
fn slices_follow_event_kind() {
    assert_eq!(GraphEvent::AppStarted.slices(), Slices { nodes: true, edges: true });
    assert_eq!(GraphEvent::NodeDeleted { id: "1".to_owned() }.slices(), Slices { nodes: true, edges: false });
    assert_eq!(
        GraphEvent::EdgeCreated { source: "1".to_owned(), target: "2".to_owned() }.slices(),
        Slices { nodes: false, edges: true }
    );
}

// =============================================================
// GraphSnapshot
// =============================================================

#[test]
fn snapshot_without_edge_key_reports_none() {
    let snapshot: GraphSnapshot =
        serde_json::from_value(serde_json::json!({ "node": { "1": { "id": "1", "slug": "a" } } }))
            .expect("snapshot");
    assert_eq!(snapshot.node.as_ref().map(Collection::len), Some(1));
    assert!(snapshot.edge.is_none());
}

#[test]
fn empty_default_parses_to_empty_node_map() {
    let snapshot: GraphSnapshot = serde_json::from_value(GraphSnapshot::empty_default()).expect("snapshot");
    assert_eq!(snapshot.node, Some(Collection::new()));
    assert!(snapshot.edge.is_none());
}

#[test]
fn record_keeps_backend_key_order() {
    let snapshot: GraphSnapshot = serde_json::from_str(r#"{"node":{"1":{"slug":"a","id":"1","weight":3}}}"#)
        .expect("snapshot");
    let record = snapshot.node.and_then(|mut n| n.shift_remove("1")).expect("record");
    let keys = record.keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys, vec!["slug".to_owned(), "id".to_owned(), "weight".to_owned()]);
}

#[test]
fn collection_keeps_backend_id_order() {
    let snapshot: GraphSnapshot =
        serde_json::from_str(r#"{"node":{"10":{"id":"10"},"2":{"id":"2"},"1":{"id":"1"}}}"#).expect("snapshot");
    let ids = snapshot.node.map(|n| n.keys().cloned().collect::<Vec<_>>()).unwrap_or_default();
    assert_eq!(ids, vec!["10".to_owned(), "2".to_owned(), "1".to_owned()]);
}

// =============================================================
// record_ref
// =============================================================

#[test]
fn record_ref_accepts_strings_and_numbers() {
    let record = serde_json::json!({ "id": 4, "source": "9", "target": null });
    let record = record.as_object().cloned().unwrap_or_default();
    assert_eq!(record_id(&record).as_deref(), Some("4"));
    assert_eq!(record_ref(&record, "source").as_deref(), Some("9"));
    assert_eq!(record_ref(&record, "target"), None);
    assert_eq!(record_ref(&record, "missing"), None);
}
