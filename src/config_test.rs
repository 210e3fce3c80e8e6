use super::*;

#[test]
fn defaults_match_host_contract() {
    let config = ClientConfig::default();
    assert_eq!(config.command, "dispatch");
    assert_eq!(config.blur_grace_ms, 150);
    assert_eq!(config.label_key, "slug");
    assert_eq!(config.missing_target_label, "(missing)");
    assert!(config.verbose);
}

#[test]
fn overrides_apply_well_typed_entries() {
    let config = ClientConfig::from_overrides(&serde_json::json!({
        "command": "graph_dispatch",
        "blur_grace_ms": 250,
        "label_key": "name",
        "verbose": false
    }));
    assert_eq!(config.command, "graph_dispatch");
    assert_eq!(config.blur_grace_ms, 250);
    assert_eq!(config.label_key, "name");
    assert_eq!(config.missing_target_label, "(missing)");
    assert!(!config.verbose);
}

#[test]
fn invalid_entries_keep_defaults() {
    let config = ClientConfig::from_overrides(&serde_json::json!({
        "command": "  ",
        "blur_grace_ms": -5,
        "label_key": 7,
        "verbose": "yes"
    }));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn non_object_overrides_are_ignored() {
    assert_eq!(ClientConfig::from_overrides(&serde_json::json!([1, 2])), ClientConfig::default());
}

#[test]
fn load_off_browser_returns_defaults() {
    assert_eq!(ClientConfig::load(), ClientConfig::default());
}
