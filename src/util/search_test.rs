use super::*;

fn options() -> Vec<SelectOption> {
    vec![SelectOption::new("Alpha", 1), SelectOption::new("Beta", 2)]
}

fn labels(found: &[&SelectOption]) -> Vec<String> {
    found.iter().map(|o| o.label.clone()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn typing_filters_case_insensitively_while_focused() {
    let opts = options();
    let mut state = SearchState::default();
    state.focus();
    state.set_query("al");
    let found = state.candidates(&opts);
    assert_eq!(found, vec![&opts[0]]);
    assert_eq!(found[0].value, serde_json::json!(1));
}

#[test]
fn empty_query_yields_no_candidates_even_when_focused() {
    let opts = options();
    let mut state = SearchState::default();
    state.focus();
    state.set_query("al");
    state.set_query("");
    assert!(state.candidates(&opts).is_empty());
    assert!(!state.is_open());
}

#[test]
fn unfocused_control_never_lists_candidates() {
    let opts = options();
    let mut state = SearchState::default();
    state.set_query("a");
    assert!(state.candidates(&opts).is_empty());
}

#[test]
fn candidates_keep_source_order() {
    let opts = vec![SelectOption::new("Banana", 1), SelectOption::new("Apple", 2), SelectOption::new("Cherry", 3)];
    let mut state = SearchState::default();
    state.focus();
    state.set_query("A");
    assert_eq!(labels(&state.candidates(&opts)), vec!["Banana".to_owned(), "Apple".to_owned()]);
}

// =============================================================
// Seeding and selection
// =============================================================

#[test]
fn seeded_query_uses_matching_option_label() {
    assert_eq!(SearchState::seeded(&options(), &serde_json::json!(2)).query(), "Beta");
    assert_eq!(SearchState::seeded(&options(), &serde_json::json!(9)).query(), "");
    assert!(!SearchState::seeded(&options(), &serde_json::json!(2)).is_focused());
}

#[test]
fn select_sets_label_and_clears_focus() {
    let opts = options();
    let mut state = SearchState::default();
    state.focus();
    state.set_query("be");
    let value = state.select(&opts[1]);
    assert_eq!(value, serde_json::json!(2));
    assert_eq!(state.query(), "Beta");
    assert!(!state.is_focused());
    assert!(state.candidates(&opts).is_empty());
}

#[test]
fn sync_to_cleared_value_empties_query() {
    let mut state = SearchState::default();
    state.focus();
    state.set_query("be");
    state.select(&options()[1]);
    assert_eq!(state.query(), "Beta");

    state.sync_to(&options(), &serde_json::json!(""));
    assert_eq!(state.query(), "");
    assert!(state.candidates(&options()).is_empty());
}

#[test]
fn sync_to_matching_value_shows_its_label() {
    let mut state = SearchState::default();
    state.sync_to(&options(), &serde_json::json!(1));
    assert_eq!(state.query(), "Alpha");

    state.sync_to(&options(), &serde_json::json!([1, 2]));
    assert_eq!(state.query(), "", "multi-value arrays match no single option");
}

// =============================================================
// Blur grace
// =============================================================

#[test]
fn blur_keeps_list_open_until_grace_elapses() {
    let opts = options();
    let mut state = SearchState::default();
    state.focus();
    state.set_query("al");

    let token = state.blur();
    assert_eq!(state.candidates(&opts).len(), 1);

    state.blur_elapsed(token);
    assert!(state.candidates(&opts).is_empty());
}

#[test]
fn refocus_cancels_pending_blur() {
    let mut state = SearchState::default();
    state.focus();
    let token = state.blur();
    state.focus();
    state.blur_elapsed(token);
    assert!(state.is_focused());
}

#[test]
fn click_during_grace_wins_over_stale_blur() {
    let opts = options();
    let mut state = SearchState::default();
    state.focus();
    state.set_query("al");
    let token = state.blur();
    state.select(&opts[0]);
    state.focus();
    state.blur_elapsed(token);
    assert!(state.is_focused());
    assert_eq!(state.query(), "Alpha");
}

// =============================================================
// selected_labels
// =============================================================

#[test]
fn selected_labels_resolve_values_in_order() {
    let found = selected_labels(&options(), &serde_json::json!([2, 1, 5]));
    assert_eq!(found, vec!["Beta".to_owned(), "Alpha".to_owned(), "5".to_owned()]);
    assert!(selected_labels(&options(), &serde_json::json!("")).is_empty());
}
