//! Tests for committing values and the owner-facing bindings.

mod common;

use common::{Harness, selection_changes, strings};
use picklist::prelude::*;

fn single() -> Harness<String> {
    Harness::new(SelectConfig::default())
}

fn multi() -> Harness<String> {
    Harness::new(SelectConfig::default().multi_selection())
}

// ============================================================================
// Single selection
// ============================================================================

#[tokio::test]
async fn test_single_commit_emits_value_text_selection_in_order() {
    let mut h = single();
    let ids = h.items(&strings(&["a", "b", "c"]));

    h.select.select_value("b".to_string()).await;

    let events: Vec<_> = h
        .drain()
        .into_iter()
        .filter(|e| !matches!(e, SelectEvent::Closed))
        .collect();
    assert_eq!(
        events,
        vec![
            SelectEvent::ValueChanged(Some("b".to_string())),
            SelectEvent::TextChanged(Some("b".to_string())),
            SelectEvent::SelectionChanged(strings(&["b"])),
        ]
    );
    assert_eq!(h.select.value(), Some("b".to_string()));
    assert_eq!(h.select.text(), Some("b".to_string()));
    assert_eq!(h.select.highlighted(), Some(ids[1]));
    assert!(!h.select.is_open());
}

#[tokio::test]
async fn test_single_commit_same_value_is_silent() {
    let mut h = single();
    h.items(&strings(&["a", "b"]));
    h.select.select_value("a".to_string()).await;
    h.drain();

    h.select.select_value("a".to_string()).await;

    assert!(selection_changes(&h.drain()).is_empty());
    assert_eq!(h.select.selected_values(), strings(&["a"]));
}

#[tokio::test]
async fn test_single_commit_replaces_previous_value() {
    let mut h = single();
    h.items(&strings(&["a", "b"]));
    h.select.select_value("a".to_string()).await;
    h.select.select_value("b".to_string()).await;

    assert_eq!(h.select.selected_values(), strings(&["b"]));
    assert_eq!(
        selection_changes(&h.drain()),
        vec![strings(&["a"]), strings(&["b"])]
    );
}

#[tokio::test]
async fn test_select_index_commits_item_value() {
    let h = single();
    h.items(&strings(&["a", "b", "c"]));

    h.select.select_index(2).await;

    assert_eq!(h.select.value(), Some("c".to_string()));
}

#[tokio::test]
async fn test_select_index_out_of_range_closes_single() {
    let mut h = single();
    h.items(&strings(&["a"]));
    h.select.open_menu().await;
    h.drain();

    h.select.select_index(5).await;

    assert!(!h.select.is_open());
    assert_eq!(h.drain(), vec![SelectEvent::Blurred, SelectEvent::Closed]);
    assert_eq!(h.host.focus_count(), 1);
    assert_eq!(h.select.value(), None);
}

// ============================================================================
// Multi selection
// ============================================================================

#[tokio::test]
async fn test_multi_commit_toggles_membership() {
    let mut h = multi();
    h.items(&strings(&["a", "b", "c"]));

    h.select.select_value("a".to_string()).await;
    h.select.select_value("c".to_string()).await;
    h.select.select_value("a".to_string()).await;

    assert_eq!(h.select.selected_values(), strings(&["c"]));
    assert_eq!(h.select.text(), Some("c".to_string()));
    assert_eq!(
        selection_changes(&h.drain()),
        vec![strings(&["a"]), strings(&["a", "c"]), strings(&["c"])]
    );
}

#[tokio::test]
async fn test_multi_text_follows_registry_order() {
    let h = multi();
    h.items(&strings(&["a", "b", "c"]));
    h.select.open_menu().await;

    h.select.select_value("c".to_string()).await;
    h.select.select_value("a".to_string()).await;

    assert_eq!(h.select.selected_values(), strings(&["a", "c"]));
    assert_eq!(h.select.text(), Some("a, c".to_string()));
    assert!(h.select.is_open());
}

#[tokio::test]
async fn test_multi_text_uses_delimiter_and_aggregator() {
    let h = Harness::new(SelectConfig::<String>::default().multi_selection().delimiter(" | "));
    h.items(&strings(&["a", "b"]));
    h.select.select_value("a".to_string()).await;
    h.select.select_value("b".to_string()).await;
    assert_eq!(h.select.text(), Some("a | b".to_string()));

    let h = Harness::new(
        SelectConfig::<String>::default()
            .multi_selection()
            .multi_selection_text(|texts| format!("{} selected", texts.len())),
    );
    h.items(&strings(&["a", "b"]));
    h.select.select_value("a".to_string()).await;
    assert_eq!(h.select.text(), Some("1 selected".to_string()));
    h.select.select_value("a".to_string()).await;
    assert_eq!(h.select.text(), Some("0 selected".to_string()));
}

#[tokio::test]
async fn test_multi_value_not_in_list_is_kept_after_listed_values() {
    let h = multi();
    h.items(&strings(&["a", "b"]));

    h.select.set_selected_values(strings(&["zzz", "b"]));

    assert_eq!(h.select.selected_values(), strings(&["b", "zzz"]));
    assert_eq!(h.select.text(), Some("b, zzz".to_string()));
}

// ============================================================================
// Clear
// ============================================================================

#[tokio::test]
async fn test_clear_emits_only_what_changed() {
    let mut h = single();
    h.items(&strings(&["a"]));
    h.select.select_value("a".to_string()).await;
    h.drain();

    h.select.clear();
    assert_eq!(
        h.drain(),
        vec![
            SelectEvent::ValueChanged(None),
            SelectEvent::TextChanged(None),
            SelectEvent::SelectionChanged(Vec::new()),
        ]
    );

    h.select.clear();
    assert!(h.drain().is_empty());
}

#[tokio::test]
async fn test_clear_button_clears_then_notifies() {
    let mut h = Harness::new(SelectConfig::<String>::default().clearable(true));
    h.items(&strings(&["a"]));
    h.select.select_value("a".to_string()).await;
    assert!(h.select.shows_clear_button());
    h.drain();

    h.select.clear_button_click();

    let events = h.drain();
    assert_eq!(events.last(), Some(&SelectEvent::ClearButtonClicked));
    assert_eq!(selection_changes(&events), vec![Vec::<String>::new()]);
    assert!(!h.select.has_value());
    assert!(!h.select.shows_clear_button());
}

// ============================================================================
// Bindings
// ============================================================================

#[tokio::test]
async fn test_set_selected_values_ignores_equal_set() {
    let mut h = multi();
    h.items(&strings(&["a", "b"]));
    h.select.set_selected_values(strings(&["a", "b"]));
    assert_eq!(selection_changes(&h.drain()).len(), 1);

    h.select.set_selected_values(strings(&["b", "a"]));

    assert!(selection_changes(&h.drain()).is_empty());
}

#[tokio::test]
async fn test_set_selected_values_truncates_in_single_mode() {
    let h = single();
    h.items(&strings(&["a", "b", "c"]));

    h.select.set_selected_values(strings(&["b", "c"]));

    assert_eq!(h.select.selected_values(), strings(&["b"]));
    assert_eq!(h.select.value(), Some("b".to_string()));
    assert_eq!(h.select.text(), Some("b".to_string()));
}

#[tokio::test]
async fn test_set_value_drives_single_selection() {
    let mut h = single();
    let ids = h.items(&strings(&["a", "b"]));

    h.select.set_value(Some("b".to_string()));

    assert_eq!(h.select.selected_values(), strings(&["b"]));
    assert_eq!(h.select.text(), Some("b".to_string()));
    assert!(h.select.is_value_in_list());
    assert_eq!(selection_changes(&h.drain()), vec![strings(&["b"])]);

    let outcome = h.select.register(SelectItem::new("b".to_string()));
    assert!(!outcome.added);
    assert_eq!(h.select.items()[1].id(), ids[1]);
}

#[tokio::test]
async fn test_strict_hides_value_not_in_list() {
    let h = Harness::new(SelectConfig::<String>::default().strict(true));
    h.items(&strings(&["a"]));

    h.select.set_value(Some("zzz".to_string()));
    assert_eq!(h.select.text(), Some("zzz".to_string()));
    assert_eq!(h.select.input_text(), None);

    h.select.set_value(Some("a".to_string()));
    assert_eq!(h.select.input_text(), Some("a".to_string()));
}

#[tokio::test]
async fn test_set_comparer_deduplicates() {
    let h = multi();
    h.items(&strings(&["Apple", "apple", "banana"]));
    h.select.set_selected_values(strings(&["Apple", "apple"]));
    assert_eq!(h.select.len(), 3);

    h.select.set_comparer(|a: &String, b: &String| a.eq_ignore_ascii_case(b));

    assert_eq!(h.select.len(), 2);
    assert_eq!(h.select.selected_values(), strings(&["Apple"]));
    assert!(h.select.is_selected(&"APPLE".to_string()));
}

#[tokio::test]
async fn test_set_comparer_drops_highlight_of_merged_item() {
    let h = multi();
    let ids = h.items(&strings(&["a", "A"]));
    h.select.select_last().await;
    assert_eq!(h.select.highlighted(), Some(ids[1]));

    h.select.set_comparer(|a: &String, b: &String| a.eq_ignore_ascii_case(b));

    assert_eq!(h.select.len(), 1);
    assert_eq!(h.select.highlighted(), None);
    assert_eq!(h.select.highlighted_index(), None);

    h.select.select_first().await;
    assert_eq!(h.select.highlighted(), Some(ids[0]));
}

#[tokio::test]
async fn test_switching_to_single_keeps_first_value() {
    let mut h = multi();
    h.items(&strings(&["a", "b", "c"]));
    h.select.set_selected_values(strings(&["a", "c"]));
    h.drain();

    h.select.set_multi_selection(false);

    assert_eq!(h.select.mode(), SelectionMode::Single);
    assert_eq!(h.select.selected_values(), strings(&["a"]));
    assert_eq!(h.select.value(), Some("a".to_string()));
    assert_eq!(h.select.text(), Some("a".to_string()));
    assert_eq!(selection_changes(&h.drain()), vec![strings(&["a"])]);
}

// ============================================================================
// Guards
// ============================================================================

#[tokio::test]
async fn test_disabled_and_read_only_refuse_commits() {
    let mut h = Harness::new(SelectConfig::<String>::default().disabled(true));
    h.items(&strings(&["a"]));
    h.select.select_value("a".to_string()).await;
    h.select.select_index(0).await;
    h.select.clear_button_click();
    assert!(h.drain().is_empty());
    assert_eq!(h.select.value(), None);

    let h = Harness::new(SelectConfig::<String>::default().read_only(true));
    h.items(&strings(&["a"]));
    h.select.select_value("a".to_string()).await;
    assert_eq!(h.select.value(), None);

    // Bindings from the owner still apply.
    h.select.set_value(Some("a".to_string()));
    assert_eq!(h.select.value(), Some("a".to_string()));
}
