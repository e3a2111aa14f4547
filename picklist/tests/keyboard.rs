//! Tests for key dispatch and the key-interception keymap.

mod common;

use common::{Harness, KeyCall, strings};
use picklist::prelude::*;
use picklist::select::default_keymap;

fn key(key: Key) -> KeyCombo {
    KeyCombo::key(key)
}

// ============================================================================
// Keymap
// ============================================================================

#[test]
fn test_default_keymap_rules() {
    let keymap = default_keymap();

    let space = keymap.rule_for(&Key::Space).unwrap();
    assert!(space.prevents(&key(Key::Space)));
    assert!(!space.prevents(&key(Key::Space).shift()));

    let ctrl_a = key(Key::Char('A')).ctrl();
    let rule = keymap.rule_for(&ctrl_a.key).unwrap();
    assert!(rule.prevents(&ctrl_a));
    assert!(!rule.prevents(&key(Key::Char('a'))));

    let escape = keymap.rule_for(&Key::Escape).unwrap();
    assert!(!escape.stops(&key(Key::Escape)));

    let other = keymap.rule_for(&Key::Char('x')).unwrap();
    assert!(other.subscribe_down && other.subscribe_up);
    assert!(!other.prevents(&key(Key::Char('x'))));
}

#[tokio::test]
async fn test_attach_subscribes_once_and_dispose_releases() {
    let h = Harness::new(SelectConfig::<String>::default());
    let id = h.select.id_string();

    h.select.attach().await;
    h.select.attach().await;
    h.select.dispose().await;
    h.select.dispose().await;

    assert_eq!(
        h.host.key_calls(),
        vec![
            KeyCall::Subscribe(id.clone(), default_keymap()),
            KeyCall::Unsubscribe(id),
        ]
    );
}

#[tokio::test]
async fn test_interceptor_failures_are_absorbed() {
    let h = Harness::new(SelectConfig::<String>::default());
    h.host.fail.store(true, std::sync::atomic::Ordering::SeqCst);

    h.select.attach().await;
    h.select.open_menu().await;
    h.select.close_menu(true).await;

    assert!(!h.select.is_open());
    assert_eq!(h.host.key_calls().len(), 3);
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test]
async fn test_down_opens_then_steps() {
    let h = Harness::new(SelectConfig::<String>::default().multi_selection());
    let ids = h.items(&strings(&["a", "b", "c"]));

    h.select.handle_key_down(key(Key::Down)).await;
    assert!(h.select.is_open());
    assert_eq!(h.select.highlighted(), Some(ids[0]));

    h.select.handle_key_down(key(Key::Down)).await;
    assert_eq!(h.select.highlighted(), Some(ids[1]));

    h.select.handle_key_down(key(Key::Up)).await;
    assert_eq!(h.select.highlighted(), Some(ids[0]));

    h.select.handle_key_down(key(Key::End)).await;
    assert_eq!(h.select.highlighted(), Some(ids[2]));

    h.select.handle_key_down(key(Key::Home)).await;
    assert_eq!(h.select.highlighted(), Some(ids[0]));
}

#[tokio::test]
async fn test_up_when_closed_opens_and_alt_up_closes() {
    let h = Harness::new(SelectConfig::<String>::default());
    h.items(&strings(&["a"]));

    h.select.handle_key_down(key(Key::Up)).await;
    assert!(h.select.is_open());

    h.select.handle_key_down(key(Key::Up).alt()).await;
    assert!(!h.select.is_open());
    assert_eq!(h.host.focus_count(), 1);

    h.select.handle_key_down(key(Key::Down).alt()).await;
    assert!(h.select.is_open());
}

#[tokio::test]
async fn test_enter_commits_highlighted_item() {
    let h = Harness::new(SelectConfig::<String>::default().multi_selection());
    h.items(&strings(&["a", "b"]));

    h.select.handle_key_down(key(Key::Enter)).await;
    assert!(h.select.is_open());

    h.select.handle_key_down(key(Key::Down)).await;
    h.select.handle_key_down(key(Key::Enter)).await;

    assert_eq!(h.select.selected_values(), strings(&["b"]));
    assert!(h.select.is_open());
}

#[tokio::test]
async fn test_enter_without_highlight_closes_single() {
    let h = Harness::new(SelectConfig::<String>::default());
    h.items(&strings(&["a"]));
    h.select.open_menu().await;

    h.select.handle_key_down(key(Key::Enter)).await;

    assert!(!h.select.is_open());
    assert_eq!(h.host.focus_count(), 1);
    assert_eq!(h.select.value(), None);
}

#[tokio::test]
async fn test_space_toggles_and_escape_tab_close() {
    let h = Harness::new(SelectConfig::<String>::default());

    h.select.handle_key_down(key(Key::Space)).await;
    assert!(h.select.is_open());
    h.select.handle_key_down(key(Key::Space)).await;
    assert!(!h.select.is_open());
    assert_eq!(h.host.focus_count(), 1);

    h.select.open_menu().await;
    h.select.handle_key_down(key(Key::Escape)).await;
    assert!(!h.select.is_open());
    assert_eq!(h.host.focus_count(), 2);

    // Tab moves on without taking focus back.
    h.select.open_menu().await;
    h.select.handle_key_down(key(Key::Tab)).await;
    assert!(!h.select.is_open());
    assert_eq!(h.host.focus_count(), 2);
}

#[tokio::test]
async fn test_type_ahead_while_open_emits_no_key_down() {
    let mut h = Harness::new(SelectConfig::<String>::default().multi_selection());
    let ids = h.items(&strings(&["apple", "banana"]));
    h.select.open_menu().await;
    h.drain();

    let result = h.select.handle_key_down(key(Key::Char('b'))).await;

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(h.select.highlighted(), Some(ids[1]));
    assert!(h.drain().is_empty());
}

#[tokio::test]
async fn test_key_down_and_up_notifications() {
    let mut h = Harness::new(SelectConfig::<String>::default());

    let result = h.select.handle_key_down(key(Key::Left)).await;
    assert_eq!(result, EventResult::Ignored);

    h.select.handle_key_up(key(Key::Left));

    assert_eq!(
        h.drain(),
        vec![
            SelectEvent::KeyDown(key(Key::Left)),
            SelectEvent::KeyUp(key(Key::Left)),
        ]
    );
}

#[tokio::test]
async fn test_unhandled_keys_are_left_to_the_host() {
    let mut h = Harness::new(SelectConfig::<String>::default().clearable(true));
    h.items(&strings(&["a"]));
    h.select.set_value(Some("a".to_string()));
    h.select.open_menu().await;
    h.drain();

    for combo in [key(Key::Backspace), key(Key::Right), key(Key::Char('a')).shift()] {
        assert_eq!(h.select.handle_key_down(combo).await, EventResult::Ignored);
    }

    assert!(h.select.is_open());
    assert_eq!(h.select.value(), Some("a".to_string()));
    assert_eq!(
        h.drain(),
        vec![
            SelectEvent::KeyDown(key(Key::Backspace)),
            SelectEvent::KeyDown(key(Key::Right)),
            SelectEvent::KeyDown(key(Key::Char('a')).shift()),
        ]
    );
}

#[test]
fn test_type_ahead_needs_plain_printable_key() {
    assert_eq!(key(Key::Char('x')).type_ahead(), Some('x'));
    assert_eq!(key(Key::Char('x')).ctrl().type_ahead(), None);
    assert_eq!(key(Key::Char(' ')).type_ahead(), None);
    assert_eq!(key(Key::Space).type_ahead(), None);
}

#[tokio::test]
async fn test_locked_select_ignores_keys() {
    let mut h = Harness::new(SelectConfig::<String>::default().read_only(true));
    h.items(&strings(&["a"]));

    let result = h.select.handle_key_down(key(Key::Down)).await;

    assert_eq!(result, EventResult::Ignored);
    assert!(!h.select.is_open());
    assert!(h.drain().is_empty());
}
