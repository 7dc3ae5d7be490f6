use std::time::{Duration, Instant};

use jsontree::clipboard::{CopyIndicator, MemoryClipboard, NoClipboard};
use jsontree::collapse::CollapseState;
use jsontree::render::render;
use jsontree::serialize::to_pretty_string;
use jsontree::{Path, ToggleOutcome, TreeSession, Value};

fn nested() -> Value {
    Value::from_json_str(r#"{"a": {"b": [1, 2], "c": "x"}, "d": [true]}"#).unwrap()
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_toggle_flips_only_target() {
    let mut session = TreeSession::new(nested());
    let a = Path::root().key("a");

    assert_eq!(session.toggle(&a), ToggleOutcome::Collapsed);
    assert!(session.collapsed().contains(&a));
    assert_eq!(session.collapsed().len(), 1);

    assert_eq!(session.toggle(&a), ToggleOutcome::Expanded);
    assert!(session.collapsed().is_empty());
}

#[test]
fn test_descendant_state_survives_ancestor_collapse() {
    let mut session = TreeSession::new(nested());
    let a = Path::root().key("a");
    let ab = a.key("b");

    session.toggle(&ab);
    session.toggle(&a);
    assert_eq!(session.render().row(1).unwrap().text(), "\"a\": ▶ { 2 properties },");

    session.toggle(&a);
    let tree = session.render();
    assert_eq!(tree.row(2).unwrap().text(), "\"b\": ▶ [ 2 items ],");
    assert!(session.collapsed().contains(&ab));
}

#[test]
fn test_toggle_ignores_non_containers() {
    let mut session = TreeSession::new(
        Value::from_json_str(r#"{"s": "x", "e": [], "m": {}}"#).unwrap(),
    );

    assert_eq!(session.toggle(&Path::root().key("s")), ToggleOutcome::Ignored);
    assert_eq!(session.toggle(&Path::root().key("e")), ToggleOutcome::Ignored);
    assert_eq!(session.toggle(&Path::root().key("m")), ToggleOutcome::Ignored);
    assert_eq!(session.toggle(&Path::root().key("missing")), ToggleOutcome::Ignored);
    assert!(session.collapsed().is_empty());
}

#[test]
fn test_toggle_is_an_involution() {
    let value = nested();
    let state = CollapseState::new();
    let path = Path::root().key("d");

    let twice = state.toggled(&path).toggled(&path);
    assert_eq!(twice, state);
    assert_eq!(render(&value, &twice), render(&value, &state));
}

#[test]
fn test_collapse_all_and_expand_all() {
    let mut session = TreeSession::new(nested());

    session.collapse_all();
    assert_eq!(session.collapsed().len(), 4);
    assert_eq!(session.render().len(), 1);

    session.expand_all();
    assert!(session.collapsed().is_empty());
    assert_eq!(session.render().nodes_visited(), session.value().node_count());
}

#[test]
fn test_sessions_are_independent() {
    let mut left = TreeSession::new(nested());
    let right = TreeSession::new(nested());

    left.toggle(&Path::root());
    assert!(right.collapsed().is_empty());
    assert_ne!(left.render(), right.render());
}

#[test]
fn test_replace_value_keeps_collapse_state() {
    let mut session = TreeSession::new(nested());
    session.toggle(&Path::root().key("d"));

    session.replace_value(Value::from_json_str(r#"{"d": [1, 2, 3]}"#).unwrap());
    assert_eq!(session.render().row(1).unwrap().text(), "\"d\": ▶ [ 3 items ]");
}

// ============================================================================
// Copy
// ============================================================================

#[test]
fn test_copy_ignores_collapse_state() {
    let mut session = TreeSession::new(nested());
    session.collapse_all();

    let mut clipboard = MemoryClipboard::new();
    let outcome = session.copy(&mut clipboard, Instant::now());

    assert!(outcome.delivered());
    assert_eq!(outcome.text, to_pretty_string(session.value()));
    assert_eq!(clipboard.contents(), Some(outcome.text.as_str()));
    assert!(outcome.text.contains("\"c\": \"x\""));
}

#[test]
fn test_copy_feedback_expires() {
    let start = Instant::now();
    let mut session = TreeSession::new(nested())
        .with_indicator(CopyIndicator::new(Duration::from_millis(2000)));
    assert_eq!(session.copy_feedback(start), None);

    session.copy(&mut MemoryClipboard::new(), start);
    assert_eq!(session.copy_feedback(start + Duration::from_millis(1999)), Some(true));
    assert_eq!(session.copy_feedback(start + Duration::from_millis(2000)), None);
}

#[test]
fn test_failed_copy_still_returns_text() {
    let start = Instant::now();
    let mut session = TreeSession::new(nested());

    let outcome = session.copy(&mut NoClipboard, start);
    assert!(!outcome.delivered());
    assert_eq!(outcome.text, to_pretty_string(session.value()));
    assert_eq!(session.copy_feedback(start), Some(false));
}

#[test]
fn test_repeated_copy_is_idempotent() {
    let mut session = TreeSession::new(nested());
    let mut clipboard = MemoryClipboard::new();
    let now = Instant::now();

    let first = session.copy(&mut clipboard, now).text;
    let second = session.copy(&mut clipboard, now).text;
    assert_eq!(first, second);
    assert_eq!(clipboard.writes(), 2);
}
