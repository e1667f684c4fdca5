//! Integration tests for the session envelope + tokenizer + action codec
//!
//! These tests verify that:
//! - A session written by one side decodes into the same actions
//! - Unknown tags inside a stream never stop decoding
//! - Decoded actions serialize cleanly to JSON for tooling

use activity_format::{decode_stream, Action, ActionKind, KeyCode, MouseButton, Session};

fn sample_actions() -> Vec<Action> {
    vec![
        Action::pause(250),
        Action::mouse_move(12.0, 40.5),
        Action::mouse_down(12.0, 40.5, MouseButton::Left),
        Action::mouse_up(12.0, 40.5, MouseButton::Left),
        Action::message("Sample Button Clicked!"),
        Action::mouse_wheel(100.0, 100.0, -240),
        Action::resize(1280.0, 720.0),
        Action::key_down(KeyCode::SHIFT),
        Action::key_down(KeyCode::A),
        Action::key_up(KeyCode::A),
        Action::key_up(KeyCode::SHIFT),
    ]
}

#[test]
fn test_session_carries_action_stream() {
    let actions = sample_actions();
    let mut session = Session::new(30, 1024.0, 768.0, "theme=dark");
    session.actions = actions.iter().map(Action::encode).collect();

    let restored = Session::deserialize(&session.serialize()).unwrap();
    assert_eq!(restored, session);

    let decoded: Vec<Action> = restored.decode_actions().collect();
    assert_eq!(decoded, actions);
}

#[test]
fn test_unknown_tags_do_not_abort_stream() {
    let decoded: Vec<Action> = decode_stream("w10q55m1,2").collect();
    assert_eq!(
        decoded,
        [
            Action::pause(10),
            Action::unknown("q55"),
            Action::mouse_move(1.0, 2.0),
        ]
    );
}

#[test]
fn test_decoded_actions_to_json() {
    let decoded: Vec<Action> = decode_stream("m1,2d65").collect();
    let json = serde_json::to_value(&decoded).unwrap();
    assert_eq!(json[0]["kind"], "mouse_move");
    assert_eq!(json[0]["params"][1], "2");
    assert_eq!(json[1]["kind"], "key_down");
}

#[test]
fn test_every_kind_appears_in_stream() {
    let mut session = Session::new(60, 0.0, 0.0, "");
    session.actions = sample_actions().iter().map(Action::encode).collect();
    let mut kinds: Vec<ActionKind> = session.decode_actions().map(|a| a.kind()).collect();
    kinds.dedup();
    assert!(kinds.contains(&ActionKind::Message));
    assert!(kinds.contains(&ActionKind::MouseWheel));
    assert!(!kinds.contains(&ActionKind::Unknown));
}
