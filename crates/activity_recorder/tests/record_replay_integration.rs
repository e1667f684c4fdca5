//! Integration tests for capture + replay
//!
//! These tests verify that:
//! - A captured session saves to the expected text
//! - Replaying that text drives the sink in order with the recorded cadence
//! - Surface offsets are applied to replayed pointer positions
//! - A cancellation token handed to another task stops playback
//! - The movement track of a captured session matches what was recorded

use activity_recorder::capture::{InputEvent, ManualTicks, Recorder, RecorderConfig};
use activity_recorder::format::{KeyCode, MouseButton, Point};
use activity_recorder::testing::{HeadlessConfig, HeadlessSurface, RecordingSink, SinkCall};
use activity_recorder::{MovementTrack, PlaybackError, Player, ReplayConfig, Surface};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const CAPTURED: &str = "f10;w800;h600;c;aw150m5,6p5,6,0s10,20,2w580d65";

fn capture() -> String {
    let ticks = Arc::new(ManualTicks::new(0));
    let mut recorder = Recorder::with_ticks(RecorderConfig::new(10), ticks);
    recorder
        .attach(Arc::new(HeadlessSurface::new(800.0, 600.0)))
        .unwrap();

    recorder.start("").unwrap();
    recorder
        .record_at(250, InputEvent::MouseMove { x: 5.0, y: 6.0 })
        .unwrap();
    recorder
        .record_at(
            260,
            InputEvent::MouseDown {
                x: 5.0,
                y: 6.0,
                button: MouseButton::Left,
            },
        )
        .unwrap();
    recorder
        .record_at(
            300,
            InputEvent::MouseWheel {
                x: 10.0,
                y: 20.0,
                delta: 3,
            },
        )
        .unwrap();
    recorder
        .record_at(
            320,
            InputEvent::MouseWheel {
                x: 10.0,
                y: 20.0,
                delta: -1,
            },
        )
        .unwrap();
    recorder
        .record_at(1000, InputEvent::KeyDown { key: KeyCode::A })
        .unwrap();
    recorder.stop().unwrap();
    recorder.save()
}

/// Test that a captured session saves pauses, merged wheel and key tokens
#[test]
fn test_capture_saves_expected_text() {
    assert_eq!(capture(), CAPTURED);
}

/// Test that replaying a capture reproduces the input and timing
#[tokio::test(start_paused = true)]
async fn test_replay_captured_session() {
    let sink = Arc::new(RecordingSink::new());
    let surface = Arc::new(HeadlessSurface::new(10.0, 10.0));
    let player = Player::new(sink.clone(), ReplayConfig::default()).with_target(surface.clone());

    let start = Instant::now();
    let summary = player.play(&capture()).await.unwrap();

    // 150 + 580 recorded idle time plus one 100ms frame per dispatched action
    assert_eq!(start.elapsed(), Duration::from_millis(1130));
    assert_eq!(summary.dispatched, 4);
    assert_eq!(summary.paused, Duration::from_millis(730));
    assert_eq!(surface.size(), (800.0, 600.0));
    assert_eq!(
        sink.calls(),
        [
            SinkCall::CursorPosition(5.0, 6.0),
            SinkCall::CursorPosition(5.0, 6.0),
            SinkCall::Press(MouseButton::Left),
            SinkCall::CursorPosition(10.0, 20.0),
            SinkCall::Scroll(2),
            SinkCall::KeyDown(KeyCode::A),
        ]
    );
}

/// Test that pointer positions go through the surface's screen mapping
#[tokio::test(start_paused = true)]
async fn test_replay_maps_to_screen() {
    let sink = Arc::new(RecordingSink::new());
    let surface = Arc::new(HeadlessSurface::with_config(
        HeadlessConfig::new(100.0, 100.0).with_origin(50.0, 40.0),
    ));
    let player = Player::new(sink.clone(), ReplayConfig::default()).with_target(surface);

    player.play("f30;w100;h100;c;am1,2").await.unwrap();
    assert_eq!(sink.calls(), [SinkCall::CursorPosition(51.0, 42.0)]);
}

/// Test that a token cancelled from outside stops playback
#[tokio::test(start_paused = true)]
async fn test_external_cancellation() {
    let sink = Arc::new(RecordingSink::new());
    let player = Arc::new(
        Player::new(sink.clone(), ReplayConfig::default().with_speed(2.0))
            .with_target(Arc::new(HeadlessSurface::new(10.0, 10.0))),
    );
    let token = player.cancellation_token();

    let handle = {
        let player = player.clone();
        tokio::spawn(async move { player.play(CAPTURED).await })
    };

    // At 2x the first pause ends at 75ms and the key press lands at 515ms
    tokio::time::sleep(Duration::from_millis(200)).await;
    token.cancel();

    assert_eq!(handle.await.unwrap(), Err(PlaybackError::Cancelled));
    assert!(!sink.calls().contains(&SinkCall::KeyDown(KeyCode::A)));
    assert!(!player.is_playing());
}

/// Test that analysis of a capture finds its clicks
#[test]
fn test_capture_movement_track() {
    let track = MovementTrack::from_session_text(&capture()).unwrap();
    assert_eq!(track.extent, (800.0, 600.0));
    assert!(track.paths.is_empty());
    assert_eq!(track.clicks.len(), 1);
    assert_eq!(track.clicks[0].position, Point::new(5.0, 6.0));
}
