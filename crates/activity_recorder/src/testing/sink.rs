//! Input sink that records calls instead of injecting them.

use crate::surface::InputSink;
use activity_format::{KeyCode, MouseButton};
use parking_lot::Mutex;

/// One call received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCall {
    CursorPosition(f64, f64),
    Press(MouseButton),
    Release(MouseButton),
    Scroll(i32),
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

/// Sink that keeps every call in order.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn push(&self, call: SinkCall) {
        self.calls.lock().push(call);
    }
}

impl InputSink for RecordingSink {
    fn set_cursor_position(&self, x: f64, y: f64) {
        self.push(SinkCall::CursorPosition(x, y));
    }

    fn press_button(&self, button: MouseButton) {
        self.push(SinkCall::Press(button));
    }

    fn release_button(&self, button: MouseButton) {
        self.push(SinkCall::Release(button));
    }

    fn scroll(&self, delta: i32) {
        self.push(SinkCall::Scroll(delta));
    }

    fn key_down(&self, key: KeyCode) {
        self.push(SinkCall::KeyDown(key));
    }

    fn key_up(&self, key: KeyCode) {
        self.push(SinkCall::KeyUp(key));
    }
}
