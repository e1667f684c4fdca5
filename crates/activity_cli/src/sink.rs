//! Input sink that reports injections through `tracing`.

use activity_format::{KeyCode, MouseButton};
use activity_recorder::InputSink;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Logs every injected input instead of sending it to a device.
#[derive(Default)]
pub struct TracingSink {
    injected: AtomicUsize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls received.
    pub fn injected(&self) -> usize {
        self.injected.load(Ordering::Relaxed)
    }

    fn count(&self) {
        self.injected.fetch_add(1, Ordering::Relaxed);
    }
}

impl InputSink for TracingSink {
    fn set_cursor_position(&self, x: f64, y: f64) {
        self.count();
        tracing::info!(x, y, "cursor");
    }

    fn press_button(&self, button: MouseButton) {
        self.count();
        tracing::info!(button = button.name(), "press");
    }

    fn release_button(&self, button: MouseButton) {
        self.count();
        tracing::info!(button = button.name(), "release");
    }

    fn scroll(&self, delta: i32) {
        self.count();
        tracing::info!(delta, "scroll");
    }

    fn key_down(&self, key: KeyCode) {
        self.count();
        tracing::info!(key = key.0, "key down");
    }

    fn key_up(&self, key: KeyCode) {
        self.count();
        tracing::info!(key = key.0, "key up");
    }
}
