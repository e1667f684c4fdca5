//! Capability traits for the host environment.
//!
//! The recorder and player never talk to a windowing system directly.
//! Hosts implement [`Surface`] for the element being recorded or replayed
//! on, and [`InputSink`] for whatever injects synthesized input.

use activity_format::{KeyCode, MouseButton};

/// The element whose activity is recorded or replayed.
pub trait Surface: Send + Sync {
    /// Give the surface keyboard focus.
    fn focus(&self) {}

    /// Current size in logical pixels.
    fn size(&self) -> (f64, f64);

    /// Resize the surface.
    fn resize(&self, width: f64, height: f64);

    /// Translate a surface-relative position to screen coordinates.
    fn point_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }
}

/// Injects synthesized pointer and keyboard input.
///
/// Positions passed to the sink are already in screen coordinates.
pub trait InputSink: Send + Sync {
    fn set_cursor_position(&self, x: f64, y: f64);
    fn press_button(&self, button: MouseButton);
    fn release_button(&self, button: MouseButton);
    fn scroll(&self, delta: i32);
    fn key_down(&self, key: KeyCode);
    fn key_up(&self, key: KeyCode);
}
