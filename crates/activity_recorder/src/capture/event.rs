//! Raw input events delivered to the recorder.

use super::clock::Ticks;
use activity_format::{Action, KeyCode, MouseButton};

/// An input event as delivered by the host surface.
///
/// Positions are relative to the recorded surface.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    MouseMove { x: f64, y: f64 },
    MouseDown { x: f64, y: f64, button: MouseButton },
    MouseUp { x: f64, y: f64, button: MouseButton },
    MouseWheel { x: f64, y: f64, delta: i32 },
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    Resize { width: f64, height: f64 },
}

impl InputEvent {
    /// Events dropped outright when they arrive inside one frame interval.
    pub fn is_throttled(&self) -> bool {
        matches!(self, Self::MouseMove { .. })
    }

    /// Events merged into the previous token when they arrive inside one
    /// frame interval.
    pub fn is_debounced(&self) -> bool {
        matches!(self, Self::MouseWheel { .. } | Self::Resize { .. })
    }

    /// The action this event is recorded as.
    pub fn to_action(&self) -> Action {
        match *self {
            Self::MouseMove { x, y } => Action::mouse_move(x, y),
            Self::MouseDown { x, y, button } => Action::mouse_down(x, y, button),
            Self::MouseUp { x, y, button } => Action::mouse_up(x, y, button),
            Self::MouseWheel { x, y, delta } => Action::mouse_wheel(x, y, delta),
            Self::KeyDown { key } => Action::key_down(key),
            Self::KeyUp { key } => Action::key_up(key),
            Self::Resize { width, height } => Action::resize(width, height),
        }
    }
}

/// An input event with the counter value at which it happened.
#[derive(Clone, Debug, PartialEq)]
pub struct TimestampedEvent {
    pub timestamp: Ticks,
    pub event: InputEvent,
}

impl TimestampedEvent {
    pub fn new(timestamp: Ticks, event: InputEvent) -> Self {
        Self { timestamp, event }
    }
}
