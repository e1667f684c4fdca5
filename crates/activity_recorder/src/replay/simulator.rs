//! Event simulator for replaying recorded actions.
//!
//! Interprets the raw text parameters of decoded actions as typed input,
//! tracking pointer and button state along the way.

use activity_format::{Action, ActionKind, KeyCode, MouseButton, Point, Result};

/// Interprets decoded actions into typed input.
pub struct EventSimulator {
    /// Currently pressed mouse buttons.
    pressed_buttons: Vec<MouseButton>,
    /// Currently held keys.
    pressed_keys: Vec<KeyCode>,
    /// Last known pointer position.
    mouse_position: Point,
}

impl EventSimulator {
    /// Create a new event simulator.
    pub fn new() -> Self {
        Self {
            pressed_buttons: Vec::new(),
            pressed_keys: Vec::new(),
            mouse_position: Point::new(0.0, 0.0),
        }
    }

    /// Reset the simulator state.
    pub fn reset(&mut self) {
        self.pressed_buttons.clear();
        self.pressed_keys.clear();
        self.mouse_position = Point::new(0.0, 0.0);
    }

    /// Get the last known pointer position.
    pub fn mouse_position(&self) -> Point {
        self.mouse_position
    }

    /// Buttons pressed and not yet released.
    pub fn pressed_buttons(&self) -> &[MouseButton] {
        &self.pressed_buttons
    }

    /// Keys pressed and not yet released.
    pub fn pressed_keys(&self) -> &[KeyCode] {
        &self.pressed_keys
    }

    /// Interpret an action.
    ///
    /// Fails when a parameter is missing or does not parse; state is left
    /// untouched in that case.
    pub fn process(&mut self, action: &Action) -> Result<SimulatedInput> {
        let input = Self::interpret(action)?;
        match input {
            SimulatedInput::MouseMove { position } | SimulatedInput::MouseWheel { position, .. } => {
                self.mouse_position = position;
            }
            SimulatedInput::MouseDown { position, button } => {
                self.mouse_position = position;
                if !self.pressed_buttons.contains(&button) {
                    self.pressed_buttons.push(button);
                }
            }
            SimulatedInput::MouseUp { position, button } => {
                self.mouse_position = position;
                self.pressed_buttons.retain(|&b| b != button);
            }
            SimulatedInput::KeyDown { key } => {
                if !self.pressed_keys.contains(&key) {
                    self.pressed_keys.push(key);
                }
            }
            SimulatedInput::KeyUp { key } => {
                self.pressed_keys.retain(|&k| k != key);
            }
            _ => {}
        }
        Ok(input)
    }

    /// Interpret an action without touching simulator state.
    pub fn interpret(action: &Action) -> Result<SimulatedInput> {
        let position = || -> Result<Point> {
            Ok(Point::new(action.parse_param(0)?, action.parse_param(1)?))
        };

        Ok(match action.kind() {
            ActionKind::Unknown => SimulatedInput::Unknown {
                raw: action.param(0).unwrap_or_default().to_string(),
            },
            ActionKind::Message => SimulatedInput::Message {
                text: action.param(0).unwrap_or_default().to_string(),
            },
            ActionKind::Pause => SimulatedInput::Pause {
                millis: action.parse_param(0)?,
            },
            ActionKind::Resize => SimulatedInput::Resize {
                width: action.parse_param(0)?,
                height: action.parse_param(1)?,
            },
            ActionKind::MouseMove => SimulatedInput::MouseMove {
                position: position()?,
            },
            ActionKind::MouseDown => SimulatedInput::MouseDown {
                position: position()?,
                button: action.parse_param(2)?,
            },
            ActionKind::MouseUp => SimulatedInput::MouseUp {
                position: position()?,
                button: action.parse_param(2)?,
            },
            ActionKind::MouseWheel => SimulatedInput::MouseWheel {
                position: position()?,
                delta: action.parse_param(2)?,
            },
            ActionKind::KeyDown => SimulatedInput::KeyDown {
                key: action.parse_param(0)?,
            },
            ActionKind::KeyUp => SimulatedInput::KeyUp {
                key: action.parse_param(0)?,
            },
        })
    }
}

impl Default for EventSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// A typed replay step.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulatedInput {
    /// Tag outside the registry, kept for diagnostics.
    Unknown { raw: String },
    /// Note written during capture.
    Message { text: String },
    /// Recorded idle time.
    Pause { millis: u64 },
    /// Surface resized.
    Resize { width: f64, height: f64 },
    /// Pointer moved.
    MouseMove { position: Point },
    /// Mouse button pressed.
    MouseDown { position: Point, button: MouseButton },
    /// Mouse button released.
    MouseUp { position: Point, button: MouseButton },
    /// Scroll wheel.
    MouseWheel { position: Point, delta: i32 },
    /// Key pressed.
    KeyDown { key: KeyCode },
    /// Key released.
    KeyUp { key: KeyCode },
}

impl SimulatedInput {
    /// Check if this is a mouse event.
    pub fn is_mouse_event(&self) -> bool {
        matches!(
            self,
            Self::MouseMove { .. }
                | Self::MouseDown { .. }
                | Self::MouseUp { .. }
                | Self::MouseWheel { .. }
        )
    }

    /// Check if this is a keyboard event.
    pub fn is_keyboard_event(&self) -> bool {
        matches!(self, Self::KeyDown { .. } | Self::KeyUp { .. })
    }

    /// Steps that drive the sink or surface and take one frame of time.
    pub fn is_dispatched(&self) -> bool {
        self.is_mouse_event() || self.is_keyboard_event() || matches!(self, Self::Resize { .. })
    }

    /// Get the position if this is a mouse event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::MouseWheel { position, .. } => Some(*position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_format::FormatError;

    #[test]
    fn test_simulator_creation() {
        let sim = EventSimulator::new();
        assert_eq!(sim.mouse_position(), Point::new(0.0, 0.0));
        assert!(sim.pressed_buttons().is_empty());
    }

    #[test]
    fn test_mouse_move_tracking() {
        let mut sim = EventSimulator::new();
        let input = sim.process(&Action::mouse_move(100.0, 200.0)).unwrap();
        assert_eq!(
            input,
            SimulatedInput::MouseMove {
                position: Point::new(100.0, 200.0)
            }
        );
        assert_eq!(sim.mouse_position(), Point::new(100.0, 200.0));
    }

    #[test]
    fn test_button_tracking() {
        let mut sim = EventSimulator::new();
        sim.process(&Action::mouse_down(1.0, 2.0, MouseButton::Right))
            .unwrap();
        assert_eq!(sim.pressed_buttons(), [MouseButton::Right]);
        sim.process(&Action::mouse_up(3.0, 4.0, MouseButton::Right))
            .unwrap();
        assert!(sim.pressed_buttons().is_empty());
        assert_eq!(sim.mouse_position(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_key_tracking() {
        let mut sim = EventSimulator::new();
        sim.process(&Action::key_down(KeyCode::SHIFT)).unwrap();
        sim.process(&Action::key_down(KeyCode::SHIFT)).unwrap();
        assert_eq!(sim.pressed_keys(), [KeyCode::SHIFT]);
        sim.process(&Action::key_up(KeyCode::SHIFT)).unwrap();
        assert!(sim.pressed_keys().is_empty());
    }

    #[test]
    fn test_invalid_parameters_leave_state() {
        let mut sim = EventSimulator::new();
        sim.process(&Action::mouse_move(5.0, 5.0)).unwrap();

        let err = sim.process(&Action::decode("p1,2,Back")).unwrap_err();
        assert!(matches!(err, FormatError::InvalidParameter { index: 2, .. }));
        assert!(matches!(
            sim.process(&Action::decode("m7")),
            Err(FormatError::MissingParameter { index: 1, .. })
        ));
        assert_eq!(sim.mouse_position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_interpret_passive_variants() {
        assert_eq!(
            EventSimulator::interpret(&Action::decode("q1")).unwrap(),
            SimulatedInput::Unknown { raw: "q1".into() }
        );
        assert_eq!(
            EventSimulator::interpret(&Action::message("note")).unwrap(),
            SimulatedInput::Message { text: "note".into() }
        );
        assert_eq!(
            EventSimulator::interpret(&Action::pause(40)).unwrap(),
            SimulatedInput::Pause { millis: 40 }
        );
        assert!(EventSimulator::interpret(&Action::decode("w-5")).is_err());
    }

    #[test]
    fn test_simulated_input_types() {
        let wheel = SimulatedInput::MouseWheel {
            position: Point::new(0.0, 0.0),
            delta: 120,
        };
        assert!(wheel.is_mouse_event());
        assert!(!wheel.is_keyboard_event());
        assert!(wheel.is_dispatched());

        let key = SimulatedInput::KeyDown { key: KeyCode::A };
        assert!(!key.is_mouse_event());
        assert!(key.is_keyboard_event());
        assert_eq!(key.position(), None);

        assert!(SimulatedInput::Resize { width: 1.0, height: 1.0 }.is_dispatched());
        assert!(!SimulatedInput::Pause { millis: 1 }.is_dispatched());
    }
}
