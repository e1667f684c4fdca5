//! Typed input values carried by action parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A position relative to the recorded surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Mouse button, stored in the log by its numeric id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    XButton1,
    XButton2,
}

impl MouseButton {
    /// Numeric id written into MouseDown/MouseUp tokens.
    pub const fn id(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
            Self::XButton1 => 3,
            Self::XButton2 => 4,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            3 => Some(Self::XButton1),
            4 => Some(Self::XButton2),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Middle => "Middle",
            Self::Right => "Right",
            Self::XButton1 => "XButton1",
            Self::XButton2 => "XButton2",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error returned when a button id or name is not recognised
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownButton(pub String);

impl fmt::Display for UnknownButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mouse button: {:?}", self.0)
    }
}

impl std::error::Error for UnknownButton {}

impl FromStr for MouseButton {
    type Err = UnknownButton;

    /// Accepts the numeric id or the case-insensitive button name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| UnknownButton(s.to_string()));
        }
        [
            Self::Left,
            Self::Middle,
            Self::Right,
            Self::XButton1,
            Self::XButton2,
        ]
        .into_iter()
        .find(|button| button.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| UnknownButton(s.to_string()))
    }
}

/// Virtual key codes (platform virtual-key numbering)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Alphanumeric keys
    pub const A: KeyCode = KeyCode(0x41);
    pub const Z: KeyCode = KeyCode(0x5A);
    pub const KEY_0: KeyCode = KeyCode(0x30);
    pub const KEY_9: KeyCode = KeyCode(0x39);

    // Special keys
    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const SHIFT: KeyCode = KeyCode(0x10);
    pub const CONTROL: KeyCode = KeyCode(0x11);
    pub const ALT: KeyCode = KeyCode(0x12);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const DELETE: KeyCode = KeyCode(0x2E);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Check if this is a modifier key (shift, control or alt)
    pub const fn is_modifier(self) -> bool {
        matches!(self.0, 0x10..=0x12)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KeyCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(KeyCode)
    }
}
