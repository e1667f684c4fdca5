//! Tag registry
//!
//! Every action variant is identified by a single letter. The tokenizer
//! relies on tags being letters: a new token starts wherever a letter
//! follows the previous token.

use serde::{Deserialize, Serialize};

/// Action variant, selected by a one-character tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Unknown,
    Message,
    Pause,
    Resize,
    MouseMove,
    MouseDown,
    MouseUp,
    MouseWheel,
    KeyDown,
    KeyUp,
}

/// Explicit tag table. Lookups that miss fall back to [`ActionKind::Unknown`].
const REGISTRY: [(char, ActionKind); 10] = [
    ('x', ActionKind::Unknown),
    ('i', ActionKind::Message),
    ('w', ActionKind::Pause),
    ('c', ActionKind::Resize),
    ('m', ActionKind::MouseMove),
    ('p', ActionKind::MouseDown),
    ('r', ActionKind::MouseUp),
    ('s', ActionKind::MouseWheel),
    ('d', ActionKind::KeyDown),
    ('u', ActionKind::KeyUp),
];

impl ActionKind {
    /// All variants in registry order.
    pub const ALL: [ActionKind; 10] = [
        ActionKind::Unknown,
        ActionKind::Message,
        ActionKind::Pause,
        ActionKind::Resize,
        ActionKind::MouseMove,
        ActionKind::MouseDown,
        ActionKind::MouseUp,
        ActionKind::MouseWheel,
        ActionKind::KeyDown,
        ActionKind::KeyUp,
    ];

    /// The tag character for this variant.
    pub fn tag(self) -> char {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(tag, _)| *tag)
            .unwrap_or('x')
    }

    /// Look up a tag. Returns `None` for characters outside the registry.
    pub fn from_tag(tag: char) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, kind)| *kind)
    }

    /// Number of parameters the variant carries when well formed.
    pub const fn arity(self) -> usize {
        match self {
            Self::Unknown | Self::Message | Self::Pause | Self::KeyDown | Self::KeyUp => 1,
            Self::Resize | Self::MouseMove => 2,
            Self::MouseDown | Self::MouseUp | Self::MouseWheel => 3,
        }
    }

    /// Human readable name, used in logs and CLI listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Message => "message",
            Self::Pause => "pause",
            Self::Resize => "resize",
            Self::MouseMove => "mouse_move",
            Self::MouseDown => "mouse_down",
            Self::MouseUp => "mouse_up",
            Self::MouseWheel => "mouse_wheel",
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_tags_are_unique_letters() {
        let mut seen = Vec::new();
        for kind in ActionKind::ALL {
            let tag = kind.tag();
            assert!(tag.is_alphabetic(), "{tag} is not a letter");
            assert!(!seen.contains(&tag), "{tag} registered twice");
            seen.push(tag);
        }
    }

    #[test]
    fn test_unregistered_tag() {
        assert_eq!(ActionKind::from_tag('q'), None);
        assert_eq!(ActionKind::from_tag('7'), None);
        assert_eq!(ActionKind::from_tag('M'), None);
    }
}
