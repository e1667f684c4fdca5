//! Session envelope
//!
//! A session is stored as five `;`-separated fields, each introduced by a
//! one-letter tag:
//!
//! ```text
//! f<frame rate>;w<width>;h<height>;c<config>;a<action stream>
//! ```
//!
//! Reading is lenient. Field order is free, unknown tags are ignored, a
//! repeated tag overwrites the earlier one and a numeric field that does
//! not parse keeps its previous value (zero unless set earlier).

use crate::tokenizer::decode_stream;
use crate::{Action, FormatError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FIELD_SEPARATOR: char = ';';

const TAG_FRAME_RATE: char = 'f';
const TAG_WIDTH: char = 'w';
const TAG_HEIGHT: char = 'h';
const TAG_CONFIG: char = 'c';
const TAG_ACTIONS: char = 'a';

/// Capture parameters plus the recorded action stream
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Samples per second cap used while recording. Must be positive.
    pub frame_rate: u32,
    /// Surface width when recording started.
    pub starting_width: f64,
    /// Surface height when recording started.
    pub starting_height: f64,
    /// Opaque host configuration. Never contains `;`.
    pub starting_config: String,
    /// Concatenated action tokens in chronological order.
    pub actions: String,
}

impl Session {
    pub fn new(
        frame_rate: u32,
        starting_width: f64,
        starting_height: f64,
        starting_config: impl Into<String>,
    ) -> Self {
        Self {
            frame_rate,
            starting_width,
            starting_height,
            starting_config: starting_config.into(),
            actions: String::new(),
        }
    }

    /// Minimum gap between throttled samples, in milliseconds.
    ///
    /// Zero when the frame rate is invalid.
    pub fn frame_interval_ms(&self) -> u32 {
        1000u32.checked_div(self.frame_rate).unwrap_or(0)
    }

    /// Check the invariants replay depends on.
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(FormatError::InvalidFrameRate(self.frame_rate));
        }
        Ok(())
    }

    /// Decode the action stream lazily.
    pub fn decode_actions(&self) -> impl Iterator<Item = Action> + '_ {
        decode_stream(&self.actions)
    }

    /// Write the session in its wire form.
    ///
    /// `;` is removed from the config so it cannot break the envelope.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Read a session from its wire form.
    ///
    /// Only blank input is rejected; see the module docs for the lenient
    /// handling of individual fields.
    pub fn deserialize(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(FormatError::EmptySession);
        }

        let mut session = Session::default();
        for segment in text.split(FIELD_SEPARATOR) {
            let segment = segment.trim();
            let mut chars = segment.chars();
            let Some(tag) = chars.next() else {
                continue;
            };
            let value = chars.as_str();

            match tag {
                TAG_FRAME_RATE => {
                    if let Ok(frame_rate) = value.trim().parse() {
                        session.frame_rate = frame_rate;
                    }
                }
                TAG_WIDTH => {
                    if let Ok(width) = value.trim().parse() {
                        session.starting_width = width;
                    }
                }
                TAG_HEIGHT => {
                    if let Ok(height) = value.trim().parse() {
                        session.starting_height = height;
                    }
                }
                TAG_CONFIG => session.starting_config = value.to_string(),
                TAG_ACTIONS => session.actions = value.to_string(),
                _ => {}
            }
        }

        Ok(session)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.starting_config.replace(FIELD_SEPARATOR, "");
        write!(
            f,
            "{TAG_FRAME_RATE}{};{TAG_WIDTH}{};{TAG_HEIGHT}{};{TAG_CONFIG}{};{TAG_ACTIONS}{}",
            self.frame_rate, self.starting_width, self.starting_height, config, self.actions
        )
    }
}

impl FromStr for Session {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::deserialize(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionKind;

    fn sample() -> Session {
        Session {
            frame_rate: 30,
            starting_width: 800.0,
            starting_height: 600.5,
            starting_config: "This is a random number: 42".to_string(),
            actions: "w120m10,20p10,20,0i'hi'r10,20,0".to_string(),
        }
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            sample().serialize(),
            "f30;w800;h600.5;cThis is a random number: 42;aw120m10,20p10,20,0i'hi'r10,20,0"
        );
    }

    #[test]
    fn test_round_trip() {
        let session = sample();
        assert_eq!(Session::deserialize(&session.serialize()), Ok(session));

        let empty = Session::new(1, 0.0, 0.0, "");
        assert_eq!(Session::deserialize(&empty.serialize()), Ok(empty));
    }

    #[test]
    fn test_config_semicolons_stripped() {
        let session = Session::new(10, 1.0, 1.0, "a;b;c");
        let text = session.serialize();
        assert_eq!(text, "f10;w1;h1;cabc;a");
        assert_eq!(Session::deserialize(&text).unwrap().starting_config, "abc");
    }

    #[test]
    fn test_field_order_is_free() {
        let session = Session::deserialize(" aw5 ; h2 ;f60;w3").unwrap();
        assert_eq!(session.frame_rate, 60);
        assert_eq!(session.starting_width, 3.0);
        assert_eq!(session.starting_height, 2.0);
        assert_eq!(session.actions, "w5");
        assert_eq!(session.starting_config, "");
    }

    #[test]
    fn test_lenient_numeric_fields() {
        let session = Session::deserialize("fabc;w12px;h-;zignored;a").unwrap();
        assert_eq!(session.frame_rate, 0);
        assert_eq!(session.starting_width, 0.0);
        assert_eq!(session.starting_height, 0.0);
        assert_eq!(
            session.validate(),
            Err(FormatError::InvalidFrameRate(0))
        );
    }

    #[test]
    fn test_bad_numeric_keeps_earlier_value() {
        let session = Session::deserialize("f24;fnope;w5;w7").unwrap();
        assert_eq!(session.frame_rate, 24);
        assert_eq!(session.starting_width, 7.0);
    }

    #[test]
    fn test_blank_text_rejected() {
        assert_eq!(Session::deserialize(""), Err(FormatError::EmptySession));
        assert_eq!(Session::deserialize(" \n "), Err(FormatError::EmptySession));
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(Session::new(10, 0.0, 0.0, "").frame_interval_ms(), 100);
        assert_eq!(Session::new(30, 0.0, 0.0, "").frame_interval_ms(), 33);
        assert_eq!(Session::default().frame_interval_ms(), 0);
    }

    #[test]
    fn test_decode_actions() {
        let kinds: Vec<ActionKind> = sample().decode_actions().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            [
                ActionKind::Pause,
                ActionKind::MouseMove,
                ActionKind::MouseDown,
                ActionKind::Message,
                ActionKind::MouseUp,
            ]
        );
    }
}
