//! Action codec
//!
//! An action is a tag letter followed by its parameters. Every variant
//! except Message joins its parameters with `,`; Message wraps its single
//! payload in single quotes:
//!
//! ```text
//! w150        Pause(150)
//! m10,20.5    MouseMove(10, 20.5)
//! p10,20,0    MouseDown(10, 20, Left)
//! i'saved'    Message("saved")
//! ```
//!
//! Decoding keeps parameters as raw text. Reading them as numbers or
//! buttons is left to the consumer, see [`Action::parse_param`].

use crate::{ActionKind, FormatError, KeyCode, MouseButton, Result};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

/// Raw parameter list. Three covers every well-formed variant.
pub type Params = SmallVec<[String; 3]>;

const QUOTE: char = '\'';

/// A single recorded action with raw text parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    kind: ActionKind,
    params: Params,
}

impl Action {
    /// Create an action from a variant and its raw parameters.
    pub fn new(kind: ActionKind, params: Params) -> Self {
        Self { kind, params }
    }

    /// An action whose text could not be attributed to any variant.
    pub fn unknown(raw: impl Into<String>) -> Self {
        Self::new(ActionKind::Unknown, smallvec![raw.into()])
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::new(ActionKind::Message, smallvec![text.into()])
    }

    pub fn pause(millis: u32) -> Self {
        Self::new(ActionKind::Pause, smallvec![millis.to_string()])
    }

    pub fn resize(width: f64, height: f64) -> Self {
        Self::new(
            ActionKind::Resize,
            smallvec![width.to_string(), height.to_string()],
        )
    }

    pub fn mouse_move(x: f64, y: f64) -> Self {
        Self::new(ActionKind::MouseMove, smallvec![x.to_string(), y.to_string()])
    }

    pub fn mouse_down(x: f64, y: f64, button: MouseButton) -> Self {
        Self::new(
            ActionKind::MouseDown,
            smallvec![x.to_string(), y.to_string(), button.to_string()],
        )
    }

    pub fn mouse_up(x: f64, y: f64, button: MouseButton) -> Self {
        Self::new(
            ActionKind::MouseUp,
            smallvec![x.to_string(), y.to_string(), button.to_string()],
        )
    }

    pub fn mouse_wheel(x: f64, y: f64, delta: i32) -> Self {
        Self::new(
            ActionKind::MouseWheel,
            smallvec![x.to_string(), y.to_string(), delta.to_string()],
        )
    }

    pub fn key_down(key: KeyCode) -> Self {
        Self::new(ActionKind::KeyDown, smallvec![key.to_string()])
    }

    pub fn key_up(key: KeyCode) -> Self {
        Self::new(ActionKind::KeyUp, smallvec![key.to_string()])
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    pub fn into_params(self) -> Params {
        self.params
    }

    /// Read parameter `index` as `T`, trimming surrounding whitespace.
    pub fn parse_param<T: FromStr>(&self, index: usize) -> Result<T> {
        let raw = self.param(index).ok_or(FormatError::MissingParameter {
            kind: self.kind,
            index,
        })?;
        raw.trim()
            .parse()
            .map_err(|_| FormatError::InvalidParameter {
                kind: self.kind,
                index,
                value: raw.to_string(),
            })
    }

    /// Encode to the textual token form.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode a single token.
    ///
    /// Never fails: a tag outside the registry yields an Unknown action
    /// holding the whole trimmed token.
    pub fn decode(token: &str) -> Self {
        let token = token.trim();
        let mut chars = token.chars();
        let Some(tag) = chars.next() else {
            return Self::unknown(token);
        };
        let rest = chars.as_str();

        match ActionKind::from_tag(tag) {
            None => Self::unknown(token),
            Some(ActionKind::Unknown) => Self::unknown(rest),
            Some(ActionKind::Message) => {
                let body = rest.trim();
                let body = body.strip_prefix(QUOTE).unwrap_or(body);
                let body = body.strip_suffix(QUOTE).unwrap_or(body);
                Self::message(body)
            }
            Some(kind) => Self::new(kind, rest.split(',').map(str::to_owned).collect()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.tag())?;
        if self.kind == ActionKind::Message {
            let text = self.param(0).unwrap_or_default();
            return write!(f, "{QUOTE}{text}{QUOTE}");
        }
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(param)?;
        }
        Ok(())
    }
}

impl FromStr for Action {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::decode(s))
    }
}
