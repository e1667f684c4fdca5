//! Activity Log Format
//!
//! This crate provides the text format used to store recorded user activity:
//!
//! - **Tag Registry**: one letter per action variant
//! - **Action Codec**: typed actions to and from their textual tokens
//! - **Tokenizer**: splits an undelimited token stream into raw tokens
//! - **Session Codec**: the `f…;w…;h…;c…;a…` envelope around a token stream
//!
//! # Example
//!
//! ```rust
//! use activity_format::{Action, ActionKind, Session};
//!
//! let mut session = Session::new(30, 800.0, 600.0, "theme=dark");
//! session.actions = [Action::pause(120), Action::mouse_move(10.0, 20.5)]
//!     .iter()
//!     .map(Action::encode)
//!     .collect();
//!
//! let text = session.serialize();
//! assert_eq!(text, "f30;w800;h600;ctheme=dark;aw120m10,20.5");
//!
//! let restored = Session::deserialize(&text).unwrap();
//! let kinds: Vec<_> = restored.decode_actions().map(|a| a.kind()).collect();
//! assert_eq!(kinds, [ActionKind::Pause, ActionKind::MouseMove]);
//! ```

pub mod action;
pub mod error;
pub mod input;
pub mod session;
pub mod tag;
pub mod tokenizer;

pub use action::{Action, Params};
pub use error::{FormatError, Result};
pub use input::{KeyCode, MouseButton, Point};
pub use session::Session;
pub use tag::ActionKind;
pub use tokenizer::{decode_stream, tokenize, Tokenizer};
