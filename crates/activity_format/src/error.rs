//! Format error types

use crate::ActionKind;
use thiserror::Error;

/// Errors raised while reading sessions or interpreting action parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Session text was empty or whitespace only
    #[error("Session text is empty")]
    EmptySession,

    /// Frame rate is used as a divisor and must be positive
    #[error("Invalid frame rate: {0} (must be greater than zero)")]
    InvalidFrameRate(u32),

    /// An action carried fewer parameters than its variant needs
    #[error("{kind:?} action is missing parameter {index}")]
    MissingParameter { kind: ActionKind, index: usize },

    /// A parameter could not be read as the expected type
    #[error("{kind:?} action has invalid parameter {index}: {value:?}")]
    InvalidParameter {
        kind: ActionKind,
        index: usize,
        value: String,
    },
}

/// Result type for format operations
pub type Result<T> = std::result::Result<T, FormatError>;
