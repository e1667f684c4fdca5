//! Recorder and player error types

use activity_format::FormatError;
use thiserror::Error;

/// Capture errors. None of them change recorder state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecorderError {
    /// `start` called while a recording is running
    #[error("Recording already in progress")]
    AlreadyRecording,

    /// Operation needs a running recording
    #[error("Not recording")]
    NotRecording,

    /// No surface attached to record from
    #[error("No target surface attached")]
    NoTarget,

    /// Starting config would break the session envelope
    #[error("Starting config must not contain ';': {0:?}")]
    InvalidConfig(String),

    /// Logged messages must not contain `;` or `'`
    #[error("Message must not contain ';' or quotes: {0:?}")]
    InvalidMessage(String),

    /// Frame rate is used as a divisor
    #[error("Invalid frame rate: {0} (must be greater than zero)")]
    InvalidFrameRate(u32),
}

/// Playback errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// `play` called while the player is already running
    #[error("Playback already in progress")]
    AlreadyPlaying,

    /// No surface attached to play on
    #[error("No target surface attached")]
    NoTarget,

    /// Speed must be finite and positive
    #[error("Invalid playback speed: {0}")]
    InvalidSpeed(f64),

    /// Session text could not be used
    #[error("Invalid session: {0}")]
    Format(#[from] FormatError),

    /// Cancellation was requested between steps
    #[error("Playback cancelled")]
    Cancelled,
}

/// Result type for capture operations
pub type RecorderResult<T> = std::result::Result<T, RecorderError>;

/// Result type for playback operations
pub type PlaybackResult<T> = std::result::Result<T, PlaybackError>;
