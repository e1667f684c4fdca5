//! Activity Recorder
//!
//! Capture and replay of user activity on an interactive surface:
//!
//! - **Capture**: turns timestamped input events into a compact action log,
//!   throttling pointer motion to the frame rate and coalescing bursts of
//!   wheel and resize events
//! - **Replay**: decodes a stored session and drives an [`InputSink`] with
//!   the original cadence, scaled by a playback speed
//! - **Analysis**: extracts the pointer track of a session without
//!   rendering it
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use activity_recorder::capture::{InputEvent, ManualTicks, Recorder, RecorderConfig};
//! use activity_recorder::testing::HeadlessSurface;
//!
//! let ticks = Arc::new(ManualTicks::new(0));
//! let mut recorder = Recorder::with_ticks(RecorderConfig::new(10), ticks);
//! recorder.attach(Arc::new(HeadlessSurface::new(800.0, 600.0))).unwrap();
//!
//! recorder.start("").unwrap();
//! recorder.record_at(250, InputEvent::MouseMove { x: 5.0, y: 6.0 }).unwrap();
//! recorder.stop().unwrap();
//!
//! assert_eq!(recorder.save(), "f10;w800;h600;c;aw150m5,6");
//! ```

pub mod analysis;
pub mod capture;
pub mod error;
pub mod replay;
pub mod surface;
pub mod testing;

pub use activity_format as format;
pub use analysis::{ClickMark, MovementTrack};
pub use capture::{InputEvent, RecordOutcome, Recorder, RecorderConfig, SharedRecorder};
pub use error::{PlaybackError, RecorderError};
pub use replay::{PlaybackSummary, Player, ReplayConfig};
pub use surface::{InputSink, Surface};
