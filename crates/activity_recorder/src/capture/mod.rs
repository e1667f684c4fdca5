//! Capture of live input into a session.
//!
//! This module provides:
//! - `Recorder` - throttles, coalesces and timestamps input into actions
//! - `SharedRecorder` - the same recorder behind a lock
//! - `TickSource` - the wrapping millisecond counter events are stamped with

mod clock;
mod event;
mod recorder;
mod shared;

pub use clock::{elapsed_between, ManualTicks, SystemTicks, TickSource, Ticks};
pub use event::{InputEvent, TimestampedEvent};
pub use recorder::{RecordOutcome, Recorder, RecorderConfig, RecorderState, DEFAULT_FRAME_RATE};
pub use shared::SharedRecorder;
