//! Replay engine for stored sessions.
//!
//! This module provides:
//! - `StepClock` - Step timing scaled by playback speed
//! - `EventSimulator` - Interpret decoded actions as typed input
//! - `Player` - Play a session back onto a surface and input sink
//! - `PlaybackLog` - Diagnostics gathered while playing
//!
//! # Example
//!
//! ```ignore
//! use activity_recorder::replay::{Player, ReplayConfig};
//!
//! let player = Player::new(sink, ReplayConfig::default().with_speed(2.0))
//!     .with_target(surface);
//!
//! let summary = player.play(&session_text).await?;
//! println!("{}", player.log_output());
//! ```

mod clock;
mod log;
mod player;
mod simulator;

pub use clock::StepClock;
pub use log::{LogEntry, LogLevel, LogSubscriber, PlaybackLog};
pub use player::{PlaybackSummary, Player, ReplayConfig, ReplayState};
pub use simulator::{EventSimulator, SimulatedInput};
