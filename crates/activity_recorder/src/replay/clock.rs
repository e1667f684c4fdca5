//! Step clock for replay timing.
//!
//! Tracks when the previous replay step finished so the delay before the
//! next one can absorb time already spent dispatching. Built on
//! `tokio::time`, so paused test runtimes drive it deterministically.

use std::time::Duration;
use tokio::time::Instant;

/// Clock measuring wall time between replay steps.
#[derive(Debug)]
pub struct StepClock {
    /// Playback speed multiplier (1.0 = normal, 2.0 = 2x speed).
    speed: f64,
    /// Instant the previous step completed.
    last_step: Instant,
}

impl StepClock {
    /// Create a clock whose first step is measured from now.
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            last_step: Instant::now(),
        }
    }

    /// Check that a speed can divide delays.
    pub fn is_valid_speed(speed: f64) -> bool {
        speed.is_finite() && speed > 0.0
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Time since the previous step completed.
    pub fn since_last_step(&self) -> Duration {
        self.last_step.elapsed()
    }

    /// Mark the current step as complete.
    pub fn mark(&mut self) {
        self.last_step = Instant::now();
    }

    /// Delay for a recorded pause, scaled by speed with no compensation.
    pub fn pause_delay(&self, millis: u64) -> Duration {
        self.scaled(millis as f64)
    }

    /// Delay after a dispatched action: one scaled frame interval minus
    /// the time already spent since the previous step.
    pub fn frame_delay(&self, frame_interval_ms: u32) -> Duration {
        self.scaled(f64::from(frame_interval_ms))
            .saturating_sub(self.since_last_step())
    }

    /// Milliseconds divided by speed, rounded to the nanosecond.
    fn scaled(&self, millis: f64) -> Duration {
        Duration::from_nanos((millis * 1_000_000.0 / self.speed).round() as u64)
    }
}
