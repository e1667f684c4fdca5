//! Monotonic millisecond tick sources for capture.
//!
//! Input events carry timestamps from a fixed-width millisecond counter
//! that wraps on overflow. Elapsed time is always computed with
//! [`elapsed_between`], which stays correct across one wrap.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Milliseconds on a wrapping 32-bit counter.
pub type Ticks = u32;

/// Source of the current counter value.
pub trait TickSource: Send + Sync {
    fn now(&self) -> Ticks;
}

/// Milliseconds elapsed from `last` to `now`.
///
/// When `now < last` the counter wrapped past `Ticks::MAX`; the result is
/// the distance across the boundary (`MAX - last + now - MIN + 1`).
pub fn elapsed_between(now: Ticks, last: Ticks) -> u32 {
    now.wrapping_sub(last)
}

/// Counter driven by the process monotonic clock.
#[derive(Debug)]
pub struct SystemTicks {
    origin: Instant,
}

impl SystemTicks {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemTicks {
    fn now(&self) -> Ticks {
        // Truncation is the wrap.
        self.origin.elapsed().as_millis() as Ticks
    }
}

/// Counter set by hand, for hosts that bring their own timestamps and for
/// tests.
#[derive(Debug, Default)]
pub struct ManualTicks {
    now: AtomicU32,
}

impl ManualTicks {
    pub fn new(start: Ticks) -> Self {
        Self {
            now: AtomicU32::new(start),
        }
    }

    pub fn set(&self, ticks: Ticks) {
        self.now.store(ticks, Ordering::Release);
    }

    /// Advance by `millis`, wrapping like the real counter.
    pub fn advance(&self, millis: u32) -> Ticks {
        self.now
            .fetch_add(millis, Ordering::AcqRel)
            .wrapping_add(millis)
    }
}

impl TickSource for ManualTicks {
    fn now(&self) -> Ticks {
        self.now.load(Ordering::Acquire)
    }
}
