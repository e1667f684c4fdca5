//! Temporal recorder.
//!
//! Consumes timestamped input events and appends actions to the current
//! session, so that replaying the log reproduces the original cadence:
//!
//! - gaps longer than one frame interval become a Pause for the excess;
//! - pointer motion inside one frame interval is dropped;
//! - a wheel event at the same position, or a resize, inside one frame
//!   interval replaces the token just written (wheel deltas are summed);
//! - button, key and message events are never dropped.
//!
//! Event delivery for one recorder must be sequential. The recorder takes
//! `&mut self` and does no locking of its own; use
//! [`SharedRecorder`](super::SharedRecorder) when events arrive from more
//! than one thread.

use super::clock::{elapsed_between, SystemTicks, TickSource, Ticks};
use super::event::{InputEvent, TimestampedEvent};
use crate::error::{RecorderError, RecorderResult};
use crate::surface::Surface;
use activity_format::{Action, ActionKind, Session};
use std::sync::Arc;

/// Frame rate used when none is configured.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Configuration for the recorder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Maximum throttled samples per second.
    pub frame_rate: u32,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl RecorderConfig {
    pub fn new(frame_rate: u32) -> Self {
        Self { frame_rate }
    }

    /// Set the frame rate.
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }
}

/// Lifecycle of a recorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderState {
    /// Never started.
    Idle,
    /// Accepting events.
    Recording,
    /// Stopped; the last session is frozen and can be saved.
    Stopped,
}

/// What happened to a delivered event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new action was appended (possibly preceded by a Pause).
    Appended,
    /// The previous action was replaced by a merged one.
    Coalesced,
    /// Dropped by the frame-rate throttle.
    Throttled,
}

/// Records input events into a session.
pub struct Recorder {
    config: RecorderConfig,
    ticks: Arc<dyn TickSource>,
    target: Option<Arc<dyn Surface>>,
    state: RecorderState,
    session: Option<Session>,
    actions: Vec<Action>,
    last_action_time: Ticks,
}

impl Recorder {
    /// Create a recorder timed by the system monotonic clock.
    pub fn new(config: RecorderConfig) -> Self {
        Self::with_ticks(config, Arc::new(SystemTicks::new()))
    }

    /// Create a recorder timed by the given tick source.
    pub fn with_ticks(config: RecorderConfig, ticks: Arc<dyn TickSource>) -> Self {
        Self {
            config,
            ticks,
            target: None,
            state: RecorderState::Idle,
            session: None,
            actions: Vec::new(),
            last_action_time: 0,
        }
    }

    /// Attach the surface to record. Not allowed while recording.
    pub fn attach(&mut self, target: Arc<dyn Surface>) -> RecorderResult<()> {
        if self.is_recording() {
            return Err(RecorderError::AlreadyRecording);
        }
        self.target = Some(target);
        Ok(())
    }

    /// Detach the current surface. Not allowed while recording.
    pub fn detach(&mut self) -> RecorderResult<Option<Arc<dyn Surface>>> {
        if self.is_recording() {
            return Err(RecorderError::AlreadyRecording);
        }
        Ok(self.target.take())
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    /// Change the frame rate used by the next recording.
    pub fn set_frame_rate(&mut self, frame_rate: u32) -> RecorderResult<()> {
        if frame_rate == 0 {
            return Err(RecorderError::InvalidFrameRate(frame_rate));
        }
        if self.is_recording() {
            return Err(RecorderError::AlreadyRecording);
        }
        self.config.frame_rate = frame_rate;
        Ok(())
    }

    /// Counter value of the last emitted action (or of `start`).
    pub fn last_action_time(&self) -> Ticks {
        self.last_action_time
    }

    /// Actions recorded so far in the current session.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Start a fresh session.
    ///
    /// `starting_config` is stored verbatim and handed back to the player
    /// before replay. It must not contain `;`.
    pub fn start(&mut self, starting_config: &str) -> RecorderResult<()> {
        if self.is_recording() {
            return Err(RecorderError::AlreadyRecording);
        }
        let target = self.target.as_ref().ok_or(RecorderError::NoTarget)?;
        if starting_config.contains(';') {
            return Err(RecorderError::InvalidConfig(starting_config.to_string()));
        }
        if self.config.frame_rate == 0 {
            return Err(RecorderError::InvalidFrameRate(self.config.frame_rate));
        }

        target.focus();
        let (width, height) = target.size();

        self.session = Some(Session::new(
            self.config.frame_rate,
            width,
            height,
            starting_config,
        ));
        self.actions.clear();
        self.last_action_time = self.ticks.now();
        self.state = RecorderState::Recording;

        tracing::info!(
            frame_rate = self.config.frame_rate,
            width,
            height,
            "Recording started"
        );
        Ok(())
    }

    /// Stop recording and freeze the session.
    pub fn stop(&mut self) -> RecorderResult<()> {
        if !self.is_recording() {
            return Err(RecorderError::NotRecording);
        }
        self.state = RecorderState::Stopped;
        tracing::info!(actions = self.actions.len(), "Recording stopped");
        Ok(())
    }

    /// Append a free-text note to the log.
    ///
    /// Messages skip throttling, coalescing and pause bookkeeping.
    pub fn log_message(&mut self, text: &str) -> RecorderResult<()> {
        if text.contains(';') || text.contains('\'') {
            return Err(RecorderError::InvalidMessage(text.to_string()));
        }
        if !self.is_recording() {
            return Err(RecorderError::NotRecording);
        }
        self.actions.push(Action::message(text));
        Ok(())
    }

    /// Record an event stamped with the given counter value.
    pub fn record_at(&mut self, timestamp: Ticks, event: InputEvent) -> RecorderResult<RecordOutcome> {
        self.record(&TimestampedEvent::new(timestamp, event))
    }

    /// Record a timestamped event.
    pub fn record(&mut self, event: &TimestampedEvent) -> RecorderResult<RecordOutcome> {
        if !self.is_recording() {
            return Err(RecorderError::NotRecording);
        }

        let now = event.timestamp;
        let elapsed = elapsed_between(now, self.last_action_time);
        let within_frame = elapsed < self.frame_interval();

        if within_frame && event.event.is_throttled() {
            tracing::trace!(elapsed, "Throttled {:?}", event.event);
            return Ok(RecordOutcome::Throttled);
        }

        if within_frame {
            if let Some(merged) = self.coalesce(&event.event) {
                self.actions.pop();
                tracing::trace!(token = %merged, "Coalesced with previous action");
                self.emit(now, elapsed, merged);
                return Ok(RecordOutcome::Coalesced);
            }
        }

        self.emit(now, elapsed, event.event.to_action());
        Ok(RecordOutcome::Appended)
    }

    /// Serialized session text, or an empty string if nothing was started.
    pub fn save(&self) -> String {
        self.session().map(|s| s.serialize()).unwrap_or_default()
    }

    /// The current session with its action stream materialized.
    pub fn session(&self) -> Option<Session> {
        self.session.as_ref().map(|session| Session {
            actions: self.actions.iter().map(Action::encode).collect(),
            ..session.clone()
        })
    }

    fn frame_interval(&self) -> u32 {
        1000u32.checked_div(self.config.frame_rate).unwrap_or(0)
    }

    /// Build the replacement for the previous action, if `event` merges
    /// into it.
    fn coalesce(&self, event: &InputEvent) -> Option<Action> {
        let previous = self.actions.last()?;
        match *event {
            InputEvent::Resize { width, height } if previous.kind() == ActionKind::Resize => {
                Some(Action::resize(width, height))
            }
            InputEvent::MouseWheel { x, y, delta } if previous.kind() == ActionKind::MouseWheel => {
                let same_position = previous.parse_param::<f64>(0).ok() == Some(x)
                    && previous.parse_param::<f64>(1).ok() == Some(y);
                let previous_delta = previous.parse_param::<i32>(2).ok()?;
                same_position.then(|| Action::mouse_wheel(x, y, previous_delta.saturating_add(delta)))
            }
            _ => None,
        }
    }

    /// Append `action`, preceded by a Pause for any time beyond one frame.
    fn emit(&mut self, now: Ticks, elapsed: u32, action: Action) {
        let excess = elapsed.saturating_sub(self.frame_interval());
        if excess > 0 {
            self.actions.push(Action::pause(excess));
        }
        tracing::debug!(token = %action, elapsed, "Recorded action");
        self.actions.push(action);
        self.last_action_time = now;
    }
}
