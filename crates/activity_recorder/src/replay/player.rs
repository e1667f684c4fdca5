//! Replay player for stored sessions.
//!
//! Decodes a session, restores the starting surface state and dispatches
//! each action to the input sink, sleeping between steps to reproduce the
//! recorded cadence:
//!
//! - Pause: sleep the stored duration divided by speed;
//! - dispatched actions: sleep one frame interval divided by speed, minus
//!   the time already spent since the previous step;
//! - Message and Unknown: logged only, no delay.
//!
//! Sleeping goes through `tokio::time`, so many players can share one
//! runtime. Cancellation is checked between steps and raced against every
//! sleep.

use super::clock::StepClock;
use super::log::{LogEntry, PlaybackLog};
use super::simulator::{EventSimulator, SimulatedInput};
use crate::error::{PlaybackError, PlaybackResult};
use crate::surface::{InputSink, Surface};
use activity_format::Session;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Configuration for the replay player.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayConfig {
    /// Playback speed multiplier (1.0 = normal).
    pub speed: f64,
    /// Whether to apply the session's starting size to the target.
    pub restore_size: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            restore_size: true,
        }
    }
}

impl ReplayConfig {
    /// Set the playback speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Enable or disable restoring the starting size.
    pub fn with_restore_size(mut self, restore_size: bool) -> Self {
        self.restore_size = restore_size;
        self
    }
}

/// Current state of the replay player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayState {
    /// Not playing.
    Idle,
    /// A `play` call is running.
    Playing,
}

/// Counts gathered over one playback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackSummary {
    /// Actions sent to the sink or surface.
    pub dispatched: usize,
    /// Actions skipped because their parameters did not parse.
    pub skipped: usize,
    /// Actions with an unregistered tag.
    pub unknown: usize,
    /// Messages logged.
    pub messages: usize,
    /// Sum of recorded pauses, before speed scaling.
    pub paused: Duration,
}

/// Replays sessions onto a target surface through an input sink.
pub struct Player {
    target: Option<Arc<dyn Surface>>,
    sink: Arc<dyn InputSink>,
    config: ReplayConfig,
    playing: AtomicBool,
    cancel: Mutex<CancellationToken>,
    log: PlaybackLog,
}

/// Clears the playing flag and spends a used cancellation token.
struct PlayingGuard<'a>(&'a Player);

impl Drop for PlayingGuard<'_> {
    fn drop(&mut self) {
        let mut cancel = self.0.cancel.lock();
        if cancel.is_cancelled() {
            *cancel = CancellationToken::new();
        }
        self.0.playing.store(false, Ordering::Release);
    }
}

impl Player {
    /// Create a player that injects into `sink`. Attach a target before
    /// playing.
    pub fn new(sink: Arc<dyn InputSink>, config: ReplayConfig) -> Self {
        Self {
            target: None,
            sink,
            config,
            playing: AtomicBool::new(false),
            cancel: Mutex::new(CancellationToken::new()),
            log: PlaybackLog::new(),
        }
    }

    /// Set the surface to play on.
    pub fn with_target(mut self, target: Arc<dyn Surface>) -> Self {
        self.target = Some(target);
        self
    }

    /// Replace the target surface.
    pub fn set_target(&mut self, target: Option<Arc<dyn Surface>>) {
        self.target = target;
    }

    /// Set the callback notified of every playback log entry.
    pub fn on_log<F>(&mut self, subscriber: F)
    where
        F: Fn(&LogEntry) + Send + Sync + 'static,
    {
        self.log.subscribe(subscriber);
    }

    pub fn state(&self) -> ReplayState {
        if self.is_playing() {
            ReplayState::Playing
        } else {
            ReplayState::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    pub fn playback_speed(&self) -> f64 {
        self.config.speed
    }

    /// Set the speed used by the next `play` call.
    pub fn set_playback_speed(&mut self, speed: f64) -> PlaybackResult<()> {
        if !StepClock::is_valid_speed(speed) {
            return Err(PlaybackError::InvalidSpeed(speed));
        }
        self.config.speed = speed;
        Ok(())
    }

    /// Entries logged by the most recent playback.
    pub fn log(&self) -> &PlaybackLog {
        &self.log
    }

    /// Entries of the most recent playback rendered one per line.
    pub fn log_output(&self) -> String {
        self.log.output()
    }

    /// Token that cancels the current (or next) playback when triggered.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.lock().clone()
    }

    /// Request cancellation of the running playback.
    ///
    /// Returns `false` when nothing is playing.
    pub fn cancel(&self) -> bool {
        // Checked under the lock the guard takes before clearing the flag.
        let cancel = self.cancel.lock();
        if !self.is_playing() {
            return false;
        }
        cancel.cancel();
        true
    }

    /// Play a serialized session.
    pub async fn play(&self, session_text: &str) -> PlaybackResult<PlaybackSummary> {
        self.run(session_text, None::<fn(&str)>).await
    }

    /// Play a serialized session, handing its starting config to
    /// `on_config` before the first action.
    ///
    /// The callback is skipped when the stored config is blank.
    pub async fn play_with_config<F>(
        &self,
        session_text: &str,
        on_config: F,
    ) -> PlaybackResult<PlaybackSummary>
    where
        F: FnOnce(&str),
    {
        self.run(session_text, Some(on_config)).await
    }

    async fn run<F>(&self, session_text: &str, on_config: Option<F>) -> PlaybackResult<PlaybackSummary>
    where
        F: FnOnce(&str),
    {
        if self
            .playing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PlaybackError::AlreadyPlaying);
        }
        let _guard = PlayingGuard(self);
        self.log.clear();

        let target = self.target.clone().ok_or(PlaybackError::NoTarget)?;
        if !StepClock::is_valid_speed(self.config.speed) {
            return Err(PlaybackError::InvalidSpeed(self.config.speed));
        }
        let session = Session::deserialize(session_text)?;
        session.validate()?;

        let cancel = self.cancellation_token();
        self.log.info(format!(
            "Playback started at {}x ({} fps)",
            self.config.speed, session.frame_rate
        ));

        target.focus();
        if self.config.restore_size {
            target.resize(session.starting_width, session.starting_height);
        }
        if let Some(on_config) = on_config {
            if !session.starting_config.trim().is_empty() {
                on_config(&session.starting_config);
            }
        }

        let mut simulator = EventSimulator::new();
        let mut summary = PlaybackSummary::default();

        let played = self
            .play_actions(&session, target.as_ref(), &cancel, &mut simulator, &mut summary)
            .await;
        if let Err(err) = played {
            self.release_held(target.as_ref(), &mut simulator);
            return Err(err);
        }

        self.log.info(format!(
            "Playback finished: {} dispatched, {} skipped, {} unknown",
            summary.dispatched, summary.skipped, summary.unknown
        ));
        Ok(summary)
    }

    async fn play_actions(
        &self,
        session: &Session,
        target: &dyn Surface,
        cancel: &CancellationToken,
        simulator: &mut EventSimulator,
        summary: &mut PlaybackSummary,
    ) -> PlaybackResult<()> {
        let frame_interval = session.frame_interval_ms();
        let mut clock = StepClock::new(self.config.speed);

        for action in session.decode_actions() {
            if cancel.is_cancelled() {
                return Err(self.cancelled());
            }

            let input = match simulator.process(&action) {
                Ok(input) => input,
                Err(err) => {
                    self.log.warn(format!("Skipped {action}: {err}"));
                    summary.skipped += 1;
                    continue;
                }
            };

            match input {
                SimulatedInput::Unknown { raw } => {
                    self.log.error(format!("Unknown action: {raw}"));
                    summary.unknown += 1;
                }
                SimulatedInput::Message { text } => {
                    self.log.info(format!("Message: {text}"));
                    summary.messages += 1;
                }
                SimulatedInput::Pause { millis } => {
                    self.sleep(cancel, clock.pause_delay(millis)).await?;
                    summary.paused = summary.paused.saturating_add(Duration::from_millis(millis));
                    clock.mark();
                }
                input if input.is_dispatched() => {
                    self.dispatch(target, &input);
                    summary.dispatched += 1;
                    self.sleep(cancel, clock.frame_delay(frame_interval)).await?;
                    clock.mark();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Send one typed step to the sink or surface.
    fn dispatch(&self, target: &dyn Surface, input: &SimulatedInput) {
        tracing::trace!(?input, "Dispatching");
        if let Some(position) = input.position() {
            let (x, y) = target.point_to_screen(position.x, position.y);
            self.sink.set_cursor_position(x, y);
        }
        match *input {
            SimulatedInput::MouseDown { button, .. } => self.sink.press_button(button),
            SimulatedInput::MouseUp { button, .. } => self.sink.release_button(button),
            SimulatedInput::MouseWheel { delta, .. } => self.sink.scroll(delta),
            SimulatedInput::KeyDown { key } => self.sink.key_down(key),
            SimulatedInput::KeyUp { key } => self.sink.key_up(key),
            SimulatedInput::Resize { width, height } => target.resize(width, height),
            _ => {}
        }
    }

    /// Release buttons and keys a stopped playback left pressed.
    fn release_held(&self, target: &dyn Surface, simulator: &mut EventSimulator) {
        let held = simulator.pressed_buttons().len() + simulator.pressed_keys().len();
        if held == 0 {
            return;
        }
        if !simulator.pressed_buttons().is_empty() {
            let position = simulator.mouse_position();
            let (x, y) = target.point_to_screen(position.x, position.y);
            self.sink.set_cursor_position(x, y);
        }
        for &button in simulator.pressed_buttons() {
            self.sink.release_button(button);
        }
        for &key in simulator.pressed_keys() {
            self.sink.key_up(key);
        }
        simulator.reset();
        self.log.info(format!("Released {held} held inputs"));
    }

    /// Sleep unless cancelled first.
    async fn sleep(&self, cancel: &CancellationToken, delay: Duration) -> PlaybackResult<()> {
        if delay.is_zero() {
            return Ok(());
        }
        tokio::select! {
            _ = cancel.cancelled() => Err(self.cancelled()),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }

    fn cancelled(&self) -> PlaybackError {
        self.log.info("Playback cancelled");
        PlaybackError::Cancelled
    }
}
