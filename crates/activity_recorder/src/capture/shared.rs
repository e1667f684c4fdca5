//! Thread-safe recorder handle.

use super::clock::Ticks;
use super::event::{InputEvent, TimestampedEvent};
use super::recorder::{RecordOutcome, Recorder, RecorderState};
use crate::error::RecorderResult;
use crate::surface::Surface;
use activity_format::Session;
use parking_lot::Mutex;
use std::sync::Arc;

/// A [`Recorder`] behind a lock, for hosts whose event callbacks and
/// start/stop controls run on different threads.
///
/// Events for one surface are still expected in timestamp order.
pub struct SharedRecorder {
    inner: Mutex<Recorder>,
}

impl SharedRecorder {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            inner: Mutex::new(recorder),
        }
    }

    /// Wrap a recorder for sharing across threads.
    pub fn shared(recorder: Recorder) -> Arc<Self> {
        Arc::new(Self::new(recorder))
    }

    pub fn attach(&self, target: Arc<dyn Surface>) -> RecorderResult<()> {
        self.inner.lock().attach(target)
    }

    pub fn start(&self, starting_config: &str) -> RecorderResult<()> {
        self.inner.lock().start(starting_config)
    }

    pub fn stop(&self) -> RecorderResult<()> {
        self.inner.lock().stop()
    }

    pub fn state(&self) -> RecorderState {
        self.inner.lock().state()
    }

    pub fn is_recording(&self) -> bool {
        self.inner.lock().is_recording()
    }

    pub fn record(&self, event: &TimestampedEvent) -> RecorderResult<RecordOutcome> {
        self.inner.lock().record(event)
    }

    pub fn record_at(&self, timestamp: Ticks, event: InputEvent) -> RecorderResult<RecordOutcome> {
        self.inner.lock().record_at(timestamp, event)
    }

    pub fn log_message(&self, text: &str) -> RecorderResult<()> {
        self.inner.lock().log_message(text)
    }

    pub fn save(&self) -> String {
        self.inner.lock().save()
    }

    pub fn session(&self) -> Option<Session> {
        self.inner.lock().session()
    }

    /// Run a closure with exclusive access to the recorder.
    pub fn with<R>(&self, f: impl FnOnce(&mut Recorder) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
