//! Playback log.
//!
//! Diagnostics produced during replay are kept in memory so hosts can
//! show them after playback, mirrored to `tracing`, and pushed to an
//! optional subscriber as they happen.

use parking_lot::Mutex;
use std::fmt;

/// Severity of a playback log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        })
    }
}

/// A single playback log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Callback notified of every new entry.
pub type LogSubscriber = Box<dyn Fn(&LogEntry) + Send + Sync>;

/// Accumulated playback diagnostics.
#[derive(Default)]
pub struct PlaybackLog {
    entries: Mutex<Vec<LogEntry>>,
    subscriber: Option<LogSubscriber>,
}

impl PlaybackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback notified of each new entry.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&LogEntry) + Send + Sync + 'static,
    {
        self.subscriber = Some(Box::new(subscriber));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(LogLevel::Info, message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.push(LogLevel::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(LogLevel::Error, message.into());
    }

    /// Snapshot of all entries so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// All entries rendered one per line.
    pub fn output(&self) -> String {
        self.entries
            .lock()
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, level: LogLevel, message: String) {
        match level {
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }

        let entry = LogEntry { level, message };
        if let Some(subscriber) = &self.subscriber {
            subscriber(&entry);
        }
        self.entries.lock().push(entry);
    }
}
