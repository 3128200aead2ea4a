use std::fmt;

use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// Layout of the timestamp in a rendered event, always in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d/%H:%M:%S - ";

/// Represents a single log event.
///
/// Built once per dispatch and never mutated afterwards. Sinks that want to
/// keep it around clone it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    level: LogLevel,
    message: String,
    source: Option<String>,
    code: Option<String>,
    timestamp: DateTime<Local>,
}

impl LogEvent {
    /// Creates a new `LogEvent` stamped with the current local time.
    ///
    /// # Arguments
    ///
    /// * `level` - The severity `LogLevel` of the event.
    /// * `message` - The event description.
    /// * `source` - Where the event came from. Empty means absent.
    /// * `code` - A user-defined code for the event. Empty means absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boomlog::{LogEvent, LogLevel};
    ///
    /// let event = LogEvent::new(LogLevel::Error, "disk full", "storage", "E42");
    /// assert_eq!(event.code(), Some("E42"));
    /// ```
    pub fn new(
        level: LogLevel,
        message: impl Into<String>,
        source: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(level, message, source, code, Local::now())
    }

    /// Same as [`LogEvent::new`] with an explicit timestamp.
    pub fn with_timestamp(
        level: LogLevel,
        message: impl Into<String>,
        source: impl Into<String>,
        code: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            source: non_empty(source.into()),
            code: non_empty(code.into()),
            timestamp,
        }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// `<glyph><YYYY/MM/DD/HH:MM:SS> - [code] message (from source)`
impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.level.glyph(),
            self.timestamp.format(TIMESTAMP_FORMAT)
        )?;
        if let Some(code) = &self.code {
            write!(f, "[{code}] ")?;
        }
        f.write_str(&self.message)?;
        if let Some(source) = &self.source {
            write!(f, " (from {source})")?;
        }
        Ok(())
    }
}
