use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::log::{level_mask::LevelMask, log_event::LogEvent, log_sink::LogSink};

/// Filename used by the default file sink.
pub const DEFAULT_LOG_FILENAME: &str = "log.txt";

/// Appends each accepted event, one line per event, to a text file.
///
/// The file is opened in append mode for every event, so the path can be
/// changed between writes and nothing is held open between dispatches.
/// I/O failures never reach the caller of `log`; they are counted and the
/// most recent one is kept for inspection.
#[derive(Debug)]
pub struct TextFileSink {
    levels: LevelMask,
    path: PathBuf,
    failures: u64,
    last_error: Option<io::Error>,
}

impl TextFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            levels: LevelMask::ALL,
            path: path.as_ref().to_path_buf(),
            failures: 0,
            last_error: None,
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: LevelMask) -> Self {
        self.levels = levels;
        self
    }

    /// Points the sink at a new file; later events are appended there.
    pub fn set_filename(&mut self, path: impl AsRef<Path>) {
        self.path = path.as_ref().to_path_buf();
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Number of events that could not be written.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&io::Error> {
        self.last_error.as_ref()
    }

    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl Default for TextFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILENAME)
    }
}

impl LogSink for TextFileSink {
    fn levels(&self) -> LevelMask {
        self.levels
    }

    fn set_levels(&mut self, levels: LevelMask) {
        self.levels = levels;
    }

    fn handle(&mut self, event: &LogEvent) {
        if let Err(e) = self.append(&event.to_string()) {
            self.failures = self.failures.wrapping_add(1);
            self.last_error = Some(e);
        }
    }
}
