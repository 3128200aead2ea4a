use std::io::{self, Write};

use crate::log::{level_mask::LevelMask, log_event::LogEvent, log_sink::LogSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Prints each accepted event on its own line.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    levels: LevelMask,
    target: ConsoleTarget,
}

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: LevelMask::ALL,
            target: ConsoleTarget::Stdout,
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: LevelMask) -> Self {
        self.levels = levels;
        self
    }

    #[must_use]
    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn levels(&self) -> LevelMask {
        self.levels
    }

    fn set_levels(&mut self, levels: LevelMask) {
        self.levels = levels;
    }

    fn handle(&mut self, event: &LogEvent) {
        // A closed console is not the caller's problem.
        let _ = match self.target {
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{event}"),
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{event}"),
        };
    }
}
