use crate::log::{level_mask::LevelMask, log_event::LogEvent, log_sink::LogSink};

/// Sink that accepts events and drops them.
#[derive(Debug, Clone)]
pub struct NoopLogSink {
    levels: LevelMask,
}

impl NoopLogSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: LevelMask::ALL,
        }
    }
}

impl Default for NoopLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for NoopLogSink {
    fn levels(&self) -> LevelMask {
        self.levels
    }

    fn set_levels(&mut self, levels: LevelMask) {
        self.levels = levels;
    }

    #[inline]
    fn handle(&mut self, _event: &LogEvent) {}
}
