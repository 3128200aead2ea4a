use crate::log::{level_mask::LevelMask, log_event::LogEvent, log_sink::LogSink};

/// Keeps a copy of every accepted event in memory.
#[derive(Debug, Clone)]
pub struct ArchiveSink {
    levels: LevelMask,
    events: Vec<LogEvent>,
}

impl ArchiveSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: LevelMask::ALL,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: LevelMask) -> Self {
        self.levels = levels;
        self
    }

    #[must_use]
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// Most recently stored event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&LogEvent> {
        self.events.last()
    }

    /// Removes and returns everything stored so far.
    pub fn take(&mut self) -> Vec<LogEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for ArchiveSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ArchiveSink {
    fn levels(&self) -> LevelMask {
        self.levels
    }

    fn set_levels(&mut self, levels: LevelMask) {
        self.levels = levels;
    }

    fn handle(&mut self, event: &LogEvent) {
        self.events.push(event.clone());
    }
}
