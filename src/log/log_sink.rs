use std::sync::{Arc, Mutex};

use crate::log::{level_mask::LevelMask, log_event::LogEvent};

/// A destination for log events.
///
/// Implementors keep their own [`LevelMask`] and perform the side effect in
/// [`handle`](LogSink::handle). Callers go through [`call`](LogSink::call),
/// which applies the mask first.
pub trait LogSink: Send {
    /// Levels this sink listens to.
    fn levels(&self) -> LevelMask;

    /// Replaces the accepted levels. Unknown bits are not rejected.
    fn set_levels(&mut self, levels: LevelMask);

    /// Performs the sink's effect. Failures must not escape.
    fn handle(&mut self, event: &LogEvent);

    /// Hands the event to [`handle`](LogSink::handle) if its level is in the mask.
    #[inline]
    fn call(&mut self, event: &LogEvent) {
        if self.levels().accepts(event.level()) {
            self.handle(event);
        }
    }
}

/// Sink handle as stored by the registry and held by callers.
pub type SharedSink = Arc<Mutex<dyn LogSink>>;

/// Wraps a sink so it can be registered while the caller keeps typed access.
///
/// ```rust
/// use boomlog::{ArchiveSink, SharedSink, SinkRegistry, shared};
///
/// let archive = shared(ArchiveSink::new());
/// let registry = SinkRegistry::new();
/// let handle: SharedSink = archive.clone();
/// registry.add("archive", handle);
/// ```
pub fn shared<S: LogSink + 'static>(sink: S) -> Arc<Mutex<S>> {
    Arc::new(Mutex::new(sink))
}
