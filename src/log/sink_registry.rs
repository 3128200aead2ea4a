use std::{
    cell::RefCell,
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    config::{Config, LoggingSettings},
    log::{
        console_sink::ConsoleSink, log_error::LogResult, log_event::LogEvent,
        log_sink::SharedSink, log_sink::shared, logger::Logger, text_file_sink::TextFileSink,
    },
};

/// Name of the file sink seeded into default registries.
pub const DEFAULT_FILE_SINK: &str = "defaultTextFile";
/// Name of the console sink seeded into default registries.
pub const DEFAULT_CONSOLE_SINK: &str = "defaultConsole";

/// Named collection of sinks that every dispatched event is delivered to.
///
/// All operations lock an internal mutex, so a registry can be shared
/// between threads. Names are unique; entries are kept in lexical order.
///
/// # Architecture
///
/// 1. **Lookup**: `get`, `add` and `remove` work on `SharedSink` handles, so
///    the caller and the registry can both hold the same sink.
/// 2. **Dispatch**: [`dispatch`](Self::dispatch) snapshots the handles under
///    the lock, releases it, then calls each sink. A sink may therefore
///    touch the registry from inside `handle` without deadlocking.
/// 3. **Nested events**: an event logged from inside `handle` is delivered
///    to every other sink, but not to the sinks this thread is already
///    handling. Their locks are held further up the stack.
pub struct SinkRegistry {
    streams: Mutex<BTreeMap<String, SharedSink>>,
}

impl SinkRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            streams: Mutex::new(BTreeMap::new()),
        }
    }

    /// Creates a registry holding `defaultTextFile` (writing `log.txt`) and
    /// `defaultConsole`, both listening to every level.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_settings(&LoggingSettings::default())
    }

    /// Creates a registry with the default sinks shaped by `settings`.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let registry = Self::new();
        if settings.file_enabled {
            registry.add(
                DEFAULT_FILE_SINK,
                shared(TextFileSink::new(&settings.log_filename).with_levels(settings.file_levels)),
            );
        }
        if settings.console_enabled {
            registry.add(
                DEFAULT_CONSOLE_SINK,
                shared(ConsoleSink::new().with_levels(settings.console_levels)),
            );
        }
        registry
    }

    /// Reads the `[Logging]` section of `config` and builds the default sinks from it.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::ConfigValue`](crate::LogError::ConfigValue) or
    /// [`LogError::UnknownLevelName`](crate::LogError::UnknownLevelName) when a
    /// value in the section cannot be interpreted.
    pub fn from_config(config: &Config) -> LogResult<Self> {
        Ok(Self::from_settings(&LoggingSettings::from_config(config)?))
    }

    /// Process-wide registry.
    ///
    /// Created and seeded with the default sinks on first access, exactly
    /// once. It lives until the process exits; the default sinks are never
    /// torn down explicitly.
    pub fn global() -> &'static SinkRegistry {
        Logger::global().registry()
    }

    /// Looks up the sink registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SharedSink> {
        self.streams().get(name).cloned()
    }

    /// Registers `sink` under `name`.
    ///
    /// If the name was taken, the previous sink is handed back so the caller
    /// decides whether to drop it or keep using it elsewhere.
    pub fn add(&self, name: impl Into<String>, sink: SharedSink) -> Option<SharedSink> {
        self.streams().insert(name.into(), sink)
    }

    /// Detaches the sink registered under `name` and returns it.
    pub fn remove(&self, name: &str) -> Option<SharedSink> {
        self.streams().remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.streams().contains_key(name)
    }

    /// Registered names in lexical order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.streams().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.streams().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams().is_empty()
    }

    /// Delivers `event` once to every sink registered when the call starts.
    ///
    /// Each sink applies its own level mask. A sink whose lock was poisoned
    /// by an earlier panic is skipped, and so is a sink that is already
    /// handling an event further up this thread's stack.
    pub fn dispatch(&self, event: &LogEvent) {
        let sinks: Vec<SharedSink> = self.streams().values().cloned().collect();
        for sink in sinks {
            let Some(_handling) = Handling::enter(&sink) else {
                continue;
            };
            if let Ok(mut guard) = sink.lock() {
                guard.call(event);
            }
        }
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn streams(&self) -> MutexGuard<'_, BTreeMap<String, SharedSink>> {
        self.streams.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    // Addresses of the sinks whose lock this thread currently holds in dispatch.
    static HANDLING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a sink as busy on the current thread until dropped.
struct Handling(usize);

impl Handling {
    fn enter(sink: &SharedSink) -> Option<Self> {
        let key = Arc::as_ptr(sink).cast::<()>() as usize;
        HANDLING
            .try_with(|busy| {
                let mut busy = busy.borrow_mut();
                if busy.contains(&key) {
                    None
                } else {
                    busy.push(key);
                    Some(Self(key))
                }
            })
            .ok()
            .flatten()
    }
}

impl Drop for Handling {
    fn drop(&mut self) {
        let _ = HANDLING.try_with(|busy| {
            let mut busy = busy.borrow_mut();
            if let Some(pos) = busy.iter().rposition(|key| *key == self.0) {
                busy.remove(pos);
            }
        });
    }
}
