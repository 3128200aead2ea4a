use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    config::{Config, LoggingSettings, build_shows_debug},
    log::{
        log_error::LogResult, log_event::LogEvent, log_level::LogLevel,
        sink_registry::SinkRegistry,
    },
};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Turns log calls into events and hands them to a [`SinkRegistry`].
///
/// Debug events are dropped before an event is even built unless debug
/// output is visible: either the build shows debug (see
/// [`build_shows_debug`]) or [`force_debug`](Self::force_debug) was called
/// with `true`. Every other level is always dispatched; the sinks decide
/// what they keep.
///
/// Logging never fails from the caller's point of view.
pub struct Logger {
    registry: Arc<SinkRegistry>,
    build_debug: bool,
    force_debug: AtomicBool,
}

impl Logger {
    /// Creates a logger over `registry`, taking debug visibility from the build mode.
    #[must_use]
    pub fn new(registry: Arc<SinkRegistry>) -> Self {
        Self {
            registry,
            build_debug: build_shows_debug(),
            force_debug: AtomicBool::new(false),
        }
    }

    /// Overrides the build-mode default for debug visibility.
    #[must_use]
    pub fn with_build_debug(mut self, visible: bool) -> Self {
        self.build_debug = visible;
        self
    }

    /// Builds a registry and logger from the `[Logging]` section of `config`.
    ///
    /// `show_debug = true` in the section behaves like `force_debug(true)`.
    ///
    /// # Errors
    ///
    /// Returns an error when a value in the section cannot be interpreted.
    pub fn from_config(config: &Config) -> LogResult<Self> {
        let settings = LoggingSettings::from_config(config)?;
        let logger = Self::new(Arc::new(SinkRegistry::from_settings(&settings)));
        logger.force_debug(settings.show_debug);
        Ok(logger)
    }

    /// Process-wide logger.
    ///
    /// Its registry is created with the default sinks on first access and is
    /// the one [`SinkRegistry::global`] returns.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(|| Logger::new(Arc::new(SinkRegistry::with_defaults())))
    }

    /// Installs `logger` as the process-wide logger in place of the defaults.
    ///
    /// # Errors
    ///
    /// Hands `logger` back if the global logger was already installed or
    /// already used.
    pub fn init_global(logger: Logger) -> Result<&'static Logger, Logger> {
        GLOBAL.set(logger)?;
        Ok(Self::global())
    }

    #[must_use]
    pub fn registry(&self) -> &SinkRegistry {
        &self.registry
    }

    /// Shows or hides Debug events for later calls, whatever the build mode.
    pub fn force_debug(&self, show: bool) {
        self.force_debug.store(show, Ordering::Relaxed);
    }

    #[must_use]
    pub fn debug_visible(&self) -> bool {
        self.build_debug || self.force_debug.load(Ordering::Relaxed)
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        self.log_with(level, message, "", "");
    }

    /// Creates an event and delivers it to every registered sink.
    ///
    /// # Arguments
    ///
    /// * `level` - Severity of the event.
    /// * `message` - What is to be output.
    /// * `source` - The function or module that caused the event. Empty means none.
    /// * `code` - A user-defined code for the event. Empty means none.
    pub fn log_with(&self, level: LogLevel, message: &str, source: &str, code: &str) {
        if level == LogLevel::Debug && !self.debug_visible() {
            return;
        }
        let event = LogEvent::new(level, message, source, code);
        self.registry.dispatch(&event);
    }

    /// Values being tracked while debugging.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn debug_with(&self, message: &str, source: &str, code: &str) {
        self.log_with(LogLevel::Debug, message, source, code);
    }

    /// Something normal has happened: a load, a connection, an action.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn info_with(&self, message: &str, source: &str, code: &str) {
        self.log_with(LogLevel::Info, message, source, code);
    }

    /// Something unexpected has happened: missing file, invalid input.
    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn warning_with(&self, message: &str, source: &str, code: &str) {
        self.log_with(LogLevel::Warning, message, source, code);
    }

    /// An error that can be handled or caught.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn error_with(&self, message: &str, source: &str, code: &str) {
        self.log_with(LogLevel::Error, message, source, code);
    }

    /// An error that could bring the program down.
    pub fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }

    pub fn critical_with(&self, message: &str, source: &str, code: &str) {
        self.log_with(LogLevel::Critical, message, source, code);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{
        archive_sink::ArchiveSink, level_mask::LevelMask, log_sink::shared,
    };
    use std::sync::Mutex;

    fn isolated(build_debug: bool) -> Logger {
        Logger::new(Arc::new(SinkRegistry::new())).with_build_debug(build_debug)
    }

    fn attach(logger: &Logger, name: &str, levels: LevelMask) -> Arc<Mutex<ArchiveSink>> {
        let sink = shared(ArchiveSink::new().with_levels(levels));
        logger.registry().add(name, sink.clone());
        sink
    }

    fn last_msg(sink: &Arc<Mutex<ArchiveSink>>) -> Option<String> {
        sink.lock()
            .unwrap()
            .last()
            .map(|e| e.message().to_string())
    }

    #[test]
    fn single_level_sink_sees_only_its_level() {
        let logger = isolated(true);
        for level in LogLevel::ALL {
            let only = attach(&logger, "only", level.into());
            let without = attach(&logger, "without", LevelMask::ALL.without(level));

            logger.log(level, "M");

            assert_eq!(last_msg(&only).as_deref(), Some("M"), "{level} sink");
            assert!(last_msg(&without).is_none(), "{level} excluded");
            logger.registry().remove("only");
            logger.registry().remove("without");
        }
    }

    #[test]
    fn filtering_is_membership_not_threshold() {
        let logger = isolated(true);
        let info = attach(&logger, "info", LogLevel::Info.into());
        let warn = attach(&logger, "warn", LogLevel::Warning.into());

        logger.warning("warn_msg");
        assert!(last_msg(&info).is_none());
        assert_eq!(last_msg(&warn).as_deref(), Some("warn_msg"));

        logger.info("info_msg");
        assert_eq!(last_msg(&info).as_deref(), Some("info_msg"));
        assert_eq!(last_msg(&warn).as_deref(), Some("warn_msg"));
    }

    #[test]
    fn wrappers_fix_the_level() {
        let logger = isolated(true);
        let dbg_info = attach(
            &logger,
            "dbg_info",
            LogLevel::Debug | LogLevel::Info | LogLevel::Error,
        );
        let warn_crit = attach(
            &logger,
            "warn_crit",
            LogLevel::Warning | LogLevel::Critical | LogLevel::Error,
        );

        logger.debug("dbg_msg");
        assert_eq!(last_msg(&dbg_info).as_deref(), Some("dbg_msg"));
        assert_ne!(last_msg(&warn_crit).as_deref(), Some("dbg_msg"));

        logger.info("info_msg");
        assert_eq!(last_msg(&dbg_info).as_deref(), Some("info_msg"));
        assert_ne!(last_msg(&warn_crit).as_deref(), Some("info_msg"));

        logger.warning("warn_msg");
        assert_ne!(last_msg(&dbg_info).as_deref(), Some("warn_msg"));
        assert_eq!(last_msg(&warn_crit).as_deref(), Some("warn_msg"));

        logger.critical("crit_msg");
        assert_ne!(last_msg(&dbg_info).as_deref(), Some("crit_msg"));
        assert_eq!(last_msg(&warn_crit).as_deref(), Some("crit_msg"));

        logger.error("err_msg");
        assert_eq!(last_msg(&dbg_info).as_deref(), Some("err_msg"));
        assert_eq!(last_msg(&warn_crit).as_deref(), Some("err_msg"));
    }

    #[test]
    fn source_and_code_reach_the_sink() {
        let logger = isolated(true);
        let sink = attach(&logger, "all", LevelMask::ALL);

        logger.error_with("disk full", "storage::flush", "E42");

        let guard = sink.lock().unwrap();
        let event = guard.last().expect("event delivered");
        assert_eq!(event.level(), LogLevel::Error);
        assert_eq!(event.source(), Some("storage::flush"));
        assert_eq!(event.code(), Some("E42"));
        assert!(event.to_string().ends_with("[E42] disk full (from storage::flush)"));
    }

    #[test]
    fn debug_is_discarded_when_not_visible() {
        let logger = isolated(false);
        let sink = attach(&logger, "all", LevelMask::ALL);

        logger.debug("hidden");
        logger.log_with(LogLevel::Debug, "hidden too", "src", "C");
        assert!(sink.lock().unwrap().events().is_empty());

        logger.info("shown");
        assert_eq!(sink.lock().unwrap().events().len(), 1);
    }

    #[test]
    fn force_debug_is_idempotent_and_reversible() {
        let logger = isolated(false);
        let sink = attach(&logger, "all", LevelMask::ALL);

        logger.force_debug(true);
        logger.force_debug(true);
        assert!(logger.debug_visible());
        logger.debug("visible");
        assert_eq!(last_msg(&sink).as_deref(), Some("visible"));

        logger.force_debug(false);
        logger.debug("hidden again");
        assert_eq!(last_msg(&sink).as_deref(), Some("visible"));
        assert_eq!(sink.lock().unwrap().events().len(), 1);
    }

    #[test]
    fn build_debug_shows_debug_without_forcing() {
        let logger = isolated(true);
        let sink = attach(&logger, "all", LevelMask::ALL);
        logger.force_debug(false);
        logger.debug("build mode");
        assert_eq!(last_msg(&sink).as_deref(), Some("build mode"));
    }

    #[test]
    fn matching_and_non_matching_counts() {
        let logger = isolated(true);
        let sink = attach(&logger, "errors", LogLevel::Error | LogLevel::Critical);

        let n = 7;
        let m = 11;
        for i in 0..n {
            let level = if i % 2 == 0 { LogLevel::Error } else { LogLevel::Critical };
            logger.log(level, "match");
        }
        for i in 0..m {
            let level = [LogLevel::Debug, LogLevel::Info, LogLevel::Warning][i % 3];
            logger.log(level, "miss");
        }

        assert_eq!(sink.lock().unwrap().events().len(), n);
    }

    #[test]
    fn from_config_applies_show_debug() {
        let config = Config::parse(
            "[Logging]\nfile_enabled = false\nconsole_enabled = false\nshow_debug = on\n",
        );
        let logger = Logger::from_config(&config).unwrap().with_build_debug(false);
        assert!(logger.registry().is_empty());
        assert!(logger.debug_visible());
    }
}
