//! boomlog is a small, simple logging library.
//!
//! A log call becomes a [`LogEvent`] that is timestamped and handed to every
//! sink in a [`SinkRegistry`]. Each sink keeps a [`LevelMask`] and only
//! handles events whose level is in it.
//!
//! For simple usage call one of the crate-level functions:
//!
//! ```rust,no_run
//! boomlog::info("service started");
//! boomlog::warning_with("cache miss", "storage::get", "W12");
//! ```
//!
//! The first call seeds the process-wide registry with a file sink writing
//! `log.txt` and a console sink. Debug events are dropped unless the build
//! shows debug output or [`force_debug`] was called.

/// Loads `[Logging]` settings from INI-style configuration files.
pub mod config;
/// Events, levels, sinks, the registry and the dispatching logger.
pub mod log;

pub use crate::config::{Config, LoggingSettings, build_shows_debug};
pub use crate::log::{
    archive_sink::ArchiveSink,
    console_sink::{ConsoleSink, ConsoleTarget},
    level_mask::LevelMask,
    log_bridge::{LogBridge, init_log_bridge},
    log_error::{LogError, LogResult},
    log_event::LogEvent,
    log_level::LogLevel,
    log_sink::{LogSink, SharedSink, shared},
    logger::Logger,
    noop_log_sink::NoopLogSink,
    sink_registry::{DEFAULT_CONSOLE_SINK, DEFAULT_FILE_SINK, SinkRegistry},
    text_file_sink::{DEFAULT_LOG_FILENAME, TextFileSink},
};

/// Logs `message` at `level` through the process-wide logger.
pub fn log(level: LogLevel, message: &str) {
    Logger::global().log(level, message);
}

/// Logs with an optional source and code; empty strings mean absent.
pub fn log_with(level: LogLevel, message: &str, source: &str, code: &str) {
    Logger::global().log_with(level, message, source, code);
}

/// Only dispatched when debug output is visible.
pub fn debug(message: &str) {
    Logger::global().debug(message);
}

pub fn debug_with(message: &str, source: &str, code: &str) {
    Logger::global().debug_with(message, source, code);
}

pub fn info(message: &str) {
    Logger::global().info(message);
}

pub fn info_with(message: &str, source: &str, code: &str) {
    Logger::global().info_with(message, source, code);
}

pub fn warning(message: &str) {
    Logger::global().warning(message);
}

pub fn warning_with(message: &str, source: &str, code: &str) {
    Logger::global().warning_with(message, source, code);
}

pub fn error(message: &str) {
    Logger::global().error(message);
}

pub fn error_with(message: &str, source: &str, code: &str) {
    Logger::global().error_with(message, source, code);
}

pub fn critical(message: &str) {
    Logger::global().critical(message);
}

pub fn critical_with(message: &str, source: &str, code: &str) {
    Logger::global().critical_with(message, source, code);
}

/// Shows Debug events process-wide even when the build hides them.
pub fn force_debug(show: bool) {
    Logger::global().force_debug(show);
}

/// Registers `sink` in the process-wide registry, returning any sink it replaces.
pub fn add_stream(name: impl Into<String>, sink: SharedSink) -> Option<SharedSink> {
    SinkRegistry::global().add(name, sink)
}

#[must_use]
pub fn get_stream(name: &str) -> Option<SharedSink> {
    SinkRegistry::global().get(name)
}

/// Detaches a sink from the process-wide registry and hands it back.
pub fn remove_stream(name: &str) -> Option<SharedSink> {
    SinkRegistry::global().remove(name)
}
