use ::log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::log::{log_level::LogLevel, logger::Logger};

/// Forwards records from the `log` facade to a [`Logger`].
///
/// The record target becomes the event source. `Trace` and `Debug` both map
/// to [`LogLevel::Debug`], so they obey the logger's debug visibility.
pub struct LogBridge {
    logger: &'static Logger,
}

impl LogBridge {
    #[must_use]
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl From<::log::Level> for LogLevel {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Error => LogLevel::Error,
            ::log::Level::Warn => LogLevel::Warning,
            ::log::Level::Info => LogLevel::Info,
            ::log::Level::Debug | ::log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        LogLevel::from(metadata.level()) != LogLevel::Debug || self.logger.debug_visible()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        self.logger
            .log_with(record.level().into(), &message, record.target(), "");
    }

    fn flush(&self) {}
}

/// Routes the `log` facade into [`Logger::global`].
///
/// # Errors
///
/// Returns [`SetLoggerError`] if another `log` implementation is already installed.
pub fn init_log_bridge() -> Result<(), SetLoggerError> {
    ::log::set_boxed_logger(Box::new(LogBridge::new(Logger::global())))?;
    ::log::set_max_level(LevelFilter::Trace);
    Ok(())
}
