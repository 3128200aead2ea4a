//! Leveled logging macros with `format!` arguments.
//!
//! `logger_*!` take an explicit [`Logger`](crate::Logger) as first argument;
//! `log_*!` go through [`Logger::global`](crate::Logger::global).
//! Every macro records `module_path!()` as the event source.
//!
//! Debug suppression happens at runtime inside the logger, so the debug
//! macros are never compiled out.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log_with($lvl, &__msg, module_path!(), "");
    }};
}

#[macro_export]
macro_rules! global_log {
    ($lvl:expr, $($arg:tt)*) => {
        $crate::logger_log!($crate::Logger::global(), $lvl, $($arg)*)
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS
// ============================================================================

#[macro_export]
macro_rules! logger_debug    { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Debug, $($arg)*) } }
#[macro_export]
macro_rules! logger_info     { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Info, $($arg)*) } }
#[macro_export]
macro_rules! logger_warning  { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Warning, $($arg)*) } }
#[macro_export]
macro_rules! logger_error    { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Error, $($arg)*) } }
#[macro_export]
macro_rules! logger_critical { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::LogLevel::Critical, $($arg)*) } }

#[macro_export]
macro_rules! log_debug    { ($($arg:tt)*) => { $crate::global_log!($crate::LogLevel::Debug, $($arg)*) } }
#[macro_export]
macro_rules! log_info     { ($($arg:tt)*) => { $crate::global_log!($crate::LogLevel::Info, $($arg)*) } }
#[macro_export]
macro_rules! log_warning  { ($($arg:tt)*) => { $crate::global_log!($crate::LogLevel::Warning, $($arg)*) } }
#[macro_export]
macro_rules! log_error    { ($($arg:tt)*) => { $crate::global_log!($crate::LogLevel::Error, $($arg)*) } }
#[macro_export]
macro_rules! log_critical { ($($arg:tt)*) => { $crate::global_log!($crate::LogLevel::Critical, $($arg)*) } }
