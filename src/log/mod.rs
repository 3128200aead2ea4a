pub mod archive_sink;
pub mod console_sink;
pub mod level_mask;
pub mod log_bridge;
pub mod log_error;
pub mod log_event;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub mod sink_registry;
pub mod text_file_sink;
pub use noop_log_sink::NoopLogSink;
