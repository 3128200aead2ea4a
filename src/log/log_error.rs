use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced while building levels, masks or configuration.
///
/// Dispatching an event never produces one of these; sink I/O failures stay
/// inside the sink that hit them.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("invalid level bits: {0:#07b} (expected exactly one defined level)")]
    InvalidLevel(u8),

    #[error("unknown level name: {0:?}")]
    UnknownLevelName(String),

    #[error("error reading config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    ConfigValue { key: String, value: String },
}

pub type LogResult<T> = Result<T, LogError>;
