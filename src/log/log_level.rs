use std::{fmt, str::FromStr};

use crate::log::log_error::LogError;

/// Defines the severity levels for log events.
///
/// Each level occupies its own bit so levels can be combined into a
/// [`LevelMask`](crate::log::level_mask::LevelMask). The numeric order
/// (`Debug < Info < Warning < Error < Critical`) is conventional only;
/// sinks filter by mask membership, never by threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Values tracked while debugging. Suppressed unless debug output is visible.
    Debug = 1,
    /// Something expected has happened.
    Info = 2,
    /// Something unexpected has happened.
    Warning = 4,
    /// A non-fatal error has occurred.
    Error = 8,
    /// A fatal error has occurred, the program may crash.
    Critical = 16,
}

impl LogLevel {
    /// Every level, lowest severity first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// The bit this level occupies in a mask.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Three-character marker placed at the start of a rendered event.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            LogLevel::Debug => " # ",
            LogLevel::Info => "   ",
            LogLevel::Warning => " ! ",
            LogLevel::Error => "!! ",
            LogLevel::Critical => "!!!",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LogError;

    /// Accepts exactly one defined bit; combined or unknown bits are rejected.
    fn try_from(bits: u8) -> Result<Self, LogError> {
        match bits {
            1 => Ok(LogLevel::Debug),
            2 => Ok(LogLevel::Info),
            4 => Ok(LogLevel::Warning),
            8 => Ok(LogLevel::Error),
            16 => Ok(LogLevel::Critical),
            other => Err(LogError::InvalidLevel(other)),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, LogError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            _ => Err(LogError::UnknownLevelName(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn levels_are_distinct_bits() {
        let union = LogLevel::ALL.iter().fold(0u8, |acc, l| {
            assert_eq!(acc & l.bits(), 0, "{l} overlaps another level");
            acc | l.bits()
        });
        assert_eq!(union, 31);
    }

    #[test]
    fn glyphs_are_three_chars() {
        for level in LogLevel::ALL {
            assert_eq!(level.glyph().len(), 3);
        }
        assert_eq!(LogLevel::Warning.glyph(), " ! ");
        assert_eq!(LogLevel::Critical.glyph(), "!!!");
    }

    #[test]
    fn try_from_rejects_combined_and_unknown_bits() {
        assert_eq!(LogLevel::try_from(8).unwrap(), LogLevel::Error);
        assert!(matches!(
            LogLevel::try_from(2 | 4),
            Err(LogError::InvalidLevel(6))
        ));
        assert!(matches!(
            LogLevel::try_from(0),
            Err(LogError::InvalidLevel(0))
        ));
        assert!(matches!(
            LogLevel::try_from(32),
            Err(LogError::InvalidLevel(32))
        ));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" critical ".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
