use std::{fmt, ops::BitOr, str::FromStr};

use crate::log::{log_error::LogError, log_level::LogLevel};

/// Set of levels a sink listens to.
///
/// Unknown bits are kept as given so masks stay forward compatible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LevelMask(u8);

impl LevelMask {
    /// Listens to nothing.
    pub const NONE: LevelMask = LevelMask(0);
    /// Listens to every level (31).
    pub const ALL: LevelMask = LevelMask(31);

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn with(self, level: LogLevel) -> Self {
        Self(self.0 | level.bits())
    }

    #[must_use]
    pub const fn without(self, level: LogLevel) -> Self {
        Self(self.0 & !level.bits())
    }

    /// Exact-subset test: every bit of `level` must be present in the mask.
    #[inline]
    #[must_use]
    pub const fn accepts(self, level: LogLevel) -> bool {
        self.0 & level.bits() == level.bits()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<LogLevel> for LevelMask {
    fn from(level: LogLevel) -> Self {
        Self(level.bits())
    }
}

impl BitOr for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.0 | rhs.0)
    }
}

impl BitOr<LogLevel> for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LogLevel) -> LevelMask {
        self.with(rhs)
    }
}

impl BitOr for LogLevel {
    type Output = LevelMask;

    fn bitor(self, rhs: LogLevel) -> LevelMask {
        LevelMask::from(self).with(rhs)
    }
}

impl FromStr for LevelMask {
    type Err = LogError;

    /// Accepts `all`, `none`, a decimal integer, or level names separated by `,` or `|`.
    fn from_str(s: &str) -> Result<Self, LogError> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "all" => return Ok(LevelMask::ALL),
            "none" | "" => return Ok(LevelMask::NONE),
            _ => {}
        }
        if let Ok(bits) = trimmed.parse::<u8>() {
            return Ok(LevelMask(bits));
        }
        trimmed
            .split([',', '|'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .try_fold(LevelMask::NONE, |mask, part| -> Result<LevelMask, LogError> {
                Ok(mask.with(part.parse::<LogLevel>()?))
            })
    }
}

impl fmt::Display for LevelMask {
    /// Level names joined by `|`, or the decimal bits when unknown bits are set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 & !LevelMask::ALL.0 != 0 {
            return write!(f, "{}", self.0);
        }
        let names: Vec<&str> = LogLevel::ALL
            .iter()
            .filter(|level| self.accepts(**level))
            .map(|level| level.as_str())
            .collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join("|"))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn all_accepts_every_level() {
        for level in LogLevel::ALL {
            assert!(LevelMask::ALL.accepts(level));
            assert!(!LevelMask::NONE.accepts(level));
        }
    }

    #[test]
    fn membership_is_not_a_threshold() {
        let info_only = LevelMask::from(LogLevel::Info);
        assert!(info_only.accepts(LogLevel::Info));
        assert!(!info_only.accepts(LogLevel::Warning));
        assert!(!info_only.accepts(LogLevel::Critical));
        assert!(!info_only.accepts(LogLevel::Debug));
    }

    #[test]
    fn bitor_combines_levels() {
        let mask = LogLevel::Debug | LogLevel::Info | LogLevel::Error;
        assert_eq!(mask.bits(), 1 | 2 | 8);
        assert!(mask.accepts(LogLevel::Error));
        assert!(!mask.accepts(LogLevel::Warning));
        assert_eq!(mask.without(LogLevel::Info).bits(), 1 | 8);
    }

    #[test]
    fn unknown_bits_are_preserved() {
        let mask = LevelMask::from_bits(0b1110_0010);
        assert_eq!(mask.bits(), 0b1110_0010);
        assert!(mask.accepts(LogLevel::Info));
    }

    #[test]
    fn parses_names_numbers_and_keywords() {
        assert_eq!("all".parse::<LevelMask>().unwrap(), LevelMask::ALL);
        assert_eq!("none".parse::<LevelMask>().unwrap(), LevelMask::NONE);
        assert_eq!("12".parse::<LevelMask>().unwrap().bits(), 12);
        assert_eq!(
            "info, warn | critical".parse::<LevelMask>().unwrap(),
            LogLevel::Info | LogLevel::Warning | LogLevel::Critical
        );
        assert!(matches!(
            "info,loud".parse::<LevelMask>(),
            Err(LogError::UnknownLevelName(name)) if name == "loud"
        ));
    }

    #[test]
    fn displays_level_names() {
        assert_eq!((LogLevel::Info | LogLevel::Error).to_string(), "info|error");
        assert_eq!(LevelMask::NONE.to_string(), "none");
    }

    #[test]
    fn display_parses_back_to_the_same_mask() {
        for bits in [0, 2, 31, 0b1110_0010, 32, 255] {
            let mask = LevelMask::from_bits(bits);
            assert_eq!(mask.to_string().parse::<LevelMask>().unwrap(), mask);
        }
        assert_eq!(LevelMask::from_bits(0b1110_0010).to_string(), "226");
    }
}
