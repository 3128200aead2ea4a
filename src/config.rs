use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::log::{
    level_mask::LevelMask,
    log_error::{LogError, LogResult},
    text_file_sink::DEFAULT_LOG_FILENAME,
};

/// Section holding the logger settings.
pub const LOGGING_SECTION: &str = "Logging";

/// Environment variable that turns on debug output regardless of build mode.
pub const SHOW_DEBUG_ENV: &str = "BOOMLOG_SHOW_DEBUG";

/// INI-style configuration: `[Section]` headers, `key = value` lines and
/// `#` comments. Keys before the first header are globals.
#[derive(Debug)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::ConfigRead`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            globals: HashMap::new(),
            sections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    /// Interprets `section.key` as a boolean; `None` when the key is missing or empty.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::ConfigValue`] for anything other than
    /// `true/false`, `yes/no`, `on/off` or `1/0`.
    pub fn get_bool(&self, section: &str, key: &str) -> LogResult<Option<bool>> {
        self.get_non_empty(section, key)
            .map(|value| {
                parse_bool(value).ok_or_else(|| LogError::ConfigValue {
                    key: format!("{section}.{key}"),
                    value: value.to_string(),
                })
            })
            .transpose()
    }

    /// Interprets `section.key` as a level mask; `None` when the key is missing or empty.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::UnknownLevelName`] when the value names no level.
    pub fn get_levels(&self, section: &str, key: &str) -> LogResult<Option<LevelMask>> {
        self.get_non_empty(section, key)
            .map(str::parse::<LevelMask>)
            .transpose()
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Whether Debug events are dispatched by default.
///
/// True for builds with `debug_assertions`, builds with the `show-debug`
/// feature, and processes started with `BOOMLOG_SHOW_DEBUG=1`.
#[must_use]
pub fn build_shows_debug() -> bool {
    cfg!(any(debug_assertions, feature = "show-debug"))
        || std::env::var(SHOW_DEBUG_ENV)
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(false)
}

/// Settings for the default sinks and debug visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub log_filename: String,
    pub file_enabled: bool,
    pub file_levels: LevelMask,
    pub console_enabled: bool,
    pub console_levels: LevelMask,
    pub show_debug: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_filename: DEFAULT_LOG_FILENAME.to_string(),
            file_enabled: true,
            file_levels: LevelMask::ALL,
            console_enabled: true,
            console_levels: LevelMask::ALL,
            show_debug: false,
        }
    }
}

impl LoggingSettings {
    /// Reads the `[Logging]` section. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value cannot be interpreted.
    pub fn from_config(config: &Config) -> LogResult<Self> {
        let defaults = Self::default();
        let sec = LOGGING_SECTION;
        Ok(Self {
            log_filename: config
                .get_non_empty(sec, "log_filename")
                .map_or(defaults.log_filename, str::to_string),
            file_enabled: config
                .get_bool(sec, "file_enabled")?
                .unwrap_or(defaults.file_enabled),
            file_levels: config
                .get_levels(sec, "file_levels")?
                .unwrap_or(defaults.file_levels),
            console_enabled: config
                .get_bool(sec, "console_enabled")?
                .unwrap_or(defaults.console_enabled),
            console_levels: config
                .get_levels(sec, "console_levels")?
                .unwrap_or(defaults.console_levels),
            show_debug: config
                .get_bool(sec, "show_debug")?
                .unwrap_or(defaults.show_debug),
        })
    }
}
