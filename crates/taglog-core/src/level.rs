//! Severity levels and their rendering

use std::fmt;
use std::str::FromStr;

use colored::{ColoredString, Colorize};

use crate::error::LoggerError;

/// Log severities, ordered from least to most severe
///
/// The ordering is used for filtering: a message passes when its level is
/// at least the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    /// The label printed inside the line's severity brackets
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
        }
    }

    /// Bracketed label with the severity color applied
    ///
    /// Color emission follows the `colored` crate's terminal detection
    /// (NO_COLOR, piped output). The line is formatted once, so a
    /// configured file receives exactly the console bytes.
    pub(crate) fn colored_label(&self) -> ColoredString {
        match self {
            Level::Debug => "[Debug]".bright_green(),
            Level::Info => "[Info]".bright_cyan(),
            Level::Warn => "[Warn]".bright_yellow(),
            Level::Error => "[Error]".bright_red(),
        }
    }

    /// Decode a stored ordinal. Values outside the defined set fall back
    /// to `Debug`; stores only ever hold ordinals produced by `Level`.
    pub(crate) const fn from_ordinal(value: u8) -> Level {
        match value {
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            _ => Level::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        match value {
            0 => Ok(Level::Debug),
            1 => Ok(Level::Info),
            2 => Ok(Level::Warn),
            3 => Ok(Level::Error),
            other => Err(LoggerError::UnknownLevel(other.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("debug") {
            Ok(Level::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Level::Info)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Level::Warn)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Level::Error)
        } else {
            Err(LoggerError::UnknownLevel(s.to_string()))
        }
    }
}
