//! Error types for logger operations

use thiserror::Error;

/// Errors that can occur during logger operations
///
/// The only fallible configuration call is [`Logger::set_file`], which
/// surfaces the underlying I/O failure. Level conversions from ordinals or
/// names reject values outside the defined set.
///
/// [`Logger::set_file`]: crate::Logger::set_file
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Opening the log file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Level name or ordinal outside the defined set
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
