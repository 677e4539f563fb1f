//! Process-wide root logger

use std::fmt;

use once_cell::sync::Lazy;

use crate::logger::Logger;

/// Global root instance, created on first use
static ROOT: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide root logger, named `"main"`
///
/// Derive tagged loggers from it with [`Logger::module`]; configuration
/// changes made through any of them propagate to the whole family.
pub fn root() -> &'static Logger {
    &ROOT
}

/// Log a debug message through the root logger
#[track_caller]
pub fn debug(message: impl fmt::Display) {
    root().debug(message);
}

/// Log an info message through the root logger
#[track_caller]
pub fn info(message: impl fmt::Display) {
    root().info(message);
}

/// Log a warning through the root logger
#[track_caller]
pub fn warn(message: impl fmt::Display) {
    root().warn(message);
}

/// Log an error through the root logger
#[track_caller]
pub fn error(message: impl fmt::Display) {
    root().error(message);
}
