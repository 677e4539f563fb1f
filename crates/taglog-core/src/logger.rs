//! Logger construction, module derivation, configuration and emission

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::SharedConfig;
use crate::error::LoggerResult;
use crate::format;
use crate::level::Level;

/// A leveled, tagged logger writing to stdout and an optional append-only
/// file
///
/// Loggers created with [`Logger::module`] share their configuration with
/// the logger they were derived from: changing the level, output mode, tag
/// width or file target through any of them affects all of them. Each
/// instance keeps its own write lock, so concurrent calls on the *same*
/// instance never interleave lines; calls on different instances may, even
/// when they append to the same file.
///
/// # Example
///
/// ```
/// use taglog_core::{Level, Logger};
///
/// let root = Logger::new();
/// root.set_simple(true).set_level(Level::Info);
///
/// let net = root.module("net");
/// net.info("listening on :8080");
/// net.debug("dropped: below the shared minimum level");
/// ```
pub struct Logger {
    name: String,
    shared: Arc<SharedConfig>,
    write_lock: Mutex<()>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a root logger named `"main"`: verbose mode, minimum level
    /// `Debug`, no tag padding, no file target
    pub fn new() -> Self {
        Self {
            name: "main".to_string(),
            shared: Arc::new(SharedConfig::default()),
            write_lock: Mutex::new(()),
        }
    }

    /// Derive a named logger sharing this logger's configuration
    ///
    /// The derived logger has its own write lock.
    pub fn module(&self, name: impl Into<String>) -> Logger {
        Logger {
            name: name.into(),
            shared: Arc::clone(&self.shared),
            write_lock: Mutex::new(()),
        }
    }

    /// The tag shown in this logger's lines
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current minimum severity
    pub fn level(&self) -> Level {
        self.shared.min_level()
    }

    /// Whether simple mode is active
    pub fn is_simple(&self) -> bool {
        self.shared.simple()
    }

    /// Current minimum tag column width
    pub fn tag_align(&self) -> usize {
        self.shared.tag_align()
    }

    /// Set the minimum severity; calls below it are dropped without
    /// formatting or I/O
    pub fn set_level(&self, level: Level) -> &Self {
        self.shared.set_min_level(level);
        self
    }

    /// Toggle simple mode: short `HH:MM:SS` timestamps and no caller
    /// location
    pub fn set_simple(&self, simple: bool) -> &Self {
        self.shared.set_simple(simple);
        self
    }

    /// Set the minimum column width the tag is padded to; names at least
    /// that wide are left unpadded
    pub fn set_tag_align(&self, width: usize) -> &Self {
        self.shared.set_tag_align(width);
        self
    }

    /// Open `path` in append mode (creating it if needed) and make it the
    /// file target for every logger sharing this configuration
    ///
    /// On failure the error is returned and the previous target, if any,
    /// keeps receiving lines.
    pub fn set_file(&self, path: impl AsRef<Path>) -> LoggerResult<()> {
        self.shared.open_file(path.as_ref())
    }

    /// Close the shared file target; subsequent lines go to stdout only.
    /// Idempotent.
    pub fn close(&self) {
        self.shared.close_file();
    }

    /// Emit `message` at `level`, subject to the minimum-level filter
    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        self.write(level, Location::caller(), &message);
    }

    /// Emit at `Debug`
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.write(Level::Debug, Location::caller(), &message);
    }

    /// Emit at `Info`
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.write(Level::Info, Location::caller(), &message);
    }

    /// Emit at `Warn`
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.write(Level::Warn, Location::caller(), &message);
    }

    /// Emit at `Error`
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.write(Level::Error, Location::caller(), &message);
    }

    fn write(&self, level: Level, location: &Location<'_>, message: &dyn fmt::Display) {
        if level < self.shared.min_level() {
            return;
        }
        let _guard = self.write_lock.lock();
        let line = format::render(
            level,
            &self.name,
            self.shared.tag_align(),
            self.shared.simple(),
            location,
            message,
        );
        // Stdout failures are discarded, like file failures.
        let _ = writeln!(io::stdout(), "{}", line);
        self.shared.append_line(&line);
    }
}

/// Space-join any number of `Display` values and log them at `Debug`
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.debug($crate::format::join_values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
}

/// Space-join any number of `Display` values and log them at `Info`
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.info($crate::format::join_values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
}

/// Space-join any number of `Display` values and log them at `Warn`
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.warn($crate::format::join_values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
}

/// Space-join any number of `Display` values and log them at `Error`
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.error($crate::format::join_values(&[$(&$value as &dyn ::std::fmt::Display),+]))
    };
}
