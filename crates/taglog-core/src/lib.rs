//! Taglog Core
//!
//! Leveled, tagged console/file logging with shared module loggers.
//! A root logger hands out named module loggers that all share one
//! configuration: minimum level, simple/verbose mode, tag column width and
//! an optional append-only file target. Changing any of these through one
//! logger changes it for the whole family.
//!
//! ## Line format
//!
//! Simple mode:  `[HH:MM:SS] [tag] [Level] message`
//!
//! Verbose mode: `[YYYY/MM/DD HH:MM:SS.ffff] [tag] [Level] [file:line] message`
//!
//! The severity label is colored with ANSI escapes when the terminal
//! supports it; a configured file receives the same bytes as the console.
//!
//! ```
//! use taglog_core::{log_info, Level, Logger};
//!
//! let root = Logger::new();
//! root.set_simple(true).set_level(Level::Info).set_tag_align(8);
//!
//! let net = root.module("net");
//! net.info("listening on :8080");
//! log_info!(net, "accepted", 3, "connections");
//! ```

pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod logger;

mod config;

// Re-export commonly used types
pub use error::{LoggerError, LoggerResult};
pub use global::root;
pub use level::Level;
pub use logger::Logger;
