//! Configuration state shared by every logger derived from the same root

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::error::LoggerResult;
use crate::level::Level;

/// Shared, mutable logger configuration
///
/// Held behind an `Arc`; every derived logger clones the handle, so a
/// mutation through any holder is observed by all of them immediately.
pub(crate) struct SharedConfig {
    simple: AtomicBool,
    min_level: AtomicU8,
    tag_align: AtomicUsize,
    file: RwLock<Option<File>>,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            simple: AtomicBool::new(false),
            min_level: AtomicU8::new(Level::Debug as u8),
            tag_align: AtomicUsize::new(0),
            file: RwLock::new(None),
        }
    }
}

impl SharedConfig {
    pub(crate) fn simple(&self) -> bool {
        self.simple.load(Ordering::Relaxed)
    }

    pub(crate) fn set_simple(&self, simple: bool) {
        self.simple.store(simple, Ordering::Relaxed);
    }

    pub(crate) fn min_level(&self) -> Level {
        Level::from_ordinal(self.min_level.load(Ordering::Relaxed))
    }

    pub(crate) fn set_min_level(&self, level: Level) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    pub(crate) fn tag_align(&self) -> usize {
        self.tag_align.load(Ordering::Relaxed)
    }

    pub(crate) fn set_tag_align(&self, width: usize) {
        self.tag_align.store(width, Ordering::Relaxed);
    }

    /// Open `path` in append mode (creating it if needed) and make it the
    /// shared file target
    ///
    /// On failure the previous target is left untouched. On success the
    /// previous handle is dropped, which closes it.
    pub(crate) fn open_file(&self, path: &Path) -> LoggerResult<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *self.file.write() = Some(file);
        Ok(())
    }

    /// Drop the shared file target, closing the handle. Idempotent.
    pub(crate) fn close_file(&self) {
        self.file.write().take();
    }

    pub(crate) fn has_file(&self) -> bool {
        self.file.read().is_some()
    }

    /// Append `line` plus a newline to the file target, if one is set
    ///
    /// Write failures are discarded; there is no logging about logging.
    pub(crate) fn append_line(&self, line: &str) {
        if let Some(file) = self.file.read().as_ref() {
            let mut file: &File = file;
            let _ = writeln!(file, "{}", line);
        }
    }
}
