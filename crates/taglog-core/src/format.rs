//! Log line rendering

use std::fmt;
use std::panic::Location;

use chrono::{Local, Timelike};

use crate::level::Level;

/// Render each value with its `Display` implementation and join the
/// results with single spaces
///
/// This is the joining performed by the [`log_debug!`], [`log_info!`],
/// [`log_warn!`] and [`log_error!`] macros.
///
/// [`log_debug!`]: crate::log_debug
/// [`log_info!`]: crate::log_info
/// [`log_warn!`]: crate::log_warn
/// [`log_error!`]: crate::log_error
pub fn join_values(values: &[&dyn fmt::Display]) -> String {
    let rendered: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    rendered.join(" ")
}

/// Pad `name` with trailing spaces to `width`; names at least that wide
/// are used as-is
fn pad_tag(name: &str, width: usize) -> String {
    format!("{:<width$}", name)
}

/// Render a single log line
///
/// Simple mode:  `[HH:MM:SS] [tag] [Level] message`
/// Verbose mode: `[YYYY/MM/DD HH:MM:SS.ffff] [tag] [Level] [file:line] message`
pub(crate) fn render(
    level: Level,
    name: &str,
    tag_align: usize,
    simple: bool,
    location: &Location<'_>,
    message: &dyn fmt::Display,
) -> String {
    let tag = pad_tag(name, tag_align);
    let now = Local::now();
    if simple {
        format!(
            "[{}] [{}] {} {}",
            now.format("%H:%M:%S"),
            tag,
            level.colored_label(),
            message
        )
    } else {
        // chrono has no four-digit fraction specifier; derive it from the
        // nanosecond field (which may exceed 1s during a leap second).
        let fraction = now.nanosecond() % 1_000_000_000 / 100_000;
        format!(
            "[{}.{:04}] [{}] {} [{}:{}] {}",
            now.format("%Y/%m/%d %H:%M:%S"),
            fraction,
            tag,
            level.colored_label(),
            location.file(),
            location.line(),
            message
        )
    }
}
