//! Tiny leveled logger used by the whole crate.
//!
//! Messages are written to stderr with a colored level tag so that the
//! listings printed on stdout stay clean enough to pipe. Debug messages are
//! dropped unless [`init`] was called with `debug = true`.

use colored::Colorize; // For the colored `[INFO]`, `[WARN]`, ... tags.
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering}; // Process-wide debug switch, readable from rayon workers.

/// Global flag flipped once by [`init`] at startup.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Returns the colored tag printed in front of every message of this level.
    fn tag(self) -> colored::ColoredString {
        match self {
            Level::Debug => "[DEBUG]".bright_black(),
            Level::Info => "[INFO]".bright_cyan(),
            Level::Warn => "[WARN]".bright_yellow(),
            Level::Error => "[ERROR]".bright_red().bold(),
        }
    }
}

/// Initializes the logger.
///
/// # Arguments
/// * `debug` - When `true`, `log_debug!` messages are printed as well.
pub fn init(debug: bool) {
    DEBUG_ENABLED.store(debug, Ordering::Relaxed);
}

/// Returns `true` when debug output was requested (e.g. via `--debug`).
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Returns `true` if a message of the given level would be printed.
pub fn enabled(level: Level) -> bool {
    level != Level::Debug || is_debug_enabled()
}

/// Writes one formatted message. Called through the `log_*!` macros.
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    eprintln!("{} {}", level.tag(), args);
}

/// Logs a message at debug level. Only printed when debug output is enabled.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

/// Logs a message at info level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

/// Logs a message at warning level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

/// Logs a message at error level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Error, format_args!($($arg)*))
    };
}
