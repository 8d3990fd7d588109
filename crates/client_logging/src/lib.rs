#![deny(missing_docs)]
//! Logging helpers shared by the client crates.
//!
//! Everything logs through the `log` facade; the `client_*` macros exist so
//! call sites stay uniform if the facade is ever swapped out. Tests use
//! [`initialize_for_tests`] to get a terminal logger without fighting over
//! the global logger slot.

/// Trace-level log line.
#[macro_export]
macro_rules! client_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Debug-level log line.
#[macro_export]
macro_rules! client_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Info-level log line.
#[macro_export]
macro_rules! client_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Warn-level log line.
#[macro_export]
macro_rules! client_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Error-level log line.
#[macro_export]
macro_rules! client_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Sets up a terminal logger for tests.
///
/// Debug level in debug builds, info in release. Whichever test calls this
/// first wins the global logger; later calls (and a logger installed by the
/// application) are silently ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
