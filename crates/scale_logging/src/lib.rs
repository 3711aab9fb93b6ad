#![deny(missing_docs)]
//! Shared logging utilities for the scale terminal workspace.
//!
//! Provides the `scale_*` logging macros used by the engine and the app, and a
//! test initializer for the global logger. Every record is logged under the
//! `scale` target prefix followed by the calling module, so a deployment can
//! filter the terminal's own output apart from its dependencies.

#[doc(hidden)]
pub use log;

/// Environment variable read by [`initialize_for_tests`] to pick a level.
pub const TEST_LEVEL_VAR: &str = "SCALE_TEST_LOG";

/// Logs at an explicit `log::Level` under the `scale::<module>` target.
#[macro_export]
macro_rules! scale_log {
    ($level:expr, $($arg:tt)*) => {{
        $crate::log::log!(
            target: concat!("scale::", module_path!()),
            $level,
            $($arg)*
        );
    }};
}

/// Logs a trace-level message.
#[macro_export]
macro_rules! scale_trace {
    ($($arg:tt)*) => { $crate::scale_log!($crate::log::Level::Trace, $($arg)*) };
}

/// Logs a debug-level message.
#[macro_export]
macro_rules! scale_debug {
    ($($arg:tt)*) => { $crate::scale_log!($crate::log::Level::Debug, $($arg)*) };
}

/// Logs an info-level message.
#[macro_export]
macro_rules! scale_info {
    ($($arg:tt)*) => { $crate::scale_log!($crate::log::Level::Info, $($arg)*) };
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! scale_warn {
    ($($arg:tt)*) => { $crate::scale_log!($crate::log::Level::Warn, $($arg)*) };
}

/// Logs an error-level message.
#[macro_export]
macro_rules! scale_error {
    ($($arg:tt)*) => { $crate::scale_log!($crate::log::Level::Error, $($arg)*) };
}

/// Parses a textual level (`"info"`, `"WARN"`, ...) into a filter.
///
/// Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> log::LevelFilter {
    name.trim().parse().unwrap_or(log::LevelFilter::Info)
}

/// Level used by test runs: the override when given, else debug in debug
/// builds and info in release builds.
pub fn test_level(override_name: Option<&str>) -> log::LevelFilter {
    match override_name {
        Some(name) if !name.trim().is_empty() => parse_level(name),
        _ if cfg!(debug_assertions) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Info,
    }
}

/// Initializes a terminal logger for tests, honouring [`TEST_LEVEL_VAR`].
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = test_level(std::env::var(TEST_LEVEL_VAR).ok().as_deref());

    // Another test binary thread may have won the race.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
