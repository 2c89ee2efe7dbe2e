//! aglog's own diagnostic logger. Reports ignored configuration values and registry
//! transitions through the same formatting pipeline it offers to callers.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (CLI, registry, tests) race to call `init`.
//! Silent unless `AGLOG_INTERNAL_LEVEL` (or [`init_with_level`]) raises the threshold.

use crate::formatter::PlainFormatter;
use crate::level::{Level, LogLevel};
use crate::logger::{Logger, LoggerOptions};
use crate::sink::ConsoleSink;
use serde_json::Value;
use std::sync::OnceLock;

/// Environment variable holding the internal threshold (`off`, `error`, `debug`, …).
pub const LEVEL_ENV: &str = "AGLOG_INTERNAL_LEVEL";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Fallback initializer that reads the threshold from the environment.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init() {
    let level = std::env::var(LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::Off);
    init_with_level(level);
}

/// Preferred initializer when the caller already knows the threshold (e.g. a CLI flag).
pub fn init_with_level(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level));
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready at level {level}"));
    }
}

// Built while `INTERNAL_LOGGER` is still empty, so diagnostics raised during
// construction vanish instead of recursing.
fn build_internal_logger(level: Level) -> Logger {
    Logger::new(
        LoggerOptions::new()
            .log_level(level)
            .default_logger(ConsoleSink::stderr())
            .formatter(PlainFormatter),
    )
}

/// Pre-init calls silently vanish rather than failing, so early startup is safe.
/// Write failures on stderr are dropped; there is nowhere left to report them.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let args = [Value::from(scope), Value::from(msg)];
        let _ = logger.emit(LogLevel::Standard(level), &args);
    }
}

/// Visible only when the internal level includes Trace.
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Lifecycle diagnostics, visible only when the internal level includes Debug.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Ignored configuration values and other recoverable misuse.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
