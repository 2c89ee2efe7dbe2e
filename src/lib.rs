//! `aglog` - Pluggable logging facade.
//!
//! A process-wide logger that routes leveled calls through a configurable formatter and
//! a per-level set of sinks:
//! - Ordered standard levels plus `log` (force output) and `verbose` (flag-gated) call sites
//! - Per-level sink overrides with fallback to a default sink
//! - Built-in JSON, plain-text and null formatters; console, buffer and null sinks
//! - TOML configuration with per-app overrides
//!
//! # Example
//!
//! ```
//! use aglog::{BufferSink, Level, LoggerOptions, PlainFormatter};
//!
//! let buffer = BufferSink::new();
//! let logger = aglog::create_logger(
//!     LoggerOptions::new()
//!         .log_level(Level::Warn)
//!         .formatter(PlainFormatter)
//!         .default_logger(buffer.clone()),
//! )
//! .unwrap();
//!
//! aglog::info!(logger, "filtered out").unwrap();
//! aglog::error!(logger, "disk full", {"free": 0}).unwrap();
//! assert_eq!(buffer.len(), 1);
//!
//! let same = aglog::get_logger().unwrap();
//! assert_eq!(same.log_level(), Level::Warn);
//! aglog::reset_singleton();
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `aglog` command-line binary

// Core modules (always available)
pub mod config;
pub mod error;
pub mod formatter;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod record;
pub mod registry;
pub mod sink;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::{BoxError, Error};
pub use formatter::{Formatter, JsonFormatter, NullFormatter, PlainFormatter, SharedFormatter};
pub use level::{Level, LogLevel, ParseLevelError, should_output};
pub use logger::{Configuration, Logger, LoggerFunctionMap, LoggerOptions};
pub use record::{LogRecord, shape, shape_at};
pub use registry::{Registry, create_logger, get_logger, reset_singleton};
pub use sink::{BufferSink, ConsoleSink, NullSink, SharedSink, Sink};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
