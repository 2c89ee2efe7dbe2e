//! Sinks consume the formatted string of one log call.
//!
//! The [`Sink`] trait is the only contract the dispatch path relies on, so a console,
//! an in-memory buffer, or a network client can sit behind any level.

mod buffer;
mod console;

pub use buffer::BufferSink;
pub use console::{ConsoleSink, Stream};

use crate::error::BoxError;
use std::sync::Arc;

/// Consumes one formatted message.
///
/// `Send + Sync` because sinks are shared between the configuration and in-flight calls.
/// Errors are expected and reach the caller of the level method unchanged.
pub trait Sink: Send + Sync {
    /// # Errors
    /// Whatever the underlying destination reports.
    fn write(&self, message: &str) -> Result<(), BoxError>;
}

impl<F> Sink for F
where
    F: Fn(&str) -> Result<(), BoxError> + Send + Sync,
{
    fn write(&self, message: &str) -> Result<(), BoxError> {
        self(message)
    }
}

/// Sinks are installed once and resolved on every call.
pub type SharedSink = Arc<dyn Sink>;

/// Accepts and discards. The default sink until one is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _message: &str) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Named sink choice used by config files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Errors and warnings to stderr, everything else to stdout.
    #[default]
    Console,
    Stdout,
    Stderr,
    Null,
}

impl std::str::FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "null" | "none" => Ok(Self::Null),
            _ => Err(format!("unknown output: '{s}'")),
        }
    }
}
