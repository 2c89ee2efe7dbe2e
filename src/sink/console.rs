//! Console output, the sink most callers want without configuring anything else.

use super::Sink;
use crate::error::BoxError;
use crate::level::Level;
use std::io::{self, Write};

/// Standard stream a console sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Writes each message as one line to stdout or stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// Keeps stdout clean for programs whose real output is piped.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    /// Fatal, error and warn go to stderr; the rest to stdout.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Fatal | Level::Error | Level::Warn => Self::stderr(),
            Level::Off | Level::Info | Level::Debug | Level::Trace => Self::stdout(),
        }
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn write(&self, message: &str) -> Result<(), BoxError> {
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{message}")?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{message}")?,
        }
        Ok(())
    }
}
