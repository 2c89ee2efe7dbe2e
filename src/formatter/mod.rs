//! Formatters render a [`LogRecord`] to the one string a sink receives.
//!
//! The built-ins cover the common cases (JSON lines, plain text, nothing at all), and the
//! [`Formatter`] trait lets callers plug in their own without touching the dispatch path.

mod json;
mod plain;

pub use json::JsonFormatter;
pub use plain::PlainFormatter;

use crate::error::BoxError;
use crate::record::LogRecord;
use chrono::SecondsFormat;
use std::sync::Arc;

/// Renders one record.
///
/// Implementations may fail (e.g. unserializable arguments); the error reaches the caller
/// of the level method unchanged. Returning an empty string suppresses output for that call.
pub trait Formatter: Send + Sync {
    /// # Errors
    /// Whatever the implementation cannot render.
    fn format(&self, record: &LogRecord) -> Result<String, BoxError>;
}

impl<F> Formatter for F
where
    F: Fn(&LogRecord) -> Result<String, BoxError> + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> Result<String, BoxError> {
        self(record)
    }
}

/// Formatters are shared between the configuration and in-flight calls.
pub type SharedFormatter = Arc<dyn Formatter>;

/// Renders nothing, so every call is suppressed. Installed until a real formatter is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormatter;

impl Formatter for NullFormatter {
    fn format(&self, _record: &LogRecord) -> Result<String, BoxError> {
        Ok(String::new())
    }
}

/// Millisecond precision with a `Z` suffix, e.g. `2025-01-15T14:30:00.000Z`.
pub(crate) fn render_timestamp(record: &LogRecord) -> String {
    record
        .timestamp()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Named formatter choice used by config files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    Json,
    #[default]
    Plain,
    Null,
}

impl FormatterKind {
    #[must_use]
    pub fn build(self) -> SharedFormatter {
        match self {
            Self::Json => Arc::new(JsonFormatter),
            Self::Plain => Arc::new(PlainFormatter),
            Self::Null => Arc::new(NullFormatter),
        }
    }
}

impl std::str::FromStr for FormatterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "plain" | "text" => Ok(Self::Plain),
            "null" | "none" => Ok(Self::Null),
            _ => Err(format!("unknown formatter: '{s}'")),
        }
    }
}
