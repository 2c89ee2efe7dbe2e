//! Turns the argument list of one log call into an immutable [`LogRecord`].
//!
//! Strings, numbers and booleans are trimmed and joined with single spaces into the
//! human-readable message; pieces that trim to nothing are dropped. Everything else
//! (objects, arrays, `null`) stays structured in `args`.
//! A leading string that parses as a date/time is taken as the record's timestamp.

use crate::level::LogLevel;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};

/// One log call after shaping. Built once per call and handed to the formatter by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    level: LogLevel,
    timestamp: DateTime<Utc>,
    message: String,
    args: Vec<Value>,
}

impl LogRecord {
    /// The call-site level; `Log` and `Verbose` records keep their pseudo-level tag.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured arguments in call order.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

/// Shapes a record stamped with the current time unless the first argument carries one.
#[must_use]
pub fn shape(level: LogLevel, args: &[Value]) -> LogRecord {
    shape_at(level, args, Utc::now())
}

/// Same as [`shape`] with an explicit clock, so identical inputs give identical records.
#[must_use]
pub fn shape_at(level: LogLevel, args: &[Value], now: DateTime<Utc>) -> LogRecord {
    let (timestamp, rest) = match args.split_first() {
        Some((Value::String(first), rest)) => {
            parse_timestamp(first).map_or((now, args), |ts| (ts, rest))
        }
        _ => (now, args),
    };

    let mut pieces: Vec<String> = Vec::new();
    let mut structured = Vec::new();
    for arg in rest {
        match primitive_text(arg) {
            Some(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    pieces.push(trimmed.to_string());
                }
            }
            None => structured.push(arg.clone()),
        }
    }

    LogRecord {
        level,
        timestamp,
        message: pieces.join(" "),
        args: structured,
    }
}

fn primitive_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// Whole-valued floats drop the trailing `.0` so `1.0` and `1` read the same.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Accepts RFC 3339, RFC 2822, ISO-like date-times without an offset, and bare dates.
/// Offset-less values are read as UTC.
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
