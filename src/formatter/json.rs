//! One JSON object per record, suitable for line-oriented collectors (`jq`, log shippers).

use super::{Formatter, render_timestamp};
use crate::error::BoxError;
use crate::record::LogRecord;
use serde::Serialize;
use serde_json::Value;

/// Flat shape so every record is one self-describing line.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    timestamp: String,
    level: &'static str,
    message: &'a str,
    /// Omitted when the call had no structured arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<&'a [Value]>,
}

/// Renders `{"timestamp":…,"level":…,"message":…,"args":[…]}` on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, BoxError> {
        let entry = JsonEntry {
            timestamp: render_timestamp(record),
            level: record.level().label(),
            message: record.message(),
            args: Some(record.args()).filter(|args| !args.is_empty()),
        };
        Ok(serde_json::to_string(&entry)?)
    }
}
