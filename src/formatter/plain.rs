//! Human-readable single-line rendering for terminals.

use super::{Formatter, render_timestamp};
use crate::error::BoxError;
use crate::record::LogRecord;

/// Renders `<timestamp> [<LEVEL>] <message>` followed by each structured argument as compact JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, BoxError> {
        let mut line = format!(
            "{} [{}] {}",
            render_timestamp(record),
            record.level().label(),
            record.message()
        );
        for arg in record.args() {
            line.push(' ');
            line.push_str(&serde_json::to_string(arg)?);
        }
        Ok(line)
    }
}
