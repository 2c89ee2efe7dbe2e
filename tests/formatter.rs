//! Tests for the built-in formatters.

use aglog::{Formatter, JsonFormatter, LogLevel, NullFormatter, PlainFormatter, shape_at};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

fn record(level: LogLevel, args: &[Value]) -> aglog::LogRecord {
    shape_at(level, args, Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap())
}

#[test]
fn json_has_flat_schema() {
    let line = JsonFormatter
        .format(&record(LogLevel::ERROR, &[json!("disk"), json!("full"), json!({"free": 0})]))
        .unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();

    assert_eq!(parsed["timestamp"], "2025-01-15T14:30:00.000Z");
    assert_eq!(parsed["level"], "ERROR");
    assert_eq!(parsed["message"], "disk full");
    assert_eq!(parsed["args"], json!([{"free": 0}]));
    assert!(!line.contains('\n'));
}

#[test]
fn json_omits_empty_args() {
    let line = JsonFormatter
        .format(&record(LogLevel::INFO, &[json!("plain")]))
        .unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert!(parsed.get("args").is_none());
}

#[test]
fn json_labels_pseudo_levels() {
    let line = JsonFormatter
        .format(&record(LogLevel::Verbose, &[json!("v")]))
        .unwrap();
    assert!(line.contains(r#""level":"VERBOSE""#));
}

#[test]
fn plain_renders_single_line() {
    let line = PlainFormatter
        .format(&record(LogLevel::WARN, &[json!("slow"), json!([1, 2])]))
        .unwrap();
    assert_eq!(line, "2025-01-15T14:30:00.000Z [WARN] slow [1,2]");
}

#[test]
fn plain_uses_explicit_timestamp() {
    let line = PlainFormatter
        .format(&record(LogLevel::Log, &[json!("2024-03-01T12:00:00Z"), json!("boot")]))
        .unwrap();
    assert_eq!(line, "2024-03-01T12:00:00.000Z [LOG] boot");
}

#[test]
fn null_renders_nothing() {
    let line = NullFormatter
        .format(&record(LogLevel::FATAL, &[json!("x")]))
        .unwrap();
    assert!(line.is_empty());
}

#[test]
fn formatter_kind_parses_names() {
    use aglog::formatter::FormatterKind;
    assert_eq!("json".parse::<FormatterKind>().unwrap(), FormatterKind::Json);
    assert_eq!("TEXT".parse::<FormatterKind>().unwrap(), FormatterKind::Plain);
    assert_eq!("none".parse::<FormatterKind>().unwrap(), FormatterKind::Null);
    assert!("xml".parse::<FormatterKind>().is_err());
}
