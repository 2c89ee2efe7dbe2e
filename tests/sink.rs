//! Tests for the built-in sinks.

use aglog::sink::{SinkKind, Stream};
use aglog::{BufferSink, ConsoleSink, Level, NullSink, Sink};

#[test]
fn buffer_clones_share_storage() {
    let buffer = BufferSink::new();
    let handle = buffer.clone();
    buffer.write("one").unwrap();
    handle.write("two").unwrap();

    assert_eq!(handle.messages(), vec!["one", "two"]);
    assert_eq!(buffer.last().as_deref(), Some("two"));

    handle.clear();
    assert!(buffer.is_empty());
}

#[test]
fn failing_buffer_records_then_errors() {
    let buffer = BufferSink::failing("nope");
    let err = buffer.write("attempt").unwrap_err();
    assert_eq!(err.to_string(), "nope");
    assert_eq!(buffer.len(), 1);
}

#[test]
fn null_sink_accepts_everything() {
    assert!(NullSink.write("anything").is_ok());
}

#[test]
fn console_routes_severe_levels_to_stderr() {
    for level in [Level::Fatal, Level::Error, Level::Warn] {
        assert_eq!(ConsoleSink::for_level(level).stream(), Stream::Stderr);
    }
    for level in [Level::Off, Level::Info, Level::Debug, Level::Trace] {
        assert_eq!(ConsoleSink::for_level(level).stream(), Stream::Stdout);
    }
}

#[test]
fn sink_kind_parses_names() {
    assert_eq!("console".parse::<SinkKind>().unwrap(), SinkKind::Console);
    assert_eq!("STDERR".parse::<SinkKind>().unwrap(), SinkKind::Stderr);
    assert_eq!("none".parse::<SinkKind>().unwrap(), SinkKind::Null);
    assert!("syslog".parse::<SinkKind>().is_err());
}
