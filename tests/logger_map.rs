//! Tests for per-level sink resolution.

use aglog::logger::Entry;
use aglog::{BufferSink, Level, LogLevel, LoggerFunctionMap, NullSink, SharedSink, Sink};
use std::sync::Arc;

fn shared(sink: &BufferSink) -> SharedSink {
    Arc::new(sink.clone())
}

#[test]
fn new_map_is_all_unset() {
    let map = LoggerFunctionMap::new();
    for level in Level::all() {
        assert!(map.entry(level).is_unset());
        assert!(!map.is_overridden(level));
    }
}

#[test]
fn unset_entry_resolves_to_default() {
    let default = BufferSink::new();
    let map = LoggerFunctionMap::new();
    let resolved = map.resolve(Level::Info, &shared(&default));
    resolved.write("hello").unwrap();
    assert_eq!(default.messages(), vec!["hello"]);
}

#[test]
fn explicit_entry_wins_over_default() {
    let default = BufferSink::new();
    let errors = BufferSink::new();
    let mut map = LoggerFunctionMap::new();
    assert!(map.set(Level::Error, shared(&errors)));

    map.resolve(Level::Error, &shared(&default))
        .write("boom")
        .unwrap();
    map.resolve(Level::Warn, &shared(&default))
        .write("careful")
        .unwrap();

    assert_eq!(errors.messages(), vec!["boom"]);
    assert_eq!(default.messages(), vec!["careful"]);
}

#[test]
fn explicit_null_sink_is_not_the_sentinel() {
    let default = BufferSink::new();
    let mut map = LoggerFunctionMap::new();
    assert!(map.set(Level::Debug, Arc::new(NullSink)));
    assert!(matches!(map.entry(Level::Debug), Entry::Sink(_)));

    map.resolve(Level::Debug, &shared(&default))
        .write("dropped")
        .unwrap();
    assert!(default.is_empty());
}

#[test]
fn pseudo_level_is_rejected_and_map_unchanged() {
    let mut map = LoggerFunctionMap::new();
    for pseudo in [LogLevel::Verbose, LogLevel::Log, LogLevel::Default] {
        assert!(!map.set(pseudo, Arc::new(NullSink)));
    }
    for level in Level::all() {
        assert!(map.entry(level).is_unset());
    }
}

#[test]
fn clear_restores_fallback() {
    let default = BufferSink::new();
    let mut map = LoggerFunctionMap::new();
    map.set(Level::Info, Arc::new(NullSink));
    map.clear(Level::Info);

    map.resolve(Level::Info, &shared(&default))
        .write("back")
        .unwrap();
    assert_eq!(default.len(), 1);
}

#[test]
fn off_has_a_slot() {
    let sink = BufferSink::new();
    let mut map = LoggerFunctionMap::new();
    assert!(map.set(Level::Off, shared(&sink)));
    assert!(map.is_overridden(Level::Off));
}
