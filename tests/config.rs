//! Tests for TOML configuration files.

use aglog::formatter::FormatterKind;
use aglog::sink::SinkKind;
use aglog::{BufferSink, Config, Error, Level, Logger, LoggerOptions};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_file_is_all_defaults() {
    let config = Config::parse("").unwrap();
    assert!(config.level.is_none());
    assert!(config.verbose.is_none());
    assert!(config.formatter.is_none());
    assert!(config.output.is_none());
    assert!(config.levels.is_empty());
}

#[test]
fn parses_all_fields() {
    let config = Config::parse(
        r#"
level = "warn"
verbose = true
formatter = "json"
output = "stderr"

[levels]
error = "stdout"

[apps.worker]
level = "debug"
"#,
    )
    .unwrap();

    assert_eq!(config.level.as_deref(), Some("warn"));
    assert_eq!(config.verbose, Some(true));
    assert_eq!(config.formatter, Some(FormatterKind::Json));
    assert_eq!(config.output, Some(SinkKind::Stderr));
    assert_eq!(config.levels.get("error"), Some(&SinkKind::Stdout));
    assert_eq!(config.apps["worker"].level.as_deref(), Some("debug"));
}

#[test]
fn bad_syntax_is_a_parse_error() {
    let err = Config::parse("level = ").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn unknown_formatter_is_a_parse_error() {
    assert!(Config::parse(r#"formatter = "xml""#).is_err());
}

#[test]
fn options_carry_level_and_verbose() {
    let config = Config::parse("level = \"debug\"\nverbose = true").unwrap();
    let logger = Logger::new(config.to_options());
    assert_eq!(logger.log_level(), Level::Debug);
    assert!(logger.is_verbose());
}

#[test]
fn unknown_and_pseudo_levels_are_skipped() {
    let logger = Logger::new(LoggerOptions::new().log_level(Level::Error));

    logger.set_logger_config(Config::parse(r#"level = "loud""#).unwrap().to_options());
    assert_eq!(logger.log_level(), Level::Error);

    logger.set_logger_config(Config::parse(r#"level = "verbose""#).unwrap().to_options());
    assert_eq!(logger.log_level(), Level::Error);
}

#[test]
fn output_overrides_every_level() {
    let buffer = BufferSink::new();
    let logger = Logger::new(
        LoggerOptions::new()
            .log_level(Level::Trace)
            .formatter(aglog::PlainFormatter)
            .default_logger(buffer.clone())
            .logger(Level::Error, buffer.clone()),
    );

    logger.set_logger_config(Config::parse(r#"output = "null""#).unwrap().to_options());
    logger.error(&[json!("gone")]).unwrap();
    logger.info(&[json!("gone")]).unwrap();
    assert!(buffer.is_empty());
    for level in Level::all() {
        assert!(logger.configuration().logger_map().is_overridden(level));
    }
}

#[test]
fn app_overrides_fold_over_top_level() {
    let config = Config::parse(
        r#"
level = "warn"
formatter = "plain"

[levels]
error = "stderr"

[apps.worker]
level = "trace"
formatter = "json"

[apps.worker.levels]
warn = "stdout"
"#,
    )
    .unwrap();

    let worker = config.for_app("worker");
    assert_eq!(worker.level.as_deref(), Some("trace"));
    assert_eq!(worker.formatter, Some(FormatterKind::Json));
    assert_eq!(worker.levels.len(), 2);

    let other = config.for_app("other");
    assert_eq!(other.level.as_deref(), Some("warn"));
    assert_eq!(other.formatter, Some(FormatterKind::Plain));
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "level = \"info\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.level.as_deref(), Some("info"));
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("missing.toml")).unwrap();
    assert!(config.level.is_none());
}

#[test]
fn load_from_unreadable_path_is_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    // A directory exists but cannot be read as a file.
    let err = Config::load_from(tmp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
