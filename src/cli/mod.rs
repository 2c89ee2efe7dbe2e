//! CLI module for aglog.
//!
//! Emits one log record from the command line through the process-wide logger,
//! layering defaults, the config file, and flags in that order.

use crate::config::Config;
use crate::formatter::{FormatterKind, PlainFormatter};
use crate::internal;
use crate::level::{Level, LogLevel};
use crate::logger::LoggerOptions;
use crate::registry;
use crate::sink::SinkKind;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

/// aglog - Log messages from the command line.
#[derive(Debug, Parser)]
#[command(name = "aglog", version, about = "Log messages from the command line")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Apply `[apps.<NAME>]` overrides from the config file
    #[arg(long, value_name = "NAME")]
    pub app: Option<String>,

    /// Threshold (off, fatal, error, warn, info, debug, trace)
    #[arg(long, value_parser = parse_level)]
    pub level: Option<Level>,

    /// Let `verbose` records through
    #[arg(long)]
    pub verbose: bool,

    /// Formatter (json, plain, null)
    #[arg(long, value_parser = parse_formatter)]
    pub format: Option<FormatterKind>,

    /// Output (console, stdout, stderr, null)
    #[arg(long, value_parser = parse_output)]
    pub output: Option<SinkKind>,

    /// Print aglog's own diagnostics to stderr
    #[arg(long)]
    pub debug: bool,

    /// Level of the record (a standard level, `log`, or `verbose`)
    #[arg(value_parser = parse_record_level)]
    pub record_level: LogLevel,

    /// Message parts; JSON objects and arrays are kept as structured arguments
    pub message: Vec<String>,
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|e: crate::level::ParseLevelError| e.to_string())
}

fn parse_record_level(s: &str) -> Result<LogLevel, String> {
    s.parse().map_err(|e: crate::level::ParseLevelError| e.to_string())
}

fn parse_formatter(s: &str) -> Result<FormatterKind, String> {
    s.parse()
}

fn parse_output(s: &str) -> Result<SinkKind, String> {
    s.parse()
}

/// Objects and arrays become structured arguments; anything else stays a string.
#[must_use]
pub fn parse_arg(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

impl Cli {
    /// Flag values, applied last so they win over the config file.
    fn options(&self) -> LoggerOptions {
        let mut options = Config {
            level: self.level.map(|level| level.as_str().to_string()),
            formatter: self.format,
            output: self.output,
            ..Config::default()
        }
        .to_options();
        if self.verbose {
            options = options.verbose(true);
        }
        options
    }
}

/// Runs one invocation.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    if cli.debug {
        internal::init_with_level(Level::Trace);
    } else {
        internal::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = match cli.app.as_deref() {
        Some(app) => config.for_app(app),
        None => config,
    };

    let defaults = LoggerOptions::new()
        .console()
        .formatter(PlainFormatter)
        .log_level(Level::Info);
    let logger = match registry::create_logger(defaults) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error creating logger: {e}");
            return ExitCode::FAILURE;
        }
    };
    logger.set_logger_config(config.to_options());
    logger.set_logger_config(cli.options());

    let args: Vec<Value> = cli.message.iter().map(String::as_str).map(parse_arg).collect();
    match logger.emit(cli.record_level, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Emit failed: {e}"));
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
