//! The mutable state behind a logger and the bulk options used to change it.

use super::map::LoggerFunctionMap;
use crate::formatter::{Formatter, NullFormatter, SharedFormatter};
use crate::internal;
use crate::level::{Level, LogLevel};
use crate::sink::{ConsoleSink, NullSink, SharedSink, Sink};
use std::fmt;
use std::sync::Arc;

/// Everything a logger consults on each call.
///
/// Starts silent: level `Off`, verbose off, `NullSink` as default, `NullFormatter`,
/// and every map slot unset.
#[derive(Clone)]
pub struct Configuration {
    log_level: Level,
    verbose: bool,
    default_logger: SharedSink,
    formatter: SharedFormatter,
    logger_map: LoggerFunctionMap,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: Level::Off,
            verbose: false,
            default_logger: Arc::new(NullSink),
            formatter: Arc::new(NullFormatter),
            logger_map: LoggerFunctionMap::new(),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("log_level", &self.log_level)
            .field("verbose", &self.verbose)
            .field("logger_map", &self.logger_map)
            .finish_non_exhaustive()
    }
}

impl Configuration {
    #[must_use]
    pub const fn log_level(&self) -> Level {
        self.log_level
    }

    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Pure read of the verbose flag; the threshold plays no part.
    #[must_use]
    pub const fn should_output_verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn default_logger(&self) -> SharedSink {
        SharedSink::clone(&self.default_logger)
    }

    #[must_use]
    pub fn formatter(&self) -> SharedFormatter {
        SharedFormatter::clone(&self.formatter)
    }

    #[must_use]
    pub const fn logger_map(&self) -> &LoggerFunctionMap {
        &self.logger_map
    }

    /// Sets the threshold.
    ///
    /// # Errors
    /// `Error::InvalidLevel` for a pseudo-level; the stored level is left as it was.
    pub fn set_log_level(&mut self, level: impl Into<LogLevel>) -> Result<(), crate::Error> {
        self.log_level = Level::try_from(level.into())?;
        Ok(())
    }

    pub const fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Unset map slots follow the new default immediately; explicit overrides stay.
    pub fn set_default_logger(&mut self, sink: SharedSink) {
        self.default_logger = sink;
    }

    pub fn set_formatter(&mut self, formatter: SharedFormatter) {
        self.formatter = formatter;
    }

    /// Installs a per-level override. Returns `false` and changes nothing for a pseudo-level.
    pub fn set_logger(&mut self, level: impl Into<LogLevel>, sink: SharedSink) -> bool {
        self.logger_map.set(level, sink)
    }

    /// The sink a message at `level` goes to.
    #[must_use]
    pub fn resolve(&self, level: Level) -> SharedSink {
        self.logger_map.resolve(level, &self.default_logger)
    }

    /// Applies every field present in `options`, in a fixed order: default sink, formatter,
    /// level, verbose flag, then map entries merged over the current map.
    ///
    /// Unlike [`Self::set_log_level`], an invalid level here is skipped rather than raised.
    pub fn apply(&mut self, options: LoggerOptions) {
        if let Some(sink) = options.default_logger {
            self.set_default_logger(sink);
        }
        if let Some(formatter) = options.formatter {
            self.set_formatter(formatter);
        }
        if let Some(level) = options.log_level
            && let Err(e) = self.set_log_level(level)
        {
            internal::warn("CONFIG", &format!("Ignoring log level: {e}"));
        }
        if let Some(verbose) = options.verbose {
            self.set_verbose(verbose);
        }
        for (level, sink) in options.logger_map {
            if !self.set_logger(level, sink) {
                internal::warn(
                    "CONFIG",
                    &format!("Ignoring logger for pseudo-level '{level}'"),
                );
            }
        }
    }
}

/// Partial configuration: only the fields that are set get applied.
///
/// Used for `create_logger`, `set_logger_config`, and config files alike.
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub(crate) default_logger: Option<SharedSink>,
    pub(crate) formatter: Option<SharedFormatter>,
    pub(crate) log_level: Option<LogLevel>,
    pub(crate) verbose: Option<bool>,
    pub(crate) logger_map: Vec<(LogLevel, SharedSink)>,
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("default_logger", &self.default_logger.is_some())
            .field("formatter", &self.formatter.is_some())
            .field("log_level", &self.log_level)
            .field("verbose", &self.verbose)
            .field(
                "logger_map",
                &self.logger_map.iter().map(|(l, _)| *l).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pseudo-levels are accepted here and dropped when the options are applied.
    #[must_use]
    pub fn log_level(mut self, level: impl Into<LogLevel>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Sink for every level without an explicit override.
    #[must_use]
    pub fn default_logger(mut self, sink: impl Sink + 'static) -> Self {
        self.default_logger = Some(Arc::new(sink));
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Per-level override, merged into the existing map when applied.
    #[must_use]
    pub fn logger(mut self, level: impl Into<LogLevel>, sink: impl Sink + 'static) -> Self {
        let sink: SharedSink = Arc::new(sink);
        self.logger_map.push((level.into(), sink));
        self
    }

    /// Console output routed per level: fatal, error and warn to stderr, the rest to stdout.
    #[must_use]
    pub fn console(mut self) -> Self {
        self.default_logger = Some(Arc::new(ConsoleSink::stdout()));
        for level in [Level::Fatal, Level::Error, Level::Warn] {
            let sink: SharedSink = Arc::new(ConsoleSink::for_level(level));
            self.logger_map.push((level.into(), sink));
        }
        self
    }

    pub(crate) fn shared_default_logger(mut self, sink: SharedSink) -> Self {
        self.default_logger = Some(sink);
        self
    }

    pub(crate) fn shared_formatter(mut self, formatter: SharedFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }
}
