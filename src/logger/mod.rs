//! The logger facade: level-named methods that run the filter, shape the record,
//! format it, and hand the result to the sink resolved for that level.

mod config;
mod map;

pub use config::{Configuration, LoggerOptions};
pub use map::{Entry, LoggerFunctionMap};

use crate::error::Error;
use crate::formatter::Formatter;
use crate::internal;
use crate::level::{Level, LogLevel, should_output};
use crate::record;
use crate::sink::Sink;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A configurable logger.
///
/// Usually obtained from the process-wide registry ([`crate::create_logger`],
/// [`crate::get_logger`]), but can also be built standalone with [`Logger::new`].
///
/// Calls are synchronous. The configuration lock is released before the formatter and
/// sink run, so either may call back into the logger.
pub struct Logger {
    config: RwLock<Configuration>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.read())
            .finish()
    }
}

impl Logger {
    /// Starts from the silent defaults and applies `options` on top.
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        let mut config = Configuration::default();
        config.apply(options);
        Self {
            config: RwLock::new(config),
        }
    }

    // Every mutation leaves the configuration consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Configuration> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Configuration> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Core dispatch shared by every level method.
    ///
    /// Blocked levels return without side effects. An empty formatted string is treated
    /// as nothing to say and never reaches the sink.
    ///
    /// # Errors
    /// `Error::Formatter` or `Error::Sink` carrying the collaborator's own error.
    pub fn emit(&self, level: LogLevel, args: &[Value]) -> Result<(), Error> {
        let (formatter, sink) = {
            let config = self.read();
            if !should_output(config.log_level(), config.is_verbose(), level) {
                return Ok(());
            }
            // `Log` and `Verbose` records are routed like `Info`.
            let route = level.standard().unwrap_or(Level::Info);
            (config.formatter(), config.resolve(route))
        };

        let record = record::shape(level, args);
        let message = formatter.format(&record).map_err(Error::Formatter)?;
        if message.is_empty() {
            return Ok(());
        }
        sink.write(&message).map_err(Error::Sink)
    }

    /// The process cannot continue.
    ///
    /// # Errors
    /// See [`Self::emit`].
    pub fn fatal(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::FATAL, args)
    }

    /// Unrecoverable failures.
    ///
    /// # Errors
    /// See [`Self::emit`].
    pub fn error(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::ERROR, args)
    }

    /// Non-fatal anomalies.
    ///
    /// # Errors
    /// See [`Self::emit`].
    pub fn warn(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::WARN, args)
    }

    /// Operational milestones.
    ///
    /// # Errors
    /// See [`Self::emit`].
    pub fn info(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::INFO, args)
    }

    /// # Errors
    /// See [`Self::emit`].
    pub fn debug(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::DEBUG, args)
    }

    /// # Errors
    /// See [`Self::emit`].
    pub fn trace(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::TRACE, args)
    }

    /// Output that must always be visible, whatever the threshold or verbose flag.
    ///
    /// # Errors
    /// See [`Self::emit`].
    pub fn log(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::Log, args)
    }

    /// Output governed by the verbose flag alone, even when the threshold is `Off`.
    ///
    /// # Errors
    /// See [`Self::emit`].
    pub fn verbose(&self, args: &[Value]) -> Result<(), Error> {
        self.emit(LogLevel::Verbose, args)
    }

    /// Whether a call at `level` would get past the filter right now.
    #[must_use]
    pub fn is_enabled(&self, level: impl Into<LogLevel>) -> bool {
        let config = self.read();
        should_output(config.log_level(), config.is_verbose(), level.into())
    }

    /// Applies `options` to the live configuration, same rules as at creation.
    pub fn set_logger_config(&self, options: LoggerOptions) {
        self.write().apply(options);
    }

    /// Installs a per-level sink. Returns `false` for a pseudo-level, leaving the map unchanged.
    pub fn set_logger_function(
        &self,
        level: impl Into<LogLevel>,
        sink: impl Sink + 'static,
    ) -> bool {
        let level = level.into();
        let installed = self.write().set_logger(level, Arc::new(sink));
        if !installed {
            internal::debug("LOGGER", &format!("Rejected logger for level '{level}'"));
        }
        installed
    }

    /// Replaces the fallback sink; levels without an explicit override follow it.
    pub fn set_default_logger(&self, sink: impl Sink + 'static) {
        self.write().set_default_logger(Arc::new(sink));
    }

    pub fn set_formatter(&self, formatter: impl Formatter + 'static) {
        self.write().set_formatter(Arc::new(formatter));
    }

    /// Sets the threshold directly.
    ///
    /// # Errors
    /// `Error::InvalidLevel` for a pseudo-level; the current threshold is kept.
    pub fn set_log_level(&self, level: impl Into<LogLevel>) -> Result<(), Error> {
        self.write().set_log_level(level)
    }

    #[must_use]
    pub fn log_level(&self) -> Level {
        self.read().log_level()
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.write().set_verbose(verbose);
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.read().should_output_verbose()
    }

    /// Snapshot of the current configuration; later changes to the logger don't affect it.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        self.read().clone()
    }
}
