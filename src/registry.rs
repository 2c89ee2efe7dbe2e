//! Process-wide logger instance.
//!
//! [`Registry`] is an ordinary value holding at most one logger; the free functions
//! [`create_logger`], [`get_logger`] and [`reset_singleton`] operate on a single static
//! registry. Tests that want isolation can build their own `Registry` instead.

use crate::error::Error;
use crate::internal;
use crate::logger::{Logger, LoggerOptions};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Holds zero or one active logger.
#[derive(Debug, Default)]
pub struct Registry {
    slot: Mutex<Option<Arc<Logger>>>,
}

impl Registry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<Logger>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates the instance from `options`.
    ///
    /// Not idempotent: use [`Self::get`] to reach an existing instance.
    ///
    /// # Errors
    /// `Error::AlreadyCreated` if an instance exists; it is left untouched.
    pub fn create(&self, options: LoggerOptions) -> Result<Arc<Logger>, Error> {
        let mut slot = self.lock();
        if slot.is_some() {
            internal::warn("REGISTRY", "create called while a logger is active");
            return Err(Error::AlreadyCreated);
        }
        let logger = Arc::new(Logger::new(options));
        *slot = Some(Arc::clone(&logger));
        internal::debug(
            "REGISTRY",
            &format!("Logger created at level {}", logger.log_level()),
        );
        Ok(logger)
    }

    /// # Errors
    /// `Error::NotCreated` before [`Self::create`] or after [`Self::reset`].
    pub fn get(&self) -> Result<Arc<Logger>, Error> {
        self.lock().clone().ok_or(Error::NotCreated)
    }

    /// Drops the held instance. Handles obtained earlier keep working on their own copy.
    pub fn reset(&self) {
        if self.lock().take().is_some() {
            internal::debug("REGISTRY", "Logger reset");
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lock().is_some()
    }
}

static GLOBAL: Registry = Registry::new();

/// Creates the process-wide logger.
///
/// # Errors
/// `Error::AlreadyCreated` if one exists.
pub fn create_logger(options: LoggerOptions) -> Result<Arc<Logger>, Error> {
    internal::init();
    GLOBAL.create(options)
}

/// Returns the process-wide logger.
///
/// # Errors
/// `Error::NotCreated` if [`create_logger`] has not run since the last reset.
pub fn get_logger() -> Result<Arc<Logger>, Error> {
    GLOBAL.get()
}

/// Discards the process-wide logger so the next [`create_logger`] starts fresh.
pub fn reset_singleton() {
    GLOBAL.reset();
}
