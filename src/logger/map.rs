//! Per-level sink table with fallback to the default sink.

use crate::level::{Level, LogLevel};
use crate::sink::SharedSink;
use std::fmt;

/// One slot of the table.
///
/// `Unset` is the only "not configured" marker: an explicitly installed `NullSink`
/// is a real override and is never treated as unset.
#[derive(Clone, Default)]
pub enum Entry {
    #[default]
    Unset,
    Sink(SharedSink),
}

impl Entry {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Sink(_) => f.write_str("Sink(..)"),
        }
    }
}

/// Fixed-size table indexed by standard level, `Off` included.
///
/// Unset slots follow whatever the current default sink is, so replacing the default
/// re-seeds them without touching explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct LoggerFunctionMap {
    entries: [Entry; Level::COUNT],
}

impl LoggerFunctionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `sink` for `level`. Pseudo-levels are refused and leave the table unchanged.
    pub fn set(&mut self, level: impl Into<LogLevel>, sink: SharedSink) -> bool {
        let Some(level) = level.into().standard() else {
            return false;
        };
        self.entries[level.index()] = Entry::Sink(sink);
        true
    }

    /// Returns `level` to the unset state so it follows the default sink again.
    pub fn clear(&mut self, level: Level) {
        self.entries[level.index()] = Entry::Unset;
    }

    #[must_use]
    pub fn entry(&self, level: Level) -> &Entry {
        &self.entries[level.index()]
    }

    /// Whether `level` has an explicit override.
    #[must_use]
    pub fn is_overridden(&self, level: Level) -> bool {
        !self.entries[level.index()].is_unset()
    }

    /// The explicit override for `level`, or `default` when none is installed.
    #[must_use]
    pub fn resolve(&self, level: Level, default: &SharedSink) -> SharedSink {
        match &self.entries[level.index()] {
            Entry::Sink(sink) => SharedSink::clone(sink),
            Entry::Unset => SharedSink::clone(default),
        }
    }
}
