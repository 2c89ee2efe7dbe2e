//! In-memory sink for tests and for callers that inspect output after the fact.

use super::Sink;
use crate::error::BoxError;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Collects messages in memory. Clones share the same buffer, so a test can keep one
/// handle while the logger owns another.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    messages: Arc<Mutex<Vec<String>>>,
    /// When set, every write is recorded and then reported as a failure with this reason.
    failure: Option<String>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes always fail, for exercising error propagation.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            messages: Arc::default(),
            failure: Some(reason.into()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything written so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write(&self, message: &str) -> Result<(), BoxError> {
        self.lock().push(message.to_string());
        match &self.failure {
            Some(reason) => Err(Box::new(io::Error::other(reason.clone()))),
            None => Ok(()),
        }
    }
}
