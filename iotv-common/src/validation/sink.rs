//! Destinations for informational trace output

use std::sync::{Arc, Mutex, PoisonError};

/// Receives the informational line a validator emits on success
///
/// Implementations must tolerate concurrent calls; ordering across threads
/// is not guaranteed.
pub trait TraceSink: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards messages to `tracing` at INFO level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "iotv_common::validation", "{}", message);
    }
}

/// Append-only in-memory sink for capturing output in tests
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl TraceSink for MemorySink {
    fn info(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Arc<T> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}
