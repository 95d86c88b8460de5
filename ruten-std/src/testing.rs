//! Testing utilities for Ruten.
//!
//! [`RecordingStrategy`] is an execution strategy that records every
//! invocation instead of running anything, so tests can assert exactly what
//! the engine resolved and with which parameters.

use ruten_core::{Action, ExecutionStrategy, RouteParams};
use std::sync::{Arc, Mutex};

/// A strategy that records all `(action, params)` invocations.
///
/// Clones share the same recording, so a test can keep one handle while the
/// engine owns the other.
///
/// # Example
///
/// ```rust,ignore
/// let strategy: RecordingStrategy<()> = RecordingStrategy::new();
/// let engine = DispatchEngine::new(collection, strategy.clone());
///
/// engine.dispatch("GET", "/users/42")?;
///
/// let calls = strategy.calls();
/// assert_eq!(calls.len(), 1);
/// ```
pub struct RecordingStrategy<R> {
    calls: Arc<Mutex<Vec<(Action<R>, RouteParams)>>>,
}

impl<R> RecordingStrategy<R> {
    /// Create a strategy with an empty recording.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded invocations, in order.
    pub fn calls(&self) -> Vec<(Action<R>, RouteParams)> {
        self.calls.lock().unwrap().clone()
    }

    /// The number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear the recording.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<R> Default for RecordingStrategy<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RecordingStrategy<R> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<R> ExecutionStrategy<R> for RecordingStrategy<R> {
    type Output = ();

    fn invoke(&self, action: &Action<R>, params: RouteParams) -> Self::Output {
        self.calls.lock().unwrap().push((action.clone(), params));
    }
}
