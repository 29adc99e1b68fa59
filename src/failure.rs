//! Failure delivery for mock metrics
//!
//! Recording methods never return errors. Every failure is handed to a
//! [`FailureHandler`] owned by the metric's root. The default handler panics,
//! which is what a test expects when instrumented code misuses a metric.
//! Tests that want to inspect failures instead install a handler from
//! [`FailureRecorder`].

use crate::error::MetricsError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Callback invoked synchronously with each recording failure
#[derive(Clone)]
pub struct FailureHandler(Arc<dyn Fn(&MetricsError) + Send + Sync>);

impl FailureHandler {
    /// Wrap a closure as a failure handler
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&MetricsError) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Handler that discards every failure
    pub fn ignore() -> Self {
        Self::new(|_| {})
    }

    pub(crate) fn report(&self, metric: &'static str, err: &MetricsError) {
        tracing::warn!(metric, error = %err, "Mock metric rejected a recording");
        (self.0)(err)
    }
}

impl Default for FailureHandler {
    /// Panics with the failure message
    fn default() -> Self {
        Self::new(|err| panic!("{err}"))
    }
}

impl fmt::Debug for FailureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FailureHandler(..)")
    }
}

/// Collects failures so tests can assert on them without panicking
///
/// Cloning shares the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct FailureRecorder {
    failures: Arc<Mutex<Vec<MetricsError>>>,
}

impl FailureRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that appends every failure to this recorder
    pub fn handler(&self) -> FailureHandler {
        let failures = Arc::clone(&self.failures);
        FailureHandler::new(move |err| {
            failures
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(err.clone());
        })
    }

    /// Copy of every failure recorded so far, oldest first
    pub fn failures(&self) -> Vec<MetricsError> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn clear(&self) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
