//! Mock counter
//!
//! Sums every delta added under a label key. Deltas must be finite and
//! non-negative.

use crate::config::MetricConfig;
use crate::error::{MetricsError, MetricsResult};
use crate::family::Handle;
use crate::instrument::Counter;
use crate::labels::LabelTuple;
use std::collections::HashMap;

/// In-memory counter for assertions in tests
///
/// # Examples
///
/// ```
/// use metric_doubles::MockCounter;
///
/// let counter = MockCounter::default();
/// counter.with(&["label1", "label2"]).add(1.0);
///
/// assert_eq!(counter.value().get("label1.label2"), Some(&1.0));
/// ```
#[derive(Debug, Clone)]
pub struct MockCounter {
    handle: Handle<f64>,
}

impl MockCounter {
    /// Create a root counter
    ///
    /// The config is validated first; an invalid config is reported to its
    /// failure handler, which panics by default.
    pub fn new(config: MetricConfig) -> Self {
        Self {
            handle: Handle::root("counter", config),
        }
    }

    /// Derive a counter carrying additional labels
    ///
    /// Invalid labels are reported to the failure handler and produce a
    /// detached counter that ignores updates.
    pub fn with(&self, label_values: &[&str]) -> Self {
        Self {
            handle: self.handle.derive(label_values),
        }
    }

    pub fn try_with(&self, label_values: &[&str]) -> MetricsResult<Self> {
        Ok(Self {
            handle: self.handle.try_derive(label_values)?,
        })
    }

    /// Add `delta` under this counter's label key
    pub fn add(&self, delta: f64) {
        self.handle.deliver(self.try_add(delta));
    }

    /// # Errors
    ///
    /// `NegativeDelta`/`NonFiniteDelta` for an invalid delta,
    /// `InvalidLabelValues` when the labels do not match the schema, and
    /// `DetachedHandle` on a detached counter.
    pub fn try_add(&self, delta: f64) -> MetricsResult<()> {
        self.handle.ensure_attached()?;
        if !delta.is_finite() {
            return Err(MetricsError::NonFiniteDelta { delta });
        }
        if delta < 0.0 {
            return Err(MetricsError::NegativeDelta { delta });
        }
        self.handle.try_record(|total| *total += delta)
    }

    /// Every recorded total keyed by joined label values
    pub fn value(&self) -> HashMap<String, f64> {
        self.handle.snapshot()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.handle.get(key)
    }

    pub fn labels(&self) -> &[LabelTuple] {
        self.handle.labels()
    }

    pub fn is_detached(&self) -> bool {
        self.handle.is_detached()
    }

    pub fn config(&self) -> &MetricConfig {
        self.handle.config()
    }
}

impl Default for MockCounter {
    fn default() -> Self {
        Self::new(MetricConfig::default())
    }
}

impl Counter for MockCounter {
    fn with(&self, label_values: &[&str]) -> Self {
        MockCounter::with(self, label_values)
    }

    fn add(&self, delta: f64) {
        MockCounter::add(self, delta)
    }
}
