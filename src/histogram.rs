//! Mock histogram
//!
//! Keeps every raw observation per label key in call order. Nothing is
//! bucketed or summarised; tests compare the observed sequence directly.

use crate::config::MetricConfig;
use crate::error::MetricsResult;
use crate::family::Handle;
use crate::instrument::Histogram;
use crate::labels::LabelTuple;
use std::collections::HashMap;

/// In-memory histogram for assertions in tests
///
/// # Examples
///
/// ```
/// use metric_doubles::MockHistogram;
///
/// let histogram = MockHistogram::default();
/// histogram.with(&["x"]).observe(1.0);
/// histogram.with(&["x"]).observe(10.0);
///
/// assert_eq!(histogram.get("x"), Some(vec![1.0, 10.0]));
/// ```
#[derive(Debug, Clone)]
pub struct MockHistogram {
    handle: Handle<Vec<f64>>,
}

impl MockHistogram {
    /// Create a root histogram
    ///
    /// The config is validated first; an invalid config is reported to its
    /// failure handler, which panics by default.
    pub fn new(config: MetricConfig) -> Self {
        Self {
            handle: Handle::root("histogram", config),
        }
    }

    /// Derive a histogram carrying additional labels
    ///
    /// Invalid labels are reported to the failure handler and produce a
    /// detached histogram that ignores observations.
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

    pub fn observe(&self, value: f64) {
        self.handle.deliver(self.try_observe(value));
    }

    pub fn try_observe(&self, value: f64) -> MetricsResult<()> {
        self.handle
            .try_record(|observations| observations.push(value))
    }

    /// Every observation sequence keyed by joined label values
    pub fn value(&self) -> HashMap<String, Vec<f64>> {
        self.handle.snapshot()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f64>> {
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

impl Default for MockHistogram {
    fn default() -> Self {
        Self::new(MetricConfig::default())
    }
}

impl Histogram for MockHistogram {
    fn with(&self, label_values: &[&str]) -> Self {
        MockHistogram::with(self, label_values)
    }

    fn observe(&self, value: f64) {
        MockHistogram::observe(self, value)
    }
}
