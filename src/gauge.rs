//! Mock gauge

use crate::config::MetricConfig;
use crate::error::MetricsResult;
use crate::family::Handle;
use crate::instrument::Gauge;
use crate::labels::LabelTuple;
use std::collections::HashMap;

/// In-memory gauge for assertions in tests
///
/// `set` overwrites the value under a label key and `add` moves it by a
/// delta, so the final value depends on the order of mixed calls.
///
/// # Examples
///
/// ```
/// use metric_doubles::{MetricConfig, MockGauge};
///
/// let gauge = MockGauge::new(MetricConfig::new().with_delimiter("-"));
/// gauge.with(&["a"]).with(&["b"]).set(5.0);
/// gauge.with(&["a"]).with(&["b"]).add(3.0);
///
/// assert_eq!(gauge.get("a-b"), Some(8.0));
/// ```
#[derive(Debug, Clone)]
pub struct MockGauge {
    handle: Handle<f64>,
}

impl MockGauge {
    /// Create a root gauge
    ///
    /// The config is validated first; an invalid config is reported to its
    /// failure handler, which panics by default.
    pub fn new(config: MetricConfig) -> Self {
        Self {
            handle: Handle::root("gauge", config),
        }
    }

    /// Derive a gauge carrying additional labels
    ///
    /// Invalid labels are reported to the failure handler and produce a
    /// detached gauge that ignores updates.
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

    pub fn set(&self, value: f64) {
        self.handle.deliver(self.try_set(value));
    }

    pub fn try_set(&self, value: f64) -> MetricsResult<()> {
        self.handle.try_record(|current| *current = value)
    }

    pub fn add(&self, delta: f64) {
        self.handle.deliver(self.try_add(delta));
    }

    pub fn try_add(&self, delta: f64) -> MetricsResult<()> {
        self.handle.try_record(|current| *current += delta)
    }

    /// Every recorded value keyed by joined label values
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

impl Default for MockGauge {
    fn default() -> Self {
        Self::new(MetricConfig::default())
    }
}

impl Gauge for MockGauge {
    fn with(&self, label_values: &[&str]) -> Self {
        MockGauge::with(self, label_values)
    }

    fn set(&self, value: f64) {
        MockGauge::set(self, value)
    }

    fn add(&self, delta: f64) {
        MockGauge::add(self, delta)
    }
}
