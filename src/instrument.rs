//! Instrumentation interfaces
//!
//! Code under test takes these traits instead of a concrete backend so that a
//! test can hand it a mock and assert on what was recorded.

/// Monotonically increasing value
pub trait Counter {
    /// Return a handle with `label_values` appended to this one's labels
    fn with(&self, label_values: &[&str]) -> Self
    where
        Self: Sized;

    fn add(&self, delta: f64);
}

/// Value that can be set or moved in either direction
pub trait Gauge {
    /// Return a handle with `label_values` appended to this one's labels
    fn with(&self, label_values: &[&str]) -> Self
    where
        Self: Sized;

    fn set(&self, value: f64);

    fn add(&self, delta: f64);
}

/// Distribution of observed values
pub trait Histogram {
    /// Return a handle with `label_values` appended to this one's labels
    fn with(&self, label_values: &[&str]) -> Self
    where
        Self: Sized;

    fn observe(&self, value: f64);
}
