//! metric-doubles - In-memory metric doubles for unit tests
//!
//! This library provides counter, gauge and histogram implementations that
//! record values in memory, keyed by their joined label values, so tests can
//! assert on what instrumented code recorded instead of running a metrics
//! backend.

pub mod config;
pub mod counter;
pub mod error;
pub mod failure;
mod family;
pub mod gauge;
pub mod histogram;
pub mod instrument;
pub mod labels;
pub mod telemetry;

pub use config::{DEFAULT_DELIMITER, MetricConfig};
pub use counter::MockCounter;
pub use error::{ConfigError, MetricsError, MetricsResult};
pub use failure::{FailureHandler, FailureRecorder};
pub use gauge::MockGauge;
pub use histogram::MockHistogram;
pub use instrument::{Counter, Gauge, Histogram};
pub use labels::{LabelStyle, LabelTuple};
