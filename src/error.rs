//! Error types for metric-doubles
//!
//! Recording failures (`MetricsError`) are delivered to the configured
//! failure handler. Config loading failures (`ConfigError`) are returned
//! to the caller and keep their underlying source.

use thiserror::Error;

/// Failure raised while recording into a mock metric
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("labelValues is invalid - {reason}")]
    InvalidLabelValues { reason: String },

    #[error("delta must be non-negative, got: {delta}")]
    NegativeDelta { delta: f64 },

    #[error("delta must be finite, got: {delta}")]
    NonFiniteDelta { delta: f64 },

    #[error("handle is detached: it was produced by a rejected with() call")]
    DetachedHandle,

    #[error("metric configuration is invalid - {reason}")]
    InvalidConfig { reason: String },
}

impl MetricsError {
    pub(crate) fn invalid_labels(reason: impl Into<String>) -> Self {
        Self::InvalidLabelValues {
            reason: reason.into(),
        }
    }

    /// True for every failure caused by the shape of the supplied labels
    pub fn is_invalid_labels(&self) -> bool {
        matches!(self, Self::InvalidLabelValues { .. })
    }
}

/// Failure raised while loading a `MetricConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid metric configuration: {reason}")]
    Invalid { reason: String },
}

/// Convenience type alias for recording results
pub type MetricsResult<T> = Result<T, MetricsError>;
