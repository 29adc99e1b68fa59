//! Configuration for mock metrics
//!
//! A `MetricConfig` is built in code with the builder methods, or loaded from
//! a TOML fixture. Each builder method sets exactly one field.

use crate::error::ConfigError;
use crate::failure::FailureHandler;
use crate::labels::LabelStyle;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Delimiter used to join label values when none is configured
pub const DEFAULT_DELIMITER: &str = ".";

/// Settings shared by every handle derived from one root
///
/// # Example TOML
///
/// ```toml
/// delimiter = "-"
/// expect_labels = ["method", "status"]
/// label_style = "pairs"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    #[serde(default = "default_delimiter")]
    delimiter: String,
    /// Absent means "do not validate"; empty means "expect no labels"
    #[serde(default)]
    expect_labels: Option<Vec<String>>,
    #[serde(default)]
    label_style: LabelStyle,
    #[serde(skip)]
    failure_handler: FailureHandler,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            expect_labels: None,
            label_style: LabelStyle::default(),
            failure_handler: FailureHandler::default(),
        }
    }
}

impl MetricConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string placed between label values in storage keys
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the callback that receives recording failures
    pub fn with_failure_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&crate::error::MetricsError) + Send + Sync + 'static,
    {
        self.failure_handler = FailureHandler::new(handler);
        self
    }

    /// Install an already built handler, e.g. from a `FailureRecorder`
    pub fn with_handler(mut self, handler: FailureHandler) -> Self {
        self.failure_handler = handler;
        self
    }

    /// Set the label schema; an empty list means no labels are allowed
    pub fn expect_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expect_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Choose how `with` arguments are read
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn expected_labels(&self) -> Option<&[String]> {
        self.expect_labels.as_deref()
    }

    pub fn label_style(&self) -> LabelStyle {
        self.label_style
    }

    pub fn failure_handler(&self) -> &FailureHandler {
        &self.failure_handler
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_display = path.as_ref().display().to_string();

        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
                path: path_display.clone(),
                source,
            })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path_display.clone(),
            source,
        })?;

        config.validate()?;

        tracing::debug!(
            path = %path_display,
            delimiter = %config.delimiter,
            label_style = ?config.label_style,
            "Loaded mock metric configuration"
        );

        Ok(config)
    }

    /// Validate configuration after parsing
    ///
    /// Called by `from_file()` and `from_str()`, and by every mock
    /// constructor for builder-made configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(labels) = &self.expect_labels else {
            return Ok(());
        };

        if let Some(position) = labels.iter().position(String::is_empty) {
            return Err(ConfigError::Invalid {
                reason: format!("expected label at position {} is empty", position),
            });
        }

        if self.label_style == LabelStyle::Pairs {
            let mut seen = HashSet::new();
            if let Some(duplicate) = labels.iter().find(|l| !seen.insert(l.as_str())) {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "expected label '{}' appears more than once; \
                        paired labels are matched by name",
                        duplicate
                    ),
                });
            }
        }

        Ok(())
    }
}

impl FromStr for MetricConfig {
    type Err = ConfigError;

    fn from_str(toml_str: &str) -> Result<Self, Self::Err> {
        let config: MetricConfig =
            toml::from_str(toml_str).map_err(|source| ConfigError::Parse {
                path: "<string>".to_string(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }
}
