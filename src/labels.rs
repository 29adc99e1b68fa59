//! Label tuples shared by every mock metric
//!
//! Call sites hand `with` a flat list of strings. Depending on the root's
//! [`LabelStyle`] that list is read either as bare values or as
//! `name, value, name, value, ...` pairs. Either way the result is an ordered
//! sequence of [`LabelTuple`]s which is validated against the optional schema
//! and joined into the storage key.

use crate::error::{MetricsError, MetricsResult};
use serde::{Deserialize, Serialize};

/// How the arguments of `with` are interpreted
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Every argument is a label value; only arity is checked against the schema
    #[default]
    Values,
    /// Arguments alternate label name and label value
    Pairs,
}

/// One label name with its value
///
/// Tuples produced from bare values carry an empty name. Paired arguments
/// never produce an empty name, so an empty name always means "unnamed".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelTuple {
    label: String,
    value: String,
}

impl LabelTuple {
    /// Create a named tuple
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an unnamed tuple holding only a value
    pub fn unnamed(value: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this tuple came from a bare value
    pub fn is_unnamed(&self) -> bool {
        self.label.is_empty()
    }
}

/// Parse `with` arguments according to `style`
pub fn parse(style: LabelStyle, args: &[&str]) -> MetricsResult<Vec<LabelTuple>> {
    match style {
        LabelStyle::Values => Ok(from_values(args)),
        LabelStyle::Pairs => pair_up(args),
    }
}

/// Wrap bare values as unnamed tuples, preserving order
pub fn from_values(values: &[&str]) -> Vec<LabelTuple> {
    values.iter().map(|v| LabelTuple::unnamed(*v)).collect()
}

/// Split a flat `name, value, name, value, ...` list into tuples
///
/// # Errors
///
/// Returns `InvalidLabelValues` when the list has odd length or when any
/// name or value is empty.
pub fn pair_up(args: &[&str]) -> MetricsResult<Vec<LabelTuple>> {
    if args.len() % 2 != 0 {
        return Err(MetricsError::invalid_labels(
            "must be a multiple of 2, 'label1', 'value1', 'label2', 'value2', ...",
        ));
    }

    args.chunks_exact(2)
        .map(|pair| {
            let (label, value) = (pair[0], pair[1]);
            if label.is_empty() {
                return Err(MetricsError::invalid_labels("the label must not be empty"));
            }
            if value.is_empty() {
                return Err(MetricsError::invalid_labels("the value must not be empty"));
            }
            Ok(LabelTuple::new(label, value))
        })
        .collect()
}

/// Check accumulated tuples against the expected label schema
///
/// With no schema every tuple list passes. When `exact` is set the tuple
/// count must equal the schema length; otherwise it must not exceed it, so a
/// partially built chain can be checked as a prefix. Named tuples must match
/// the schema name at the same position; unnamed tuples only count toward
/// arity.
///
/// # Errors
///
/// Returns `InvalidLabelValues` describing the first violation found.
pub fn validate(
    schema: Option<&[String]>,
    tuples: &[LabelTuple],
    exact: bool,
) -> MetricsResult<()> {
    let Some(wanted) = schema else {
        return Ok(());
    };

    let describe = || {
        let got: Vec<&str> = tuples
            .iter()
            .map(|t| {
                if t.is_unnamed() {
                    t.value()
                } else {
                    t.label()
                }
            })
            .collect();
        format!("want '{}', got '{}'", wanted.join("', '"), got.join("', '"))
    };

    if exact && wanted.len() != tuples.len() {
        return Err(MetricsError::invalid_labels(format!(
            "expected {} labels, got {}: {}",
            wanted.len(),
            tuples.len(),
            describe()
        )));
    }

    if !exact && wanted.len() < tuples.len() {
        return Err(MetricsError::invalid_labels(format!(
            "too many labels: {}",
            describe()
        )));
    }

    let mismatch = tuples
        .iter()
        .zip(wanted)
        .any(|(tuple, name)| !tuple.is_unnamed() && tuple.label() != name.as_str());
    if mismatch {
        return Err(MetricsError::invalid_labels(format!(
            "the labels do not match: {}",
            describe()
        )));
    }

    Ok(())
}

/// Join tuple values with `delimiter`; no tuples gives the empty string
pub fn join_values(tuples: &[LabelTuple], delimiter: &str) -> String {
    tuples
        .iter()
        .map(LabelTuple::value)
        .collect::<Vec<_>>()
        .join(delimiter)
}
