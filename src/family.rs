//! Shared root storage and lightweight derived handles
//!
//! A metric family is one root owning the configuration and the value map.
//! Every handle (the root handle included) is an `Arc` to that family plus
//! the label path accumulated by its `with` chain. Handles never change after
//! creation; `with` always builds a new one.

use crate::config::MetricConfig;
use crate::error::{MetricsError, MetricsResult};
use crate::labels::{self, LabelTuple};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) struct Family<V> {
    kind: &'static str,
    config: MetricConfig,
    values: Mutex<HashMap<String, V>>,
}

impl<V> Family<V> {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, V>> {
        // The lock is never held across a failure handler call, so a poisoned
        // map is still consistent.
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Label path plus a reference to the owning family
///
/// `labels` is `None` for a detached handle, i.e. one returned by a `with`
/// call whose labels were rejected.
pub(crate) struct Handle<V> {
    family: Arc<Family<V>>,
    labels: Option<Arc<[LabelTuple]>>,
}

impl<V> Clone for Handle<V> {
    fn clone(&self) -> Self {
        Self {
            family: Arc::clone(&self.family),
            labels: self.labels.clone(),
        }
    }
}

impl<V> fmt::Debug for Handle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &self.family.kind)
            .field("labels", &self.labels)
            .finish()
    }
}

impl<V: Default + Clone> Handle<V> {
    /// Build a root handle, reporting an invalid config to its failure handler
    pub(crate) fn root(kind: &'static str, config: MetricConfig) -> Self {
        let validation = config.validate();
        let handle = Self {
            family: Arc::new(Family {
                kind,
                config,
                values: Mutex::new(HashMap::new()),
            }),
            labels: Some(Arc::from(Vec::new())),
        };

        if let Err(err) = validation {
            handle.deliver(Err(MetricsError::InvalidConfig {
                reason: err.to_string(),
            }));
        }
        handle
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.labels.is_none()
    }

    pub(crate) fn labels(&self) -> &[LabelTuple] {
        self.labels.as_deref().unwrap_or(&[])
    }

    pub(crate) fn ensure_attached(&self) -> MetricsResult<&[LabelTuple]> {
        self.labels.as_deref().ok_or(MetricsError::DetachedHandle)
    }

    /// Append `args` to this handle's labels, checking the schema as a prefix
    pub(crate) fn try_derive(&self, args: &[&str]) -> MetricsResult<Self> {
        let current = self.ensure_attached()?;
        let config = &self.family.config;

        let mut accumulated = current.to_vec();
        accumulated.extend(labels::parse(config.label_style(), args)?);
        labels::validate(config.expected_labels(), &accumulated, false)?;

        Ok(Self {
            family: Arc::clone(&self.family),
            labels: Some(Arc::from(accumulated)),
        })
    }

    /// Like `try_derive`, but failures go to the failure handler and yield a
    /// detached handle
    pub(crate) fn derive(&self, args: &[&str]) -> Self {
        match self.try_derive(args) {
            Ok(handle) => handle,
            Err(err) => {
                self.deliver(Err(err));
                Self {
                    family: Arc::clone(&self.family),
                    labels: None,
                }
            }
        }
    }

    /// Validate the full label path, then apply `update` to its entry
    pub(crate) fn try_record<F>(&self, update: F) -> MetricsResult<()>
    where
        F: FnOnce(&mut V),
    {
        let tuples = self.ensure_attached()?;
        let config = &self.family.config;

        labels::validate(config.expected_labels(), tuples, true)?;
        let key = labels::join_values(tuples, config.delimiter());

        let mut values = self.family.lock();
        update(values.entry(key.clone()).or_default());
        drop(values);

        tracing::debug!(metric = self.family.kind, key = %key, "Recorded mock metric");
        Ok(())
    }

    /// Send a failed result to the failure handler
    ///
    /// Results from detached handles are only logged: the rejected `with`
    /// call that detached them has already been reported.
    pub(crate) fn deliver(&self, result: MetricsResult<()>) {
        match result {
            Ok(()) => {}
            Err(MetricsError::DetachedHandle) => {
                tracing::warn!(
                    metric = self.family.kind,
                    "Ignoring call on detached mock metric handle"
                );
            }
            Err(err) => self
                .family
                .config
                .failure_handler()
                .report(self.family.kind, &err),
        }
    }

    /// Copy of the family's storage; empty if nothing was recorded
    pub(crate) fn snapshot(&self) -> HashMap<String, V> {
        self.family.lock().clone()
    }

    pub(crate) fn get(&self, key: &str) -> Option<V> {
        self.family.lock().get(key).cloned()
    }

    pub(crate) fn config(&self) -> &MetricConfig {
        &self.family.config
    }
}
