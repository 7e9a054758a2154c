//! Metric identifiers and tags.
//!
//! A [`MetricId`] is the registry lookup key: group plus name, both required.
//! Tags live on the measurement handle and feed only into name resolution,
//! so two handles with the same group/name but different tags replace each
//! other in the registry.

use std::collections::BTreeMap;

use crate::error::{GaugeLinkError, Result};

/// Unordered tag mapping. Backed by a `BTreeMap` so iteration is always in
/// ascending key order, independent of producer insertion order.
pub type MetricTags = BTreeMap<String, String>;

/// Structured key naming one measurable quantity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricId {
    group: String,
    name: String,
}

impl MetricId {
    /// Build an identifier, rejecting empty `group` or `name`.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        if group.is_empty() {
            return Err(GaugeLinkError::MissingGroup);
        }
        if name.is_empty() {
            return Err(GaugeLinkError::MissingName);
        }
        Ok(Self { group, name })
    }

    /// Namespace the metric belongs to (e.g. "consumer-fetch-manager-metrics").
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Short metric name within its group.
    pub fn name(&self) -> &str {
        &self.name
    }
}
