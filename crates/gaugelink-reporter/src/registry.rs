//! Concurrent metric registry.
//!
//! Registry:
//! - `MetricId -> MetricEntry`
//!
//! Writers (producer notifications) and the reader (poll pass) share the map
//! without external synchronization. A snapshot is consistent-enough for one
//! pass: entries mutated during iteration may or may not appear, but an
//! entry is never observed half-constructed.

use std::sync::Arc;

use dashmap::DashMap;

use gaugelink_core::error::Result;
use gaugelink_core::metric::MetricId;
use gaugelink_core::name::resolve;

use crate::measure::{metric_id, Measurement};

/// Resolved name paired with the live handle.
///
/// Computed once at registration and never recomputed; the resolved name is
/// stable for the lifetime of the entry. A "changed" notification always
/// builds a fresh entry.
#[derive(Clone)]
pub struct MetricEntry {
    resolved_name: String,
    handle: Arc<dyn Measurement>,
}

impl MetricEntry {
    /// Build an entry, resolving the gauge name up front.
    pub fn new(handle: Arc<dyn Measurement>, prefix: &str) -> Result<Self> {
        let resolved_name = resolve(prefix, handle.group(), handle.name(), handle.tags())?;
        Ok(Self {
            resolved_name,
            handle,
        })
    }

    /// Gauge name this entry reports under.
    pub fn resolved_name(&self) -> &str {
        &self.resolved_name
    }

    /// Read the current value from the underlying handle.
    pub fn read(&self) -> Result<f64> {
        self.handle.read()
    }
}

/// Concurrent mapping from metric identifier to entry.
#[derive(Default)]
pub struct MetricRegistry {
    entries: DashMap<MetricId, MetricEntry>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert or replace the entry for this handle's identifier.
    /// Returns the resolved gauge name.
    pub fn upsert(&self, handle: Arc<dyn Measurement>, prefix: &str) -> Result<String> {
        let id = metric_id(handle.as_ref())?;
        let entry = MetricEntry::new(handle, prefix)?;
        let name = entry.resolved_name.clone();
        self.entries.insert(id, entry);
        tracing::debug!(metric = %name, "metric added or replaced");
        Ok(name)
    }

    /// Remove the entry for this handle's identifier, if present.
    /// Returns the removed entry's resolved name; `None` when absent.
    pub fn remove(&self, handle: &dyn Measurement) -> Option<String> {
        let id = metric_id(handle).ok()?;
        self.entries.remove(&id).map(|(_, entry)| entry.resolved_name)
    }

    /// View of the registry for one poll pass.
    pub fn snapshot(&self) -> Vec<MetricEntry> {
        self.entries.iter().map(|r| r.value().clone()).collect()
    }

    /// Bulk upsert for an initial known set of handles.
    ///
    /// A handle with an invalid identifier is logged and skipped; the rest
    /// proceed.
    pub fn init(&self, handles: &[Arc<dyn Measurement>], prefix: &str) {
        for handle in handles {
            if let Err(err) = self.upsert(Arc::clone(handle), prefix) {
                tracing::warn!(%err, "skipping metric with invalid identifier");
            }
        }
        tracing::debug!(count = handles.len(), "registry initialized");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
