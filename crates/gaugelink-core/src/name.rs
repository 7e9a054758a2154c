//! Gauge name resolution.
//!
//! Maps a metric identifier plus tags into a single dot-delimited gauge name:
//! `prefix.tagvalue...group.name`. Tag values are appended in ascending tag
//! key order so the result is independent of how the producer built its tag
//! map; tags with an empty key or empty value are skipped entirely.

use crate::error::{GaugeLinkError, Result};
use crate::metric::MetricTags;

/// Name prefix applied when the configured prefix is absent or empty.
pub const DEFAULT_PREFIX: &str = "kafka";

/// Interval between poll passes when not configured (milliseconds).
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 30_000;

/// Segment separator in resolved gauge names.
pub const SEPARATOR: char = '.';

/// Resolve the gauge name for one metric.
///
/// Deterministic: identical inputs always yield the identical string.
/// Fails when `group` or `name` is empty; the failure surfaces at
/// entry-construction time so an unnameable metric never enters the registry.
pub fn resolve(prefix: &str, group: &str, name: &str, tags: &MetricTags) -> Result<String> {
    if group.is_empty() {
        return Err(GaugeLinkError::MissingGroup);
    }
    if name.is_empty() {
        return Err(GaugeLinkError::MissingName);
    }
    let prefix = if prefix.is_empty() { DEFAULT_PREFIX } else { prefix };

    let mut out = String::with_capacity(prefix.len() + group.len() + name.len() + 2);
    out.push_str(prefix);
    out.push(SEPARATOR);
    for (key, value) in tags {
        if key.is_empty() || value.is_empty() {
            continue;
        }
        out.push_str(value);
        out.push(SEPARATOR);
    }
    out.push_str(group);
    out.push(SEPARATOR);
    out.push_str(name);
    Ok(out)
}
