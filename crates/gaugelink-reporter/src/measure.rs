//! Measurement seam between the producer and the registry.

use gaugelink_core::error::Result;
use gaugelink_core::metric::{MetricId, MetricTags};

/// Handle to one live, externally owned numeric source.
///
/// `read` may be called repeatedly from the poll task and is allowed to fail
/// once the underlying source becomes invalid; such a failure is isolated to
/// the entry and never aborts a poll pass.
pub trait Measurement: Send + Sync {
    /// Namespace of the metric.
    fn group(&self) -> &str;
    /// Short metric name within its group.
    fn name(&self) -> &str;
    /// Tags attached by the producer.
    fn tags(&self) -> &MetricTags;
    /// Current value of the measurement.
    fn read(&self) -> Result<f64>;
}

/// Derive the registry key from a handle.
///
/// Fails when the handle carries an empty group or name, before anything is
/// stored.
pub fn metric_id(measurement: &dyn Measurement) -> Result<MetricId> {
    MetricId::new(measurement.group(), measurement.name())
}
