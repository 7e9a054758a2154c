//! gaugelink reporter library entry.
//!
//! This crate wires the measurement seam, the concurrent metric registry,
//! and the fixed-rate poll scheduler into a cohesive reporting engine. It is
//! intended to be embedded next to a metrics-producing client and by
//! integration tests.

pub mod config;
pub mod measure;
pub mod registry;
pub mod reporter;
pub mod sink;

pub use measure::Measurement;
pub use registry::{MetricEntry, MetricRegistry};
pub use reporter::{GaugeReporter, MetricEvents, ReporterOptions};
pub use sink::GaugeSink;
