//! gaugelink core: metric identifiers, the name resolver, and error types.
//!
//! This crate defines the naming contract and error surface shared by the
//! reporter and by embedders. It intentionally carries no runtime
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GaugeLinkError`/`Result` so embedding
//! processes do not crash on a malformed metric identifier.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod name;

/// Shared result type.
pub use error::{GaugeLinkError, Result};
pub use metric::{MetricId, MetricTags};
pub use name::{resolve, DEFAULT_PREFIX, DEFAULT_UPDATE_INTERVAL_MS};
