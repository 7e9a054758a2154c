//! Top-level facade crate for gaugelink.
//!
//! Re-exports core types and the reporter library so users can depend on a single crate.

pub mod core {
    pub use gaugelink_core::*;
}

pub mod reporter {
    pub use gaugelink_reporter::*;
}
