//! Reporter settings loader (strict parsing).
//!
//! Only the plain-data settings live in the file; the sink and the execution
//! context are references supplied by the embedder at `configure` time.

pub mod schema;

use std::fs;

use gaugelink_core::error::{GaugeLinkError, Result};

pub use schema::{ReporterConfig, ReporterSection};

pub fn load_from_file(path: &str) -> Result<ReporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GaugeLinkError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ReporterConfig> {
    let cfg: ReporterConfig = serde_yaml::from_str(s)
        .map_err(|e| GaugeLinkError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
