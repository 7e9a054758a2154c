use serde::Deserialize;

use gaugelink_core::error::{GaugeLinkError, Result};
use gaugelink_core::name::{DEFAULT_PREFIX, DEFAULT_UPDATE_INTERVAL_MS};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterConfig {
    #[serde(default)]
    pub reporter: ReporterSection,
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<()> {
        self.reporter.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterSection {
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,

    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ReporterSection {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
            prefix: default_prefix(),
        }
    }
}

impl ReporterSection {
    pub fn validate(&self) -> Result<()> {
        if self.update_interval_ms == 0 {
            return Err(GaugeLinkError::Config(
                "reporter.update_interval_ms must be at least 1".into(),
            ));
        }
        if self.prefix.is_empty() {
            return Err(GaugeLinkError::Config(
                "reporter.prefix must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_update_interval_ms() -> u64 {
    DEFAULT_UPDATE_INTERVAL_MS
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.into()
}
