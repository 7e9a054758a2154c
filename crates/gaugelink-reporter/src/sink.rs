//! Downstream gauge sink seam.

use async_trait::async_trait;

use gaugelink_core::error::Result;

/// External system accepting `(name, value)` gauge submissions.
///
/// Implementations are expected to be non-blocking or at least
/// bounded-latency; the poll pass catches and logs their failures and never
/// propagates them.
#[async_trait]
pub trait GaugeSink: Send + Sync {
    async fn submit(&self, name: &str, value: f64) -> Result<()>;
}
