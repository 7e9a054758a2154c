//! Shared error type across gaugelink crates.

use thiserror::Error;

/// Embedder-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Metric identifier has an empty group.
    MissingGroup,
    /// Metric identifier has an empty name.
    MissingName,
    /// Invalid or incomplete configuration.
    Config,
    /// Measurement handle failed to produce a value.
    Read,
    /// Sink rejected a submission.
    Sink,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingGroup => "MISSING_GROUP",
            ErrorKind::MissingName => "MISSING_NAME",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Read => "READ",
            ErrorKind::Sink => "SINK",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GaugeLinkError>;

/// Unified error type used by core and reporter.
#[derive(Debug, Error)]
pub enum GaugeLinkError {
    #[error("metric group must not be empty")]
    MissingGroup,
    #[error("metric name must not be empty")]
    MissingName,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("measurement read failed: {0}")]
    Read(String),
    #[error("sink submit failed: {0}")]
    Sink(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GaugeLinkError {
    /// Map internal error to a stable embedder-facing code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GaugeLinkError::MissingGroup => ErrorKind::MissingGroup,
            GaugeLinkError::MissingName => ErrorKind::MissingName,
            GaugeLinkError::Config(_) => ErrorKind::Config,
            GaugeLinkError::Read(_) => ErrorKind::Read,
            GaugeLinkError::Sink(_) => ErrorKind::Sink,
            GaugeLinkError::Internal(_) => ErrorKind::Internal,
        }
    }
}
