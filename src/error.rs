//! Error type shared by the reporting flow.

use thiserror::Error;

/// Terminal failures of a single `mark-step` invocation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required positional argument was missing, empty, or malformed.
    #[error("{0}")]
    Usage(String),

    /// Required configuration was not available.
    #[error("{0}")]
    Configuration(String),

    /// The backend answered with a non-success status.
    #[error("request rejected with status {status} {status_text}")]
    Rejected {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase for the status, possibly empty.
        status_text: String,
    },

    /// The request did not complete.
    #[error("{0}")]
    Transport(String),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}
