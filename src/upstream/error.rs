//! Error types for transcript retrieval.

use thiserror::Error;

/// Errors raised while fetching a screening transcript.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The screening does not exist upstream.
    #[error("Screening not found: {0}")]
    ScreeningNotFound(String),

    /// The screening has no call attached.
    #[error("No call ID found for screening: {0}")]
    MissingCallId(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
}

impl UpstreamError {
    /// Whether the error means there is no transcript to analyze.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ScreeningNotFound(_) | Self::MissingCallId(_))
    }
}

/// Convenience result alias for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
