//! Error types for the analysis subsystem.

use thiserror::Error;

/// Analysis subsystem error type.
///
/// Only configuration and loading can fail; analyzing messages never does.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
