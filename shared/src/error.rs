//! Error types for the metrics core

use thiserror::Error;

/// Failures the core cannot resolve locally
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for MetricsError {
    fn from(err: serde_json::Error) -> Self {
        MetricsError::MalformedRecord(err.to_string())
    }
}

/// Result alias for fallible core operations
pub type MetricsResult<T> = Result<T, MetricsError>;
