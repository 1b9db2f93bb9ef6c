//! Error types for the terminal

use thiserror::Error;

/// Terminal-wide error type
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MetricsError {
    pub fn api(msg: impl Into<String>) -> Self {
        MetricsError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        MetricsError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        MetricsError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        MetricsError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        MetricsError::Internal(msg.into())
    }

    /// Whether this error means a required upstream dataset could not be
    /// fetched. These abort the whole query; nothing else does.
    pub fn is_provider_unavailable(&self) -> bool {
        matches!(
            self,
            MetricsError::Api(_) | MetricsError::Network(_) | MetricsError::Parse(_)
        )
    }
}

/// Result type alias for terminal operations
pub type MetricsResult<T> = Result<T, MetricsError>;
