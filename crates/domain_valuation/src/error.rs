//! Valuation domain errors

use thiserror::Error;

/// Errors that can occur in the valuation domain
///
/// The two variants map directly onto caller behavior: `InvalidInput` is
/// recoverable only by correcting the offending field and is never retried;
/// `DependencyUnavailable` may be retried with backoff. The engine itself
/// never retries since it is stateless per call.
#[derive(Debug, Error)]
pub enum ValuationError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),
}

impl ValuationError {
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        ValuationError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub fn dependency_unavailable(message: impl Into<String>) -> Self {
        ValuationError::DependencyUnavailable(message.into())
    }

    /// Returns true if the caller may retry the operation
    pub fn is_retryable(&self) -> bool {
        matches!(self, ValuationError::DependencyUnavailable(_))
    }
}
