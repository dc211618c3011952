//! Core error types used across the system

use thiserror::Error;
use crate::money::MoneyError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        CoreError::InvalidStateTransition(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_error_converts() {
        let err: CoreError = MoneyError::DivisionByZero.into();
        assert!(matches!(err, CoreError::Money(MoneyError::DivisionByZero)));
    }

    #[test]
    fn test_constructor_messages() {
        let err = CoreError::invalid_state("draft -> completed");
        assert!(err.to_string().contains("draft -> completed"));

        let err = CoreError::not_found("case 123");
        assert!(err.to_string().contains("case 123"));
    }
}
