//! Case domain errors

use thiserror::Error;

/// Errors that can occur in the case domain
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Case is missing the {0} section")]
    MissingSection(&'static str),
}
