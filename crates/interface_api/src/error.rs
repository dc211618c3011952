//! API error handling
//!
//! Validation problems surface as 422 with the offending field so the form
//! can highlight it inline; dependency outages surface as 503 with a
//! generic retry prompt and no internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;
use domain_case::CaseError;
use domain_valuation::ValuationError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Dependency unavailable")]
    DependencyUnavailable,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, retryable) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone(), None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone(), None),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone(), Some(false))
            }
            ApiError::DependencyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "dependency_unavailable",
                "A required service is temporarily unavailable. Please try again.".to_string(),
                Some(true),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone(), None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            retryable,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValuationError> for ApiError {
    fn from(err: ValuationError) -> Self {
        match err {
            ValuationError::InvalidInput { .. } => ApiError::Validation(err.to_string()),
            ValuationError::DependencyUnavailable(msg) => {
                tracing::warn!(error = %msg, "estimation dependency unavailable");
                ApiError::DependencyUnavailable
            }
        }
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else if err.is_transient() {
            tracing::warn!(error = %err, "port dependency unavailable");
            ApiError::DependencyUnavailable
        } else {
            match err {
                PortError::Validation { message } => ApiError::Validation(message),
                PortError::Conflict { message } => ApiError::Conflict(message),
                other => ApiError::Internal(other.to_string()),
            }
        }
    }
}

impl From<CaseError> for ApiError {
    fn from(err: CaseError) -> Self {
        match err {
            CaseError::CaseNotFound(msg) => ApiError::NotFound(msg),
            CaseError::InvalidStatusTransition { .. } => ApiError::Conflict(err.to_string()),
            CaseError::MissingSection(_) => ApiError::Validation(err.to_string()),
        }
    }
}
