//! Error types for the registry service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use registry_store::{StoreError, SubmissionError};
use serde::Serialize;
use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Member not found: {0}")]
    NotFound(u64),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] SubmissionError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        ServiceError::Storage(e.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServiceError::InvalidSubmission(_) => (StatusCode::BAD_REQUEST, "INVALID_SUBMISSION"),
            ServiceError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
