//! Registry storage and validation errors.

use thiserror::Error;

/// Errors from loading or saving the registry document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed registry document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from validating a member submission at the service boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Submission body must be a JSON object")]
    NotAnObject,

    #[error("Submission requires a non-empty string `name`")]
    MissingName,

    #[error("Field `{0}` is assigned by the registry and cannot be submitted")]
    ReservedField(String),
}
