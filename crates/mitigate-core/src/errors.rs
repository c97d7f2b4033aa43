//! Cross-cutting error types for Mitigate.
//!
//! Domain-specific errors (`DatabaseError`, `InsightError`) live in their
//! respective crates. They converge into `AppError` in `mitigate-server`.

use thiserror::Error;

/// Errors that can be raised by any Mitigate crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("No {entity_type} found with ID {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors produced while turning a submitted form into a typed record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required form field was not submitted at all.
    #[error("Missing form field '{field}'")]
    MissingField { field: &'static str },

    /// A numeric form field could not be parsed as an integer.
    #[error("Form field '{field}' must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },
}
