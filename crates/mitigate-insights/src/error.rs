//! Insight error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsightError {
    /// A positive hospitalized case needs a hospital but none are registered.
    #[error("No hospitals registered to assign positive cases to")]
    NoHospitals,

    /// The random source failed to produce a value.
    #[error("Random source failed: {0}")]
    Random(String),
}
