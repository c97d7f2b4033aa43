//! Database error types for mitigate-db.

use thiserror::Error;

/// Errors from document store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., a stored document that no longer
    /// matches its record type).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A document could not be encoded or decoded as JSON.
    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
