//! Request-level error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use mitigate_core::enums::Collection;
use mitigate_core::errors::{CoreError, FormError};
use mitigate_db::error::DatabaseError;
use mitigate_insights::InsightError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Insight(#[from] InsightError),
}

impl AppError {
    /// `No <record> found with ID <id>`.
    pub fn not_found(collection: Collection, id: impl ToString) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: collection.record_name().to_string(),
            id: id.to_string(),
        })
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Form(_) | Self::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Insight(InsightError::NoHospitals) => StatusCode::CONFLICT,
            Self::Core(CoreError::Other(_))
            | Self::Database(_)
            | Self::Insight(InsightError::Random(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        (status, self.to_string()).into_response()
    }
}
