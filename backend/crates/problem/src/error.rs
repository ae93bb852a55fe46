//! Problem Error Types
//!
//! This module provides problem-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::INTERNAL_SERVER_ERROR_MESSAGE;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::IdParseError;
use thiserror::Error;

use crate::application::validation::Violations;

/// Problem-specific result type alias
pub type ProblemResult<T> = Result<T, ProblemError>;

/// Problem-specific error variants
#[derive(Debug, Error)]
pub enum ProblemError {
    /// Required argument (id or payload) is empty
    #[error("{0}")]
    EmptyArgument(&'static str),

    /// Payload failed field validation
    #[error("{0}")]
    Validation(Violations),

    /// Request body could not be read as JSON
    #[error("{0}")]
    MalformedBody(String),

    /// Another problem already carries this title
    #[error("This title {title} already exists")]
    Conflict { title: String },

    /// No problem stored under the requested id.
    /// Reported as 409 rather than 404; existing clients depend on it.
    #[error("Problem doesn't exist")]
    NotFound,

    /// Identifier the store cannot interpret
    #[error(transparent)]
    MalformedId(#[from] IdParseError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store call exceeded its deadline
    #[error("Problem store did not respond in time")]
    StoreTimeout(Duration),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProblemError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProblemError::EmptyArgument(_)
            | ProblemError::Validation(_)
            | ProblemError::MalformedBody(_) => ErrorKind::BadRequest,
            ProblemError::Conflict { .. } | ProblemError::NotFound => ErrorKind::Conflict,
            ProblemError::StoreTimeout(_) => ErrorKind::ServiceUnavailable,
            ProblemError::MalformedId(_)
            | ProblemError::Database(_)
            | ProblemError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProblemError::Database(e) => {
                tracing::error!(error = %e, "Problem database error");
            }
            ProblemError::MalformedId(e) => {
                tracing::error!(input = %e.input(), "Problem store rejected identifier");
            }
            ProblemError::StoreTimeout(after) => {
                tracing::error!(
                    timeout_ms = after.as_millis() as u64,
                    "Problem store timed out"
                );
            }
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Problem request failed");
            }
            _ => {
                tracing::debug!(error = %self, "Problem request rejected");
            }
        }
    }
}

impl From<ProblemError> for AppError {
    fn from(err: ProblemError) -> Self {
        match err {
            ProblemError::Validation(violations) => {
                let details = serde_json::to_value(violations.items()).unwrap_or_default();
                AppError::bad_request(violations.to_string()).with_details(details)
            }
            ProblemError::MalformedId(e) => {
                AppError::internal(INTERNAL_SERVER_ERROR_MESSAGE).with_source(e)
            }
            ProblemError::Database(e) => {
                AppError::internal(INTERNAL_SERVER_ERROR_MESSAGE).with_source(e)
            }
            ProblemError::Internal(_) => AppError::internal(INTERNAL_SERVER_ERROR_MESSAGE),
            timeout @ ProblemError::StoreTimeout(_) => {
                AppError::service_unavailable(timeout.to_string())
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for ProblemError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<JsonRejection> for ProblemError {
    fn from(rejection: JsonRejection) -> Self {
        ProblemError::MalformedBody(rejection.body_text())
    }
}
