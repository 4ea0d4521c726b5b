//! Unified error handling with Sentry integration.
//!
//! Every procedure returns `Result<T, AppError>`. Errors reach the caller as
//!
//! ```json
//! {"error": {"code": "NOT_FOUND", "message": "appointment 3f0c... not found"}}
//! ```
//!
//! Server-side failures are logged and captured to Sentry before responding.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::validation::ValidationError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range input, detected before touching the store.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The store rejected the operation or could not be reached.
    #[error("{0}")]
    Store(#[from] RepositoryError),
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

impl AppError {
    /// Shorthand for a `NotFound` naming the entity and the id asked for.
    #[must_use]
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(RepositoryError::MissingReference(_) | RepositoryError::Conflict(_)) => {
                StatusCode::CONFLICT
            }
            Self::Store(RepositoryError::Database(_) | RepositoryError::DataCorruption(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error code carried in the response body.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(RepositoryError::MissingReference(_) | RepositoryError::Conflict(_)) => {
                "CONFLICT"
            }
            Self::Store(RepositoryError::Database(_) | RepositoryError::DataCorruption(_)) => {
                "INTERNAL_SERVER_ERROR"
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Procedure failed"
            );
        } else {
            tracing::debug!(error = %self, code = self.code(), "Procedure rejected");
        }

        // Store failures carry their underlying message; nothing here is secret
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::not_found("client", "abc");
        assert_eq!(err.to_string(), "client abc not found");

        let err = AppError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "name cannot be empty");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::from(ValidationError::InvalidDate("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("a", "b").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(RepositoryError::MissingReference("client".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(RepositoryError::DataCorruption("bad".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::not_found("appointment", "42").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "appointment 42 not found");
    }

    #[tokio::test]
    async fn test_store_error_message_attached() {
        let response =
            AppError::from(RepositoryError::MissingReference("client x does not exist".into()))
                .into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "CONFLICT");
        assert_eq!(
            body["error"]["message"],
            "referential integrity violation: client x does not exist"
        );
    }
}
