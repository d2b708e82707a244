//! Content Error Types
//!
//! Content-specific error variants. Access-control failures come in from
//! the auth crate and keep their own status mapping.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Referenced news id does not resolve
    #[error("Новость не найдена")]
    NewsNotFound,

    /// Referenced feedback id does not resolve
    #[error("Обращение не найдено")]
    FeedbackNotFound,

    /// Input failed structural validation
    #[error("{0}")]
    Validation(String),

    /// Access-control failure from the auth gate
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::NewsNotFound | ContentError::FeedbackNotFound => StatusCode::NOT_FOUND,
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::Auth(e) => e.status_code(),
            ContentError::Database(e) => StatusCode::from_u16(sqlx_error_kind(e).status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ContentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::NewsNotFound | ContentError::FeedbackNotFound => ErrorKind::NotFound,
            ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::Auth(e) => e.kind(),
            // Transient storage failures surface as a retryable 503
            ContentError::Database(e) => sqlx_error_kind(e),
            ContentError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let app_error = AppError::new(self.kind(), self.to_string());
        if self.kind() == ErrorKind::ServiceUnavailable {
            app_error.with_action("Попробуйте позже")
        } else {
            app_error
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            // Auth errors keep their own logging and response shape
            ContentError::Auth(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}
