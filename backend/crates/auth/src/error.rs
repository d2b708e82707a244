//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. User-facing messages are the
//! Russian strings the site surfaces verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration conflict: email already registered
    #[error("Пользователь с таким email уже существует")]
    EmailTaken,

    /// Login failure. Deliberately identical for "no such email" and
    /// "wrong password" so accounts cannot be enumerated.
    #[error("Неверный email или пароль")]
    InvalidCredentials,

    /// Referenced user id does not resolve
    #[error("Пользователь не найден")]
    UserNotFound,

    /// Password change rejected: old password did not verify
    #[error("Старый пароль неверен")]
    WrongOldPassword,

    /// No valid session where one is required
    #[error("Требуется вход в систему")]
    Unauthenticated,

    /// Valid session, insufficient role. Does not reveal whether the
    /// target resource exists.
    #[error("Недостаточно прав для выполнения операции")]
    AccessDenied,

    /// Input failed structural validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::WrongOldPassword | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::AccessDenied => StatusCode::FORBIDDEN,
            AuthError::Database(e) => StatusCode::from_u16(sqlx_error_kind(e).status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::WrongOldPassword | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::AccessDenied => ErrorKind::Forbidden,
            // Transient storage failures surface as a retryable 503
            AuthError::Database(e) => sqlx_error_kind(e),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccessDenied => {
                tracing::warn!("Access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
