//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            std::io::ErrorKind::TimedOut => ErrorKind::RequestTimeout,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a sqlx error into an [`ErrorKind`].
///
/// Transient conditions (pool exhaustion, connection I/O, Postgres classes
/// 53 and 57) map to `ServiceUnavailable` so clients see a retryable 503
/// instead of a 500. Domain error enums wrapping `sqlx::Error` delegate
/// here so their classification cannot drift from the `From` impl below.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // PostgreSQL error codes:
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            Some("23502") | Some("23514") => ErrorKind::BadRequest,
            Some("23503") | Some("23505") => ErrorKind::Conflict,
            // Class 53 — Insufficient Resources
            Some(code) if code.starts_with("53") => ErrorKind::ServiceUnavailable,
            // Class 57 — Operator Intervention
            Some(code) if code.starts_with("57") => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let message = match &err {
            sqlx::Error::RowNotFound => "Record not found",
            sqlx::Error::PoolTimedOut => "Database connection pool exhausted",
            sqlx::Error::Io(_) => "Database connection error",
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23502") => "Required field is null",
                Some("23503") => "Foreign key violation",
                Some("23505") => "Duplicate key value",
                Some("23514") => "Check constraint violation",
                Some(code) if code.starts_with("53") => "Database resource exhausted",
                Some(code) if code.starts_with("57") => "Database unavailable",
                _ => "Database error",
            },
            _ => "Database error",
        };

        AppError::new(sqlx_error_kind(&err), message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
