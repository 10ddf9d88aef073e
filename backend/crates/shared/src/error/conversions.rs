//! Conversions into [`AppError`]
//!
//! Infrastructure errors and axum extractor rejections become classified
//! application errors; [`AppError`] itself renders as the `{status, error,
//! data}` envelope.

use super::app_error::AppError;

/// SQLSTATE classes the API distinguishes
/// (<https://www.postgresql.org/docs/current/errcodes-appendix.html>)
#[cfg(feature = "sqlx")]
const UNIQUE_VIOLATION: &str = "23505";

#[cfg(feature = "sqlx")]
fn from_sqlstate(code: Option<&str>) -> AppError {
    match code {
        Some(UNIQUE_VIOLATION) => AppError::conflict("Duplicate key value"),
        Some("23503") => AppError::conflict("Foreign key violation"),
        Some("23502" | "23514") => AppError::unprocessable("Constraint violation"),
        // admin / crash / cannot-connect-now shutdowns
        Some(code) if code.starts_with("57P") => {
            AppError::service_unavailable("Database unavailable")
        }
        _ => AppError::internal("Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let classified = match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error")
            }
            sqlx::Error::Database(db) => from_sqlstate(db.code().as_deref()),
            _ => AppError::internal("Database error"),
        };
        classified.with_source(err)
    }
}

/// Unique-constraint conflict; callers map it to their own domain error
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        // Well-formed JSON with the wrong shape is a validation failure
        let text = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => AppError::unprocessable(text),
            _ => AppError::bad_request(text),
        }
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::response::Envelope;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Envelope::<()>::error(self.message())).into_response()
    }
}
