//! Review Error Types
//!
//! Catalog, ownership and statistics errors, integrated with
//! `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Review-specific result type alias
pub type ReviewResult<T> = Result<T, ReviewError>;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// Missing or out-of-range input field
    #[error("{0}")]
    Validation(String),

    /// Malformed query parameter
    #[error("{0}")]
    BadRequest(String),

    #[error("Review not found")]
    ReviewNotFound,

    /// Ownership check failed; carries the user-facing message
    #[error("{0}")]
    Forbidden(&'static str),

    /// get-or-create gave up after repeated insert conflicts
    #[error("Could not resolve book \"{title}\" by {author}")]
    BookUnavailable { title: String, author: String },

    /// Book metadata lookup unreachable or returned garbage
    #[error("Book search is unavailable: {0}")]
    Lookup(String),

    /// Already classified error (extractor rejections)
    #[error("{}", .0.message())]
    App(AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReviewError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ReviewError::Validation(_) => ErrorKind::UnprocessableEntity,
            ReviewError::BadRequest(_) => ErrorKind::BadRequest,
            ReviewError::ReviewNotFound => ErrorKind::NotFound,
            ReviewError::Forbidden(_) => ErrorKind::Forbidden,
            ReviewError::Lookup(_) => ErrorKind::ServiceUnavailable,
            ReviewError::App(err) => err.kind(),
            ReviewError::BookUnavailable { .. }
            | ReviewError::Database(_)
            | ReviewError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            ReviewError::App(err) => err,
            ReviewError::Database(err) => AppError::from(err),
            ReviewError::Internal(_) => AppError::internal("Internal server error"),
            ReviewError::Lookup(_) => AppError::service_unavailable("Book search is unavailable"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ReviewError::Database(e) => {
                tracing::error!(error = %e, "Review database error");
            }
            ReviewError::Internal(msg) => {
                tracing::error!(message = %msg, "Review internal error");
            }
            ReviewError::BookUnavailable { title, author } => {
                tracing::error!(%title, %author, "Book get-or-create exhausted retries");
            }
            ReviewError::Lookup(msg) => {
                tracing::warn!(message = %msg, "Book lookup failed");
            }
            ReviewError::Forbidden(_) => {
                tracing::warn!(error = %self, "Ownership check denied");
            }
            _ => {
                tracing::debug!(error = %self, "Review error");
            }
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for ReviewError {
    fn from(err: AppError) -> Self {
        ReviewError::App(err)
    }
}

impl From<axum::extract::rejection::JsonRejection> for ReviewError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ReviewError::App(AppError::from(rejection))
    }
}

impl From<axum::extract::rejection::QueryRejection> for ReviewError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        ReviewError::App(AppError::from(rejection))
    }
}

impl From<axum::extract::rejection::PathRejection> for ReviewError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        ReviewError::App(AppError::from(rejection))
    }
}
