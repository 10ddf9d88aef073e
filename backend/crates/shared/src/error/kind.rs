//! Error Kind
//!
//! The closed set of failure classes every crate reports through, each
//! tied to one HTTP status.

use std::fmt;

/// Failure class, mapped 1:1 onto an HTTP status
///
/// ```
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Forbidden.status_code(), 403);
/// assert_eq!(ErrorKind::UnprocessableEntity.to_string(), "Unprocessable Entity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed query or path parameter
    BadRequest,
    /// Missing, invalid or expired token; bad credentials
    Unauthorized,
    /// Authenticated but not the owner
    Forbidden,
    NotFound,
    /// Uniqueness violation
    Conflict,
    /// Missing or out-of-range body field
    UnprocessableEntity,
    InternalServerError,
    /// An upstream collaborator is unreachable
    ServiceUnavailable,
}

impl ErrorKind {
    const fn status_and_reason(self) -> (u16, &'static str) {
        match self {
            ErrorKind::BadRequest => (400, "Bad Request"),
            ErrorKind::Unauthorized => (401, "Unauthorized"),
            ErrorKind::Forbidden => (403, "Forbidden"),
            ErrorKind::NotFound => (404, "Not Found"),
            ErrorKind::Conflict => (409, "Conflict"),
            ErrorKind::UnprocessableEntity => (422, "Unprocessable Entity"),
            ErrorKind::InternalServerError => (500, "Internal Server Error"),
            ErrorKind::ServiceUnavailable => (503, "Service Unavailable"),
        }
    }

    pub const fn status_code(self) -> u16 {
        self.status_and_reason().0
    }

    /// Reason phrase
    pub const fn reason(self) -> &'static str {
        self.status_and_reason().1
    }

    /// 5xx; logged at error level
    pub const fn is_server_error(self) -> bool {
        self.status_code() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}
