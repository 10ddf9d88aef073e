//! Uniform response envelope
//!
//! Every HTTP response body, success or failure, has the shape
//! `{"status": "success" | "error", "error": "...", "data": ...}`.

use serde::Serialize;

/// Outcome marker rendered into the envelope's `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response envelope
///
/// `data` is `null` on error. The payload type is normally a per-context
/// enum (e.g. `AuthPayload`, `ReviewPayload`) serialized untagged.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub error: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            error: String::new(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let json = serde_json::to_value(Envelope::success("deleted successfully")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["error"], "");
        assert_eq!(json["data"], "deleted successfully");
    }

    #[test]
    fn test_error_shape() {
        let json = serde_json::to_value(Envelope::<()>::error("Review not found")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Review not found");
        assert!(json["data"].is_null());
    }
}
