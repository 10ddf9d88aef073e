//! Bearer Token Extraction
//!
//! Pulls the credential out of an `Authorization: Bearer <token>` header.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Outcome of reading the Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerToken {
    /// No Authorization header at all
    Missing,
    /// Header present but not a usable bearer credential
    Malformed,
    /// The raw token text
    Present(String),
}

/// Extract the bearer token from request headers
///
/// The scheme is matched exactly (`Bearer `, one space). An empty token after
/// the prefix counts as malformed.
pub fn extract_bearer(headers: &HeaderMap) -> BearerToken {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return BearerToken::Missing;
    };

    let Ok(value) = value.to_str() else {
        return BearerToken::Malformed;
    };

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => BearerToken::Present(token.trim().to_string()),
        _ => BearerToken::Malformed,
    }
}
