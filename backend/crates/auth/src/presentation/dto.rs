//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Missing fields deserialize as empty strings and are rejected by the use
/// case with a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Account
// ============================================================================

/// Update account request
///
/// `password` is the current password and is always required; blank
/// `new*` fields leave the value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAccountRequest {
    pub password: String,
    pub new_name: String,
    pub new_email: String,
    pub new_password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Signed-in user as seen by the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub token: String,
}

impl UserResponse {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            name: user.user_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            token,
        }
    }
}

/// `data` payload of every auth response
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AuthPayload {
    User(UserResponse),
    Message(String),
}
