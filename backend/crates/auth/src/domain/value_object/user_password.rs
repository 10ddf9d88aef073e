//! User Password Value Objects
//!
//! `RawPassword` is what the client typed; `UserPassword` is the Argon2id
//! hash kept in `users.password_hash`. Hashing itself lives in
//! `platform::password`; this module only maps its errors onto HTTP kinds.
//!
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("pw123".to_string()).unwrap();
//! let stored = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(stored.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

/// Policy violations are the client's fault
fn policy_error(err: PasswordPolicyError) -> AppError {
    match err {
        PasswordPolicyError::EmptyOrWhitespace => AppError::unprocessable("Password is required"),
        other => AppError::unprocessable(other.to_string()),
    }
}

/// Hashing failures are ours
fn hash_error(err: PasswordHashError) -> AppError {
    tracing::error!(error = %err, "Password hashing failed");
    AppError::internal("Unexpected error during password hashing")
}

/// Password as submitted, validated and wiped on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AppResult<Self> {
        ClearTextPassword::new(raw).map(Self).map_err(policy_error)
    }

    pub(crate) fn clear_text(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword([REDACTED])")
    }
}

/// Stored Argon2id hash
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// CPU-bound; async callers go through `spawn_blocking`.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        raw.clear_text().hash(pepper).map(Self).map_err(hash_error)
    }

    /// A column that does not parse as PHC means the row is corrupt.
    pub fn from_phc_string(stored: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(stored)
            .map(Self)
            .map_err(|_| AppError::internal("Invalid password hash in database"))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.clear_text(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([HASH])")
    }
}
