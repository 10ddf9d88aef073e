//! User Name Value Object
//!
//! Display name shown back to the user ("Your name is ..."). Not an
//! identifier: duplicates are allowed and any script is accepted.
//!
//! Processing order: NFKC normalization → trim → validation.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 255;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::unprocessable("Name is required"));
        }

        if trimmed.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::unprocessable(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AppError::unprocessable("Name contains invalid characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims() {
        assert_eq!(UserName::new("  Alice ").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_nfkc() {
        // Fullwidth letters fold to ASCII
        assert_eq!(UserName::new("Ａｌｉｃｅ").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_too_long() {
        let name = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(UserName::new(name).is_err());
    }

    #[test]
    fn test_control_character() {
        assert!(UserName::new("Ali\u{0000}ce").is_err());
    }
}
