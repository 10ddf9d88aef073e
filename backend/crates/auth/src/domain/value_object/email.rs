//! Email Value Object
//!
//! Login identifier, unique across users. Stored lowercased so that
//! `Alice@Example.com` and `alice@example.com` resolve to the same account.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// RFC 5321 path limit
const MAX_ADDRESS_LEN: usize = 254;
/// RFC 5321 local-part limit
const MAX_LOCAL_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let address = raw.into().trim().to_lowercase();

        match address.len() {
            0 => return Err(AppError::unprocessable("Email is required")),
            len if len > MAX_ADDRESS_LEN => {
                return Err(AppError::unprocessable(format!(
                    "Email must be at most {MAX_ADDRESS_LEN} characters"
                )));
            }
            _ => {}
        }

        let well_formed = address
            .split_once('@')
            .is_some_and(|(local, domain)| local_part_ok(local) && domain_ok(domain));
        if !well_formed {
            return Err(AppError::unprocessable("Invalid email format"));
        }

        Ok(Self(address))
    }

    /// Rehydrate a stored address without re-validating
    pub fn from_db(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn local_part_ok(local: &str) -> bool {
    (1..=MAX_LOCAL_LEN).contains(&local.len())
}

/// Dotted hostname: at least two labels, no second `@`, labels of
/// alphanumerics and inner hyphens only.
fn domain_ok(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for ok in [
            "alice@example.com",
            "user.name@example.co.jp",
            "user+tag@example.com",
            "bob@mail-server.example.org",
        ] {
            assert!(Email::new(ok).is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for bad in [
            "",
            "   ",
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@.example.com",
            "user@example..com",
            "user@-example.com",
        ] {
            assert!(Email::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_rejection_is_unprocessable() {
        let err = Email::new("nope").unwrap_err();
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_overlong_local_part() {
        let address = format!("{}@example.com", "a".repeat(MAX_LOCAL_LEN + 1));
        assert!(Email::new(address).is_err());
    }

    #[test]
    fn test_lowercases_and_trims() {
        let email: Email = "  Alice@Example.COM ".parse().unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
        assert_eq!(email.to_string(), "alice@example.com");
    }
}
