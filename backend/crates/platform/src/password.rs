//! Password Hashing and Verification
//!
//! Argon2id with fixed cost parameters, PHC-string storage and an optional
//! application-wide pepper appended to the secret before hashing. Clear-text
//! material is wiped from memory as soon as it is no longer needed.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Longest accepted password, counted in code points after NFKC
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Argon2id cost: 19 MiB, two passes, single lane
struct Cost {
    memory_kib: u32,
    iterations: u32,
    lanes: u32,
}

const COST: Cost = Cost {
    memory_kib: 19_456,
    iterations: 2,
    lanes: 1,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Control characters other than tab and newline
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

fn hasher() -> Result<Argon2<'static>, PasswordHashError> {
    Params::new(COST.memory_kib, COST.iterations, COST.lanes, None)
        .map(|params| Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
}

/// Secret bytes followed by the pepper, wiped on drop
fn keyed_input(secret: &[u8], pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
    let pepper = pepper.unwrap_or_default();
    let mut input = Zeroizing::new(Vec::with_capacity(secret.len() + pepper.len()));
    input.extend_from_slice(secret);
    input.extend_from_slice(pepper);
    input
}

/// Validated clear-text password
///
/// Not `Clone`, redacted in `Debug`, zeroized on drop.
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("pw123".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// NFKC-normalizes, then refuses blank input, control characters and
    /// anything over [`MAX_PASSWORD_LENGTH`]. There is no minimum length.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let raw = Zeroizing::new(raw);
        let candidate = Self(raw.nfkc().collect());

        if candidate.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let actual = candidate.0.chars().count();
        if actual > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual,
            });
        }

        let forbidden = |ch: char| ch.is_control() && !matches!(ch, '\t' | '\n');
        if candidate.0.chars().any(forbidden) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(candidate)
    }

    /// Argon2id PHC string with a fresh random salt per call
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let input = keyed_input(self.0.as_bytes(), pepper);
        let salt = SaltString::generate(OsRng);

        let phc = hasher()?
            .hash_password(&input, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            phc: phc.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword([REDACTED])")
    }
}

/// Stored hash in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    phc: String,
}

impl HashedPassword {
    /// Accepts only strings that parse as PHC
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = s.into();
        match PasswordHash::new(&phc) {
            Ok(_) => Ok(Self { phc }),
            Err(_) => Err(PasswordHashError::InvalidHashFormat),
        }
    }

    pub fn as_phc_string(&self) -> &str {
        &self.phc
    }

    /// Constant-time check; `pepper` must be the one used at hash time.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let (Ok(parsed), Ok(argon2)) = (PasswordHash::new(&self.phc), hasher()) else {
            return false;
        };
        let input = keyed_input(password.0.as_bytes(), pepper);
        argon2.verify_password(&input, &parsed).is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword([HASH])")
    }
}
