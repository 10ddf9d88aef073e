//! Bearer Token Service
//!
//! Issues and verifies HS256 JWTs. Tokens are stateless: validity is a
//! function of signature and expiry only, there is no revocation list.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// Claims carried by every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub sub: UserId,
    pub name: String,
    pub email: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Signs and verifies tokens with a process-wide secret
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    has_key: bool,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
            has_key: !secret.is_empty(),
        }
    }

    /// Issue a token for `user` valid for the configured TTL
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        self.issue_at(user, Utc::now().timestamp())
    }

    pub(crate) fn issue_at(&self, user: &User, now: i64) -> AuthResult<String> {
        if !self.has_key {
            return Err(AuthError::Internal("Signing key unavailable".to_string()));
        }

        let claims = TokenClaims {
            sub: user.user_id,
            name: user.user_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
    }

    /// Verify signature, algorithm and expiry
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        if !self.has_key {
            return Err(AuthError::Internal("Signing key unavailable".to_string()));
        }

        jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                AuthError::TokenInvalid
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{Email, RawPassword, UserName, UserPassword};

    fn alice() -> User {
        let raw = RawPassword::new("pw123".to_string()).unwrap();
        User::new(
            UserName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    fn service(secret: &str) -> TokenService {
        TokenService::new(&AuthConfig::with_secret(secret))
    }

    #[test]
    fn test_issue_and_verify() {
        let user = alice();
        let tokens = service("s3cret");

        let token = tokens.issue(&user).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, user.user_id);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let user = alice();
        let tokens = service("s3cret");

        let two_hours_ago = Utc::now().timestamp() - 7200;
        let token = tokens.issue_at(&user, two_hours_ago).unwrap();

        assert!(matches!(tokens.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service("one").issue(&alice()).unwrap();
        assert!(matches!(
            service("two").verify(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let user = alice();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: user.user_id,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            iat: now,
            exp: now + 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"s3cret"),
        )
        .unwrap();

        assert!(matches!(
            service("s3cret").verify(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            service("s3cret").verify("not.a.token"),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_empty_secret_is_internal() {
        let result = service("").issue(&alice());
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
