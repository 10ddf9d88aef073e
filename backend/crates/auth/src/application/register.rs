//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::hashing::hash_password;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Register output
pub struct RegisterOutput {
    pub user: User,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let user_name = UserName::new(&input.name)?;
        let email = Email::new(input.email)?;

        if input.password_confirmation.is_empty() {
            return Err(AuthError::Validation(
                "Password confirmation is required".to_string(),
            ));
        }
        if input.password != input.password_confirmation {
            return Err(AuthError::Validation(
                "Password confirmation does not match".to_string(),
            ));
        }
        let raw_password = RawPassword::new(input.password)?;

        // Fast path; the unique index still decides under a race
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = hash_password(raw_password, self.config.password_pepper.clone()).await?;

        let user = User::new(user_name, email, password_hash);
        self.user_repo.create(&user).await?;

        let token = self.tokens.issue(&user)?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}
