//! Update Account Use Case
//!
//! Changes name, email and/or password after re-checking the current
//! password. Blank fields keep their current value.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::hashing::{hash_password, verify_password};
use crate::application::token::TokenService;
use crate::domain::entity::user::{AccountChange, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Update account input
pub struct UpdateAccountInput {
    /// Current password
    pub password: String,
    pub new_name: String,
    pub new_email: String,
    pub new_password: String,
}

/// Update account output
pub struct UpdateAccountOutput {
    pub user: User,
    /// Fresh token carrying the updated claims
    pub token: String,
}

pub struct UpdateAccountUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> UpdateAccountUseCase<U>
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

    pub async fn execute(
        &self,
        mut user: User,
        input: UpdateAccountInput,
    ) -> AuthResult<UpdateAccountOutput> {
        let current = RawPassword::new(input.password)?;
        let valid = verify_password(
            user.password_hash.clone(),
            current,
            self.config.password_pepper.clone(),
        )
        .await?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        if !input.new_name.trim().is_empty() {
            user.apply(AccountChange::Rename(UserName::new(&input.new_name)?));
        }

        if !input.new_email.trim().is_empty() {
            let email = Email::new(input.new_email)?;
            if email != user.email {
                if self.user_repo.exists_by_email(&email).await? {
                    return Err(AuthError::EmailTaken);
                }
                user.apply(AccountChange::ChangeEmail(email));
            }
        }

        if !input.new_password.is_empty() {
            let raw = RawPassword::new(input.new_password)?;
            let hash = hash_password(raw, self.config.password_pepper.clone()).await?;
            user.apply(AccountChange::ChangePassword(hash));
        }

        self.user_repo.update(&user).await?;
        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.user_id, "Account updated");

        Ok(UpdateAccountOutput { user, token })
    }
}
