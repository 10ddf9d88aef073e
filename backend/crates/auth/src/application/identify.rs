//! Identify Use Case
//!
//! Resolves a bearer token to the current user row. Runs on every
//! authenticated request; nothing is cached between requests.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct IdentifyUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> IdentifyUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    /// Verify `token` and load its subject
    ///
    /// The row is looked up by the `sub` claim, so a user who changed their
    /// email keeps a working token; a deleted user does not.
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let claims = self.tokens.verify(token)?;

        self.user_repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
