//! Delete Account Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct DeleteAccountUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteAccountUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Delete `user`; their reviews go with them (FK cascade)
    pub async fn execute(&self, user: &User) -> AuthResult<()> {
        self.user_repo.delete(&user.user_id).await?;

        tracing::info!(user_id = %user.user_id, "Account deleted");

        Ok(())
    }
}
