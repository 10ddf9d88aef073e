//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait (the credential store)
///
/// Email uniqueness is enforced by the store: `create` and `update` return
/// `AuthError::EmailTaken` on a duplicate.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Overwrite name, email and password hash in a single statement
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Delete user (reviews cascade)
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;
}
