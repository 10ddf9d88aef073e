//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// Registered account. `user_id` is the token subject; `password_hash`
/// never leaves the crate through a DTO.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One field of an account edit
#[derive(Debug)]
pub enum AccountChange {
    Rename(UserName),
    ChangeEmail(Email),
    ChangePassword(UserPassword),
}

impl User {
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        let registered_at = Utc::now();
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            created_at: registered_at,
            updated_at: registered_at,
        }
    }

    /// Applies the edit and bumps `updated_at`
    pub fn apply(&mut self, change: AccountChange) {
        match change {
            AccountChange::Rename(name) => self.user_name = name,
            AccountChange::ChangeEmail(email) => self.email = email,
            AccountChange::ChangePassword(hash) => self.password_hash = hash,
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn bob() -> User {
        let raw = RawPassword::new("pw123".to_string()).unwrap();
        User::new(
            UserName::new("Bob").unwrap(),
            Email::new("bob@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_new_user_timestamps_match() {
        let user = bob();
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_apply_touches_updated_at() {
        let mut user = bob();
        let id = user.user_id;
        let before = user.updated_at;

        user.apply(AccountChange::Rename(UserName::new("Robert").unwrap()));
        user.apply(AccountChange::ChangeEmail(Email::new("robert@example.com").unwrap()));

        assert_eq!(user.user_id, id);
        assert_eq!(user.user_name.as_str(), "Robert");
        assert_eq!(user.email.as_str(), "robert@example.com");
        assert!(user.updated_at >= before);
        assert!(user.updated_at >= user.created_at);
    }
}
