//! PostgreSQL User Store

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::UserId;
use sqlx::PgPool;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_user(
        &self,
        query: QueryAs<'_, sqlx::Postgres, UserRow, PgArguments>,
    ) -> AuthResult<Option<User>> {
        query
            .fetch_optional(&self.pool)
            .await?
            .map(UserRow::into_user)
            .transpose()
    }
}

/// `users.email` is UNIQUE; a violation there means the address is taken.
fn email_conflict(err: sqlx::Error) -> AuthError {
    if is_unique_violation(&err) {
        AuthError::EmailTaken
    } else {
        AuthError::Database(err)
    }
}

fn found(rows_affected: u64) -> AuthResult<()> {
    match rows_affected {
        0 => Err(AuthError::UserNotFound),
        _ => Ok(()),
    }
}

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            "INSERT INTO users (user_id, user_name, email, password_hash, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(email_conflict)?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        self.fetch_user(
            sqlx::query_as("SELECT * FROM users WHERE user_id = $1").bind(*user_id.as_uuid()),
        )
        .await
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.fetch_user(
            sqlx::query_as("SELECT * FROM users WHERE email = $1")
                .bind(email.as_str().to_owned()),
        )
        .await
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?,
        )
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let done = sqlx::query(
            "UPDATE users \
             SET user_name = $2, email = $3, password_hash = $4, updated_at = $5 \
             WHERE user_id = $1",
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(email_conflict)?;

        found(done.rows_affected())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        let done = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        found(done.rows_affected())
    }
}

/// `SELECT *` over `users`; column names match the migration.
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            user_id: UserId::from_uuid(self.user_id),
            user_name: UserName::from_db(self.user_name),
            email: Email::from_db(self.email),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
