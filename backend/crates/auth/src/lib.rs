//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, extractors
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless HS256 bearer tokens (1 hour, no refresh, no revocation)
//! - Per-request identity resolution via [`CurrentUser`] / [`MaybeUser`]
//! - Account update and deletion
//!
//! ## Security Model
//! - Passwords hashed with Argon2id off the async runtime
//! - Tokens are re-verified and the user row re-read on every request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenClaims, TokenService};
pub use domain::entity::user::User;
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::extractor::{CurrentUser, IdentityState, MaybeUser};
pub use presentation::handlers::AuthAppState;
pub use presentation::router::{auth_router, auth_routes};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
