//! Identity Extractors
//!
//! Resolve the `Authorization: Bearer` header into the current [`User`] for
//! any router whose state implements [`IdentityState`].

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use platform::bearer::{BearerToken, extract_bearer};

use crate::application::IdentifyUseCase;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Router state that can resolve identities
pub trait IdentityState: Clone + Send + Sync + 'static {
    type Users: UserRepository + Send + Sync + 'static;

    fn user_repo(&self) -> Arc<Self::Users>;

    fn token_service(&self) -> Arc<TokenService>;
}

/// Authenticated caller; rejects with 401 when the token is missing or bad
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Optionally authenticated caller
///
/// No header yields `None`. A header that is present but invalid is still
/// rejected.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

async fn resolve<S: IdentityState>(token: &str, state: &S) -> AuthResult<User> {
    IdentifyUseCase::new(state.user_repo(), state.token_service())
        .execute(token)
        .await
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: IdentityState,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match extract_bearer(&parts.headers) {
            BearerToken::Present(token) => Ok(CurrentUser(resolve(&token, state).await?)),
            BearerToken::Missing => Err(AuthError::MissingToken),
            BearerToken::Malformed => Err(AuthError::TokenInvalid),
        }
    }
}

impl<S> FromRequestParts<S> for MaybeUser
where
    S: IdentityState,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match extract_bearer(&parts.headers) {
            BearerToken::Present(token) => Ok(MaybeUser(Some(resolve(&token, state).await?))),
            BearerToken::Missing => Ok(MaybeUser(None)),
            BearerToken::Malformed => Err(AuthError::TokenInvalid),
        }
    }
}
