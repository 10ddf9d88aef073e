//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::response::Envelope;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    DeleteAccountUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
    UpdateAccountInput, UpdateAccountUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthPayload, LoginRequest, RegisterRequest, UpdateAccountRequest, UserResponse,
};
use crate::presentation::extractor::{CurrentUser, IdentityState};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: Arc::new(TokenService::new(&config)),
            config: Arc::new(config),
        }
    }
}

impl<R> IdentityState for AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    type Users = R;

    fn user_repo(&self) -> Arc<R> {
        self.repo.clone()
    }

    fn token_service(&self) -> Arc<TokenService> {
        self.tokens.clone()
    }
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
            password_confirmation: req.password_confirmation,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Envelope::success(AuthPayload::User(UserResponse::new(
            &output.user,
            output.token,
        ))),
    ))
}

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Envelope<AuthPayload>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case =
        LoginUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Envelope::success(AuthPayload::User(UserResponse::new(
        &output.user,
        output.token,
    ))))
}

// ============================================================================
// Authenticated
// ============================================================================

/// GET /auth/whoami
pub async fn whoami(CurrentUser(user): CurrentUser) -> Envelope<AuthPayload> {
    Envelope::success(AuthPayload::Message(format!(
        "Your name is {}",
        user.user_name
    )))
}

/// PATCH /auth/account
pub async fn update_account<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> AuthResult<Envelope<AuthPayload>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case =
        UpdateAccountUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let output = use_case
        .execute(
            user,
            UpdateAccountInput {
                password: req.password,
                new_name: req.new_name,
                new_email: req.new_email,
                new_password: req.new_password,
            },
        )
        .await?;

    Ok(Envelope::success(AuthPayload::User(UserResponse::new(
        &output.user,
        output.token,
    ))))
}

/// DELETE /auth/account
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user): CurrentUser,
) -> AuthResult<Envelope<AuthPayload>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    DeleteAccountUseCase::new(state.repo.clone())
        .execute(&user)
        .await?;

    Ok(Envelope::success(AuthPayload::Message(
        "deleted successfully".to_string(),
    )))
}
