//! Auth Router

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    auth_routes(AuthAppState::new(repo, config))
}

/// Routes over an existing state (shares the token service with other routers)
pub fn auth_routes<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/whoami", get(handlers::whoami))
        .route(
            "/account",
            patch(handlers::update_account::<R>).delete(handlers::delete_account::<R>),
        )
        .with_state(state)
}
