//! API Server Entry Point
//!
//! Wires the auth and review routers onto one Postgres pool. Startup
//! failures are `anyhow`; request-time errors go through `kernel::error`.

use anyhow::Context;
use auth::{AuthAppState, AuthConfig, PgAuthRepository, auth_routes};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use review::{GoogleBooksClient, PgReviewRepository, ReviewAppState, ReviewConfig, review_routes};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str = "api=info,auth=info,review=info,tower_http=info";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const POOL_SIZE: u32 = 5;

/// Non-empty environment variable
fn setting(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Signing key from `SECRET_KEY`; debug builds fall back to a random one
fn auth_config() -> anyhow::Result<AuthConfig> {
    if let Some(secret) = setting("SECRET_KEY") {
        return Ok(AuthConfig::with_secret(secret));
    }
    anyhow::ensure!(
        cfg!(debug_assertions),
        "SECRET_KEY must be set in release builds"
    );
    tracing::warn!("SECRET_KEY not set, tokens are signed with a throwaway key");
    Ok(AuthConfig::development())
}

fn review_config() -> ReviewConfig {
    setting("BOOK_LOOKUP_URL").map_or_else(ReviewConfig::default, ReviewConfig::with_lookup_url)
}

fn listen_addr() -> anyhow::Result<SocketAddr> {
    let port = match setting("PORT") {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("PORT={raw} is not a valid port"))?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}

async fn connect_database() -> anyhow::Result<PgPool> {
    let url = setting("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(POOL_SIZE)
        .connect(&url)
        .await
        .context("connecting to Postgres")?;

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("running migrations")?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// Browser clients listed in `FRONTEND_ORIGINS` (comma separated)
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = setting("FRONTEND_ORIGINS")
        .as_deref()
        .unwrap_or(DEFAULT_FRONTEND_ORIGINS)
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// `/auth/*` plus the review routes; both sides verify tokens with the
/// same service and resolve users from the same table.
fn build_app(pool: PgPool) -> anyhow::Result<Router> {
    let auth_state = AuthAppState::new(PgAuthRepository::new(pool.clone()), auth_config()?);

    let config = review_config();
    let lookup = GoogleBooksClient::new(&config)?;
    tracing::info!(endpoint = %config.book_lookup_url, "Book lookup configured");

    let review_state = ReviewAppState::new(
        PgReviewRepository::new(pool.clone()),
        PgAuthRepository::new(pool),
        Arc::clone(&auth_state.tokens),
        lookup,
        config,
    );

    Ok(Router::new()
        .nest("/auth", auth_routes(auth_state))
        .merge(review_routes(review_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let pool = connect_database().await?;
    let app = build_app(pool)?;

    let addr = listen_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
