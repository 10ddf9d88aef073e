//! Review Router

use axum::{
    Router,
    routing::{get, patch},
};
use auth::UserRepository;

use crate::domain::repository::BookLookup;
use crate::presentation::handlers::{self, ReviewAppState, ReviewStore};

/// `/review/...` and `/book/search` over a shared state
///
/// Both `/review` and `/review/` are served so clients may use either.
pub fn review_routes<R, U, L>(state: ReviewAppState<R, U, L>) -> Router
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/review",
            get(handlers::list_reviews::<R, U, L>).post(handlers::create_review::<R, U, L>),
        )
        .route(
            "/review/",
            get(handlers::list_reviews::<R, U, L>).post(handlers::create_review::<R, U, L>),
        )
        .route("/review/statistics", get(handlers::get_stats::<R, U, L>))
        .route(
            "/review/{id}",
            patch(handlers::update_review::<R, U, L>).delete(handlers::delete_review::<R, U, L>),
        )
        .route("/book/search", get(handlers::search_books::<R, U, L>))
        .with_state(state)
}
