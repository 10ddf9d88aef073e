//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use auth::{CurrentUser, IdentityState, MaybeUser, TokenService, UserRepository};
use kernel::id::ReviewId;
use kernel::response::Envelope;
use std::sync::Arc;

use crate::application::config::ReviewConfig;
use crate::application::{
    CreateReviewUseCase, DeleteReviewUseCase, GetStatsInput, GetStatsUseCase, ListReviewsUseCase,
    SearchBooksUseCase, UpdateReviewInput, UpdateReviewUseCase,
};
use crate::domain::repository::{BookLookup, BookRepository, ReviewRepository, StatsRepository};
use crate::domain::value_objects::Page;
use crate::error::ReviewResult;
use crate::presentation::dto::{
    BookResponse, CreateReviewRequest, ListQuery, ReviewListResponse, ReviewPayload,
    ReviewResponse, SearchQuery, StatsQuery, StatsResponse, UpdateReviewRequest, parse_int_param,
};

/// Everything the review routes need from the store
pub trait ReviewStore:
    BookRepository + ReviewRepository + StatsRepository + Clone + Send + Sync + 'static
{
}

impl<T> ReviewStore for T where
    T: BookRepository + ReviewRepository + StatsRepository + Clone + Send + Sync + 'static
{
}

/// Shared state for review and book handlers
#[derive(Clone)]
pub struct ReviewAppState<R, U, L>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub users: Arc<U>,
    pub tokens: Arc<TokenService>,
    pub lookup: Arc<L>,
    pub config: Arc<ReviewConfig>,
}

impl<R, U, L> ReviewAppState<R, U, L>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    /// `tokens` must be the same service the auth routes issue with
    pub fn new(repo: R, users: U, tokens: Arc<TokenService>, lookup: L, config: ReviewConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            users: Arc::new(users),
            tokens,
            lookup: Arc::new(lookup),
            config: Arc::new(config),
        }
    }
}

impl<R, U, L> IdentityState for ReviewAppState<R, U, L>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    type Users = U;

    fn user_repo(&self) -> Arc<U> {
        self.users.clone()
    }

    fn token_service(&self) -> Arc<TokenService> {
        self.tokens.clone()
    }
}

// ============================================================================
// Reviews
// ============================================================================

/// GET /review/?page=
pub async fn list_reviews<R, U, L>(
    State(state): State<ReviewAppState<R, U, L>>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ReviewResult<Envelope<ReviewPayload>>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;
    let page = match parse_int_param("page", query.page.as_deref())? {
        Some(page) => Page::new(page)?,
        None => Page::FIRST,
    };

    let output = ListReviewsUseCase::new(state.repo.clone(), state.config.page_size)
        .execute(&user.user_id, page)
        .await?;

    Ok(Envelope::success(ReviewPayload::ReviewList(
        ReviewListResponse::from(output),
    )))
}

/// POST /review/
pub async fn create_review<R, U, L>(
    State(state): State<ReviewAppState<R, U, L>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> ReviewResult<impl IntoResponse>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let created = CreateReviewUseCase::new(state.repo.clone(), state.config.book_create_attempts)
        .execute(&user.user_id, req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Envelope::success(ReviewPayload::Review(ReviewResponse::from(created))),
    ))
}

/// PATCH /review/{id}
pub async fn update_review<R, U, L>(
    State(state): State<ReviewAppState<R, U, L>>,
    CurrentUser(user): CurrentUser,
    review_id: Result<Path<ReviewId>, PathRejection>,
    payload: Result<Json<UpdateReviewRequest>, JsonRejection>,
) -> ReviewResult<Envelope<ReviewPayload>>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    let Path(review_id) = review_id?;
    let Json(req) = payload?;

    let updated = UpdateReviewUseCase::new(state.repo.clone())
        .execute(
            &user.user_id,
            UpdateReviewInput {
                review_id,
                fields: req.into(),
            },
        )
        .await?;

    Ok(Envelope::success(ReviewPayload::Review(
        ReviewResponse::from(updated),
    )))
}

/// DELETE /review/{id}
pub async fn delete_review<R, U, L>(
    State(state): State<ReviewAppState<R, U, L>>,
    CurrentUser(user): CurrentUser,
    review_id: Result<Path<ReviewId>, PathRejection>,
) -> ReviewResult<Envelope<ReviewPayload>>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    let Path(review_id) = review_id?;

    DeleteReviewUseCase::new(state.repo.clone())
        .execute(&user.user_id, &review_id)
        .await?;

    Ok(Envelope::success(ReviewPayload::Message(
        "deleted successfully".to_string(),
    )))
}

/// GET /review/statistics?month=&year=
pub async fn get_stats<R, U, L>(
    State(state): State<ReviewAppState<R, U, L>>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> ReviewResult<Envelope<ReviewPayload>>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;
    let input = GetStatsInput {
        month: parse_int_param("month", query.month.as_deref())?,
        year: parse_int_param("year", query.year.as_deref())?,
    };

    let stats = GetStatsUseCase::new(state.repo.clone())
        .execute(&user.user_id, input)
        .await?;

    Ok(Envelope::success(ReviewPayload::Stats(StatsResponse::from(
        stats,
    ))))
}

// ============================================================================
// Books
// ============================================================================

/// GET /book/search?search=
///
/// Works anonymously; `isReviewed` is only computed for a signed-in caller.
pub async fn search_books<R, U, L>(
    State(state): State<ReviewAppState<R, U, L>>,
    MaybeUser(user): MaybeUser,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ReviewResult<Envelope<ReviewPayload>>
where
    R: ReviewStore,
    U: UserRepository + Clone + Send + Sync + 'static,
    L: BookLookup + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;
    let search = query.search.unwrap_or_default();

    let results = SearchBooksUseCase::new(state.repo.clone(), state.lookup.clone())
        .execute(&search, user.as_ref().map(|u| &u.user_id))
        .await?;

    Ok(Envelope::success(ReviewPayload::Books(
        results.into_iter().map(BookResponse::from).collect(),
    )))
}
