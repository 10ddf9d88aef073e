//! Review Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, ownership guard, calendar buckets
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository and the Google Books lookup
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Books created lazily per (title, author), race-safe
//! - Owner-scoped review create/update/delete
//! - Paginated listing (10 per page, newest update first)
//! - Monthly/yearly reading statistics by finish date
//! - Book search with an "already reviewed" flag
//!
//! Identity comes from the `auth` crate's extractors; every review route
//! except book search requires a bearer token.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::ReviewConfig;
pub use error::{ReviewError, ReviewResult};
pub use infra::{GoogleBooksClient, PgReviewRepository};
pub use presentation::{ReviewAppState, ReviewStore, review_routes};
