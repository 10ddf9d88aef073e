//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_review;
pub mod delete_review;
pub mod get_or_create_book;
pub mod get_stats;
pub mod list_reviews;
pub mod search_books;
pub mod update_review;

// Re-exports
pub use config::ReviewConfig;
pub use create_review::{CreateReviewInput, CreateReviewUseCase, ReviewFields};
pub use delete_review::DeleteReviewUseCase;
pub use get_or_create_book::GetOrCreateBookUseCase;
pub use get_stats::{GetStatsInput, GetStatsUseCase, ReadingStats};
pub use list_reviews::{ListReviewsOutput, ListReviewsUseCase};
pub use search_books::{BookSearchResult, SearchBooksUseCase};
pub use update_review::{UpdateReviewInput, UpdateReviewUseCase};
