//! Repository Traits
//!
//! Interfaces for data persistence and the external book lookup.
//! Implementations are in the infrastructure layer.

use kernel::id::{ReviewId, UserId};

use crate::domain::entities::{Book, BookVolume, Review, ReviewWithBook};
use crate::domain::services::DateBucket;
use crate::error::ReviewResult;

/// Book repository trait
///
/// `(title, author)` is unique in the store.
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// Find the book for an exact title/author pair
    async fn find_by_title_author(&self, title: &str, author: &str) -> ReviewResult<Option<Book>>;

    /// Insert unless the pair already exists; `false` means someone else won
    async fn insert_if_absent(&self, book: &Book) -> ReviewResult<bool>;
}

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Create a new review
    async fn create(&self, review: &Review) -> ReviewResult<()>;

    /// Find a review joined with its book
    async fn find_by_id(&self, review_id: &ReviewId) -> ReviewResult<Option<ReviewWithBook>>;

    /// Overwrite the review content, scoped to its owner
    ///
    /// Returns `ReviewError::ReviewNotFound` when no row matched.
    async fn update(&self, review: &Review) -> ReviewResult<()>;

    /// Delete a review, scoped to its owner
    async fn delete(&self, review_id: &ReviewId, owner: &UserId) -> ReviewResult<()>;

    /// One page of the user's reviews, most recently updated first
    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: u32,
        offset: u64,
    ) -> ReviewResult<Vec<ReviewWithBook>>;

    /// Total reviews owned by the user
    async fn count_by_user(&self, user_id: &UserId) -> ReviewResult<u64>;

    /// Whether the user already reviewed the title/author pair
    async fn exists_for_book(&self, user_id: &UserId, title: &str, author: &str)
    -> ReviewResult<bool>;
}

/// Aggregates over finished reviews
#[trait_variant::make(StatsRepository: Send)]
pub trait LocalStatsRepository {
    /// Reviews whose finish date falls inside the bucket
    async fn count_finished(&self, user_id: &UserId, bucket: DateBucket) -> ReviewResult<u64>;

    /// Sum of linked book page counts over the same set (0 when empty)
    async fn sum_pages_finished(&self, user_id: &UserId, bucket: DateBucket) -> ReviewResult<u64>;
}

/// External book metadata lookup
#[trait_variant::make(BookLookup: Send)]
pub trait LocalBookLookup {
    async fn search(&self, query: &str) -> ReviewResult<Vec<BookVolume>>;
}
