//! Search Books Use Case
//!
//! Free-text search against the external metadata lookup, flagging the
//! books the caller has already reviewed.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::BookVolume;
use crate::domain::repository::{BookLookup, ReviewRepository};
use crate::error::{ReviewError, ReviewResult};

/// One search hit
#[derive(Debug, Clone)]
pub struct BookSearchResult {
    pub volume: BookVolume,
    /// Always false for anonymous callers
    pub is_reviewed: bool,
}

pub struct SearchBooksUseCase<R, L>
where
    R: ReviewRepository,
    L: BookLookup,
{
    review_repo: Arc<R>,
    lookup: Arc<L>,
}

impl<R, L> SearchBooksUseCase<R, L>
where
    R: ReviewRepository,
    L: BookLookup,
{
    pub fn new(review_repo: Arc<R>, lookup: Arc<L>) -> Self {
        Self {
            review_repo,
            lookup,
        }
    }

    pub async fn execute(
        &self,
        query: &str,
        acting: Option<&UserId>,
    ) -> ReviewResult<Vec<BookSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ReviewError::BadRequest(
                "search word must be 1 or more characters".to_string(),
            ));
        }

        let volumes = self.lookup.search(query).await?;

        let mut results = Vec::with_capacity(volumes.len());
        for volume in volumes {
            // Scoped to the caller's own reviews
            let is_reviewed = match acting {
                Some(user_id) => {
                    self.review_repo
                        .exists_for_book(user_id, &volume.title, &volume.author())
                        .await?
                }
                None => false,
            };
            results.push(BookSearchResult {
                volume,
                is_reviewed,
            });
        }

        tracing::debug!(query, hits = results.len(), "Book search");

        Ok(results)
    }
}
