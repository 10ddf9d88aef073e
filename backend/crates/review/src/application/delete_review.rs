//! Delete Review Use Case

use std::sync::Arc;

use kernel::id::{ReviewId, UserId};

use crate::domain::repository::ReviewRepository;
use crate::domain::services::ensure_owner;
use crate::error::{ReviewError, ReviewResult};

pub struct DeleteReviewUseCase<R>
where
    R: ReviewRepository,
{
    review_repo: Arc<R>,
}

impl<R> DeleteReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repo: Arc<R>) -> Self {
        Self { review_repo }
    }

    pub async fn execute(&self, acting: &UserId, review_id: &ReviewId) -> ReviewResult<()> {
        let found = self
            .review_repo
            .find_by_id(review_id)
            .await?
            .ok_or(ReviewError::ReviewNotFound)?;

        ensure_owner(acting, &found.review.user_id, "Couldn't delete this review")?;

        self.review_repo.delete(review_id, acting).await?;

        tracing::info!(review_id = %review_id, user_id = %acting, "Review deleted");

        Ok(())
    }
}
