//! Update Review Use Case

use std::sync::Arc;

use kernel::id::{ReviewId, UserId};

use crate::application::create_review::ReviewFields;
use crate::domain::entities::ReviewWithBook;
use crate::domain::repository::ReviewRepository;
use crate::domain::services::ensure_owner;
use crate::error::{ReviewError, ReviewResult};

pub struct UpdateReviewInput {
    pub review_id: ReviewId,
    pub fields: ReviewFields,
}

pub struct UpdateReviewUseCase<R>
where
    R: ReviewRepository,
{
    review_repo: Arc<R>,
}

impl<R> UpdateReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repo: Arc<R>) -> Self {
        Self { review_repo }
    }

    /// Overwrite the review's content; the book link never changes
    pub async fn execute(
        &self,
        acting: &UserId,
        input: UpdateReviewInput,
    ) -> ReviewResult<ReviewWithBook> {
        let ReviewWithBook { mut review, book } = self
            .review_repo
            .find_by_id(&input.review_id)
            .await?
            .ok_or(ReviewError::ReviewNotFound)?;

        ensure_owner(acting, &review.user_id, "Couldn't update this review")?;

        let content = input.fields.into_content()?;
        review.revise(content);
        self.review_repo.update(&review).await?;

        tracing::info!(
            review_id = %review.review_id,
            user_id = %acting,
            "Review updated"
        );

        Ok(ReviewWithBook { review, book })
    }
}
