//! List Reviews Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::ReviewWithBook;
use crate::domain::repository::ReviewRepository;
use crate::domain::services::{page_offset, total_pages};
use crate::domain::value_objects::Page;
use crate::error::ReviewResult;

pub struct ListReviewsOutput {
    pub items: Vec<ReviewWithBook>,
    pub total_pages: u64,
}

pub struct ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    review_repo: Arc<R>,
    page_size: u32,
}

impl<R> ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repo: Arc<R>, page_size: u32) -> Self {
        Self {
            review_repo,
            page_size: page_size.max(1),
        }
    }

    /// One page of the user's reviews, most recently updated first
    pub async fn execute(&self, acting: &UserId, page: Page) -> ReviewResult<ListReviewsOutput> {
        let offset = page_offset(page.get(), self.page_size);

        let (items, total) = tokio::try_join!(
            self.review_repo.list_by_user(acting, self.page_size, offset),
            self.review_repo.count_by_user(acting),
        )?;

        Ok(ListReviewsOutput {
            items,
            total_pages: total_pages(total, self.page_size),
        })
    }
}
