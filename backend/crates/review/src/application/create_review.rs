//! Create Review Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::get_or_create_book::GetOrCreateBookUseCase;
use crate::domain::entities::{BookDraft, Review, ReviewContent, ReviewWithBook};
use crate::domain::repository::{BookRepository, ReviewRepository};
use crate::domain::value_objects::{Rating, ReadingStatus, parse_read_date};
use crate::error::{ReviewError, ReviewResult};

/// Review fields as supplied by the client, shared by create and update
#[derive(Debug, Clone, Default)]
pub struct ReviewFields {
    pub comment: String,
    pub rating: f64,
    pub reading_status: String,
    pub read_pages: i32,
    pub start_read_at: String,
    pub finish_read_at: String,
}

impl ReviewFields {
    /// Validate into domain content
    pub fn into_content(self) -> ReviewResult<ReviewContent> {
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::Validation("Comment is required".to_string()));
        }
        if self.read_pages < 0 {
            return Err(ReviewError::Validation(
                "Read pages must not be negative".to_string(),
            ));
        }

        Ok(ReviewContent {
            comment: comment.to_string(),
            rating: Rating::new(self.rating)?,
            reading_status: ReadingStatus::parse(&self.reading_status)?,
            read_pages: self.read_pages,
            start_read_at: parse_read_date("startReadAt", &self.start_read_at)?,
            finish_read_at: parse_read_date("finishReadAt", &self.finish_read_at)?,
        })
    }
}

/// Create review input
#[derive(Debug, Clone, Default)]
pub struct CreateReviewInput {
    pub fields: ReviewFields,
    pub book_title: String,
    pub book_author: String,
    pub book_thumbnail_link: String,
    pub book_published_date: String,
    pub book_num_of_pages: i32,
}

impl CreateReviewInput {
    fn book_draft(&self) -> ReviewResult<BookDraft> {
        let title = self.book_title.trim();
        let author = self.book_author.trim();
        if title.is_empty() {
            return Err(ReviewError::Validation("Book title is required".to_string()));
        }
        if author.is_empty() {
            return Err(ReviewError::Validation("Book author is required".to_string()));
        }
        if self.book_num_of_pages < 0 {
            return Err(ReviewError::Validation(
                "Book page count must not be negative".to_string(),
            ));
        }

        Ok(BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            thumbnail_link: self.book_thumbnail_link.trim().to_string(),
            published_date: self.book_published_date.trim().to_string(),
            num_of_pages: self.book_num_of_pages,
        })
    }
}

pub struct CreateReviewUseCase<R>
where
    R: BookRepository + ReviewRepository,
{
    repo: Arc<R>,
    books: GetOrCreateBookUseCase<R>,
}

impl<R> CreateReviewUseCase<R>
where
    R: BookRepository + ReviewRepository,
{
    pub fn new(repo: Arc<R>, book_create_attempts: u32) -> Self {
        Self {
            books: GetOrCreateBookUseCase::new(repo.clone(), book_create_attempts),
            repo,
        }
    }

    pub async fn execute(
        &self,
        acting: &UserId,
        input: CreateReviewInput,
    ) -> ReviewResult<ReviewWithBook> {
        // Validate everything before touching the store
        let draft = input.book_draft()?;
        let content = input.fields.into_content()?;

        let book = self.books.execute(draft).await?;

        let review = Review::new(*acting, book.book_id, content);
        self.repo.create(&review).await?;

        tracing::info!(
            review_id = %review.review_id,
            user_id = %acting,
            book_id = %book.book_id,
            "Review created"
        );

        Ok(ReviewWithBook { review, book })
    }
}
