//! Get-or-Create Book Use Case
//!
//! Books are created lazily the first time a review references a
//! title/author pair. The unique index on `(title, author)` is the arbiter
//! when two requests race on the first creation.

use std::sync::Arc;

use crate::domain::entities::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::error::{ReviewError, ReviewResult};

pub struct GetOrCreateBookUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
    max_attempts: u32,
}

impl<B> GetOrCreateBookUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>, max_attempts: u32) -> Self {
        Self {
            book_repo,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Return the existing book for the pair, or create it from `draft`
    ///
    /// An existing book is reused as-is; its metadata is never refreshed.
    pub async fn execute(&self, draft: BookDraft) -> ReviewResult<Book> {
        for attempt in 1..=self.max_attempts {
            if let Some(book) = self
                .book_repo
                .find_by_title_author(&draft.title, &draft.author)
                .await?
            {
                return Ok(book);
            }

            let book = Book::new(draft.clone());
            if self.book_repo.insert_if_absent(&book).await? {
                tracing::info!(
                    book_id = %book.book_id,
                    title = %book.title,
                    "Book created"
                );
                return Ok(book);
            }

            tracing::debug!(
                attempt,
                title = %draft.title,
                "Book insert lost a race, looking up again"
            );
        }

        Err(ReviewError::BookUnavailable {
            title: draft.title,
            author: draft.author,
        })
    }
}
