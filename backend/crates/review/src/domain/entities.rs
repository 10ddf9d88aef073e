//! Domain Entities
//!
//! Core business entities for the review domain.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{BookId, ReviewId, UserId};

use crate::domain::value_objects::{Rating, ReadingStatus};

/// Book metadata supplied by the client when reviewing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub thumbnail_link: String,
    pub published_date: String,
    pub num_of_pages: i32,
}

/// Book entity - unique per (title, author), created lazily
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub thumbnail_link: String,
    /// Free-form, as returned by the lookup ("2005", "1965-08-01", ...)
    pub published_date: String,
    pub num_of_pages: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(draft: BookDraft) -> Self {
        let now = Utc::now();
        Self {
            book_id: BookId::new(),
            title: draft.title,
            author: draft.author,
            thumbnail_link: draft.thumbnail_link,
            published_date: draft.published_date,
            num_of_pages: draft.num_of_pages,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Mutable part of a review
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewContent {
    pub comment: String,
    pub rating: Rating,
    pub reading_status: ReadingStatus,
    pub read_pages: i32,
    pub start_read_at: Option<NaiveDate>,
    pub finish_read_at: Option<NaiveDate>,
}

/// Review entity - owned by exactly one user, linked to exactly one book
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub book_id: BookId,
    pub content: ReviewContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: UserId, book_id: BookId, content: ReviewContent) -> Self {
        let now = Utc::now();
        Self {
            review_id: ReviewId::new(),
            user_id,
            book_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content in place; the book link never changes
    pub fn revise(&mut self, content: ReviewContent) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Review joined with its book, as rendered to clients
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithBook {
    pub review: Review,
    pub book: Book,
}

/// One result from the external book metadata lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookVolume {
    /// Lookup's own volume id
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail_link: String,
    pub published_date: String,
    pub num_of_pages: i32,
    pub is_for_sale: bool,
    pub buy_link: String,
}

impl BookVolume {
    /// Authors as stored on a [`Book`]
    pub fn author(&self) -> String {
        self.authors.join(", ")
    }
}
