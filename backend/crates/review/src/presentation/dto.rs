//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::{
    BookSearchResult, CreateReviewInput, ListReviewsOutput, ReadingStats, ReviewFields,
};
use crate::domain::entities::ReviewWithBook;
use crate::domain::value_objects::format_read_date;
use crate::error::{ReviewError, ReviewResult};

// ============================================================================
// Requests
// ============================================================================

/// Create review request
///
/// Missing fields deserialize as empty/zero and are rejected by the use case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateReviewRequest {
    pub comment: String,
    pub rating: f64,
    pub reading_status: String,
    pub read_pages: i32,
    pub start_read_at: String,
    pub finish_read_at: String,
    pub book_title: String,
    pub book_author: String,
    pub book_thumbnail_link: String,
    pub book_published_date: String,
    pub book_num_of_pages: i32,
}

impl From<CreateReviewRequest> for CreateReviewInput {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            fields: ReviewFields {
                comment: req.comment,
                rating: req.rating,
                reading_status: req.reading_status,
                read_pages: req.read_pages,
                start_read_at: req.start_read_at,
                finish_read_at: req.finish_read_at,
            },
            book_title: req.book_title,
            book_author: req.book_author,
            book_thumbnail_link: req.book_thumbnail_link,
            book_published_date: req.book_published_date,
            book_num_of_pages: req.book_num_of_pages,
        }
    }
}

/// Update review request; the book cannot be changed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateReviewRequest {
    pub comment: String,
    pub rating: f64,
    pub reading_status: String,
    pub read_pages: i32,
    pub start_read_at: String,
    pub finish_read_at: String,
}

impl From<UpdateReviewRequest> for ReviewFields {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            comment: req.comment,
            rating: req.rating,
            reading_status: req.reading_status,
            read_pages: req.read_pages,
            start_read_at: req.start_read_at,
            finish_read_at: req.finish_read_at,
        }
    }
}

/// `?page=`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

/// `?month=&year=`
#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

/// `?search=`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Parse an optional integer query parameter; blank counts as absent
pub fn parse_int_param(name: &str, raw: Option<&str>) -> ReviewResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ReviewError::BadRequest(format!("{} must be an integer", name))),
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Review denormalized with its book
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub comment: String,
    pub rating: f64,
    pub reading_status: String,
    pub read_pages: i32,
    /// `""` when unset
    pub start_read_at: String,
    /// `""` when unset
    pub finish_read_at: String,
    pub book_title: String,
    pub book_author: String,
    pub book_thumbnail_link: String,
    pub book_published_date: String,
    pub book_num_of_pages: i32,
}

impl From<ReviewWithBook> for ReviewResponse {
    fn from(ReviewWithBook { review, book }: ReviewWithBook) -> Self {
        let content = review.content;

        Self {
            id: review.review_id.to_string(),
            comment: content.comment,
            rating: content.rating.value(),
            reading_status: content.reading_status.as_str().to_string(),
            read_pages: content.read_pages,
            start_read_at: format_read_date(content.start_read_at),
            finish_read_at: format_read_date(content.finish_read_at),
            book_title: book.title,
            book_author: book.author,
            book_thumbnail_link: book.thumbnail_link,
            book_published_date: book.published_date,
            book_num_of_pages: book.num_of_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListResponse {
    pub items: Vec<ReviewResponse>,
    pub total_pages: u64,
}

impl From<ListReviewsOutput> for ReviewListResponse {
    fn from(output: ListReviewsOutput) -> Self {
        Self {
            items: output.items.into_iter().map(ReviewResponse::from).collect(),
            total_pages: output.total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub books_read_this_month: u64,
    pub pages_read_this_month: u64,
    pub books_read_this_year: u64,
    pub pages_read_this_year: u64,
}

impl From<ReadingStats> for StatsResponse {
    fn from(stats: ReadingStats) -> Self {
        Self {
            books_read_this_month: stats.books_read_this_month,
            pages_read_this_month: stats.pages_read_this_month,
            books_read_this_year: stats.books_read_this_year,
            pages_read_this_year: stats.pages_read_this_year,
        }
    }
}

/// One book search hit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    /// Authors joined with `", "`
    pub author: String,
    pub thumbnail_link: String,
    pub published_date: String,
    pub num_of_pages: i32,
    pub is_reviewed: bool,
    pub is_for_sale: bool,
    pub buy_link: String,
}

impl From<BookSearchResult> for BookResponse {
    fn from(BookSearchResult { volume, is_reviewed }: BookSearchResult) -> Self {
        Self {
            author: volume.author(),
            id: volume.id,
            title: volume.title,
            thumbnail_link: volume.thumbnail_link,
            published_date: volume.published_date,
            num_of_pages: volume.num_of_pages,
            is_reviewed,
            is_for_sale: volume.is_for_sale,
            buy_link: volume.buy_link,
        }
    }
}

/// `data` payload of every review/book response
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReviewPayload {
    Review(ReviewResponse),
    ReviewList(ReviewListResponse),
    Stats(StatsResponse),
    Books(Vec<BookResponse>),
    Message(String),
}
