//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{BookId, ReviewId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Book, Review, ReviewContent, ReviewWithBook};
use crate::domain::repository::{BookRepository, ReviewRepository, StatsRepository};
use crate::domain::services::DateBucket;
use crate::domain::value_objects::{Rating, ReadingStatus};
use crate::error::{ReviewError, ReviewResult};

/// PostgreSQL-backed book, review and stats repository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Counts come back as BIGINT
fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

const REVIEW_WITH_BOOK_COLUMNS: &str = r#"
    r.review_id,
    r.user_id,
    r.book_id,
    r.comment,
    r.rating,
    r.reading_status,
    r.read_pages,
    r.start_read_at,
    r.finish_read_at,
    r.created_at,
    r.updated_at,
    b.title,
    b.author,
    b.thumbnail_link,
    b.published_date,
    b.num_of_pages,
    b.created_at AS book_created_at,
    b.updated_at AS book_updated_at
"#;

// ============================================================================
// Book Repository Implementation
// ============================================================================

impl BookRepository for PgReviewRepository {
    async fn find_by_title_author(&self, title: &str, author: &str) -> ReviewResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                author,
                thumbnail_link,
                published_date,
                num_of_pages,
                created_at,
                updated_at
            FROM books
            WHERE title = $1 AND author = $2
            "#,
        )
        .bind(title)
        .bind(author)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }

    async fn insert_if_absent(&self, book: &Book) -> ReviewResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (
                book_id,
                title,
                author,
                thumbnail_link,
                published_date,
                num_of_pages,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (title, author) DO NOTHING
            "#,
        )
        .bind(book.book_id.as_uuid())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.thumbnail_link)
        .bind(&book.published_date)
        .bind(book.num_of_pages)
        .bind(book.created_at)
        .bind(book.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

// ============================================================================
// Review Repository Implementation
// ============================================================================

impl ReviewRepository for PgReviewRepository {
    async fn create(&self, review: &Review) -> ReviewResult<()> {
        let content = &review.content;

        sqlx::query(
            r#"
            INSERT INTO reviews (
                review_id,
                user_id,
                book_id,
                comment,
                rating,
                reading_status,
                read_pages,
                start_read_at,
                finish_read_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.user_id.as_uuid())
        .bind(review.book_id.as_uuid())
        .bind(&content.comment)
        .bind(content.rating.value())
        .bind(content.reading_status.as_str())
        .bind(content.read_pages)
        .bind(content.start_read_at)
        .bind(content.finish_read_at)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, review_id: &ReviewId) -> ReviewResult<Option<ReviewWithBook>> {
        let sql = format!(
            "SELECT {} FROM reviews r JOIN books b ON b.book_id = r.book_id WHERE r.review_id = $1",
            REVIEW_WITH_BOOK_COLUMNS
        );

        let row = sqlx::query_as::<_, ReviewWithBookRow>(&sql)
            .bind(review_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ReviewWithBookRow::into_review_with_book))
    }

    async fn update(&self, review: &Review) -> ReviewResult<()> {
        let content = &review.content;

        let result = sqlx::query(
            r#"
            UPDATE reviews SET
                comment = $3,
                rating = $4,
                reading_status = $5,
                read_pages = $6,
                start_read_at = $7,
                finish_read_at = $8,
                updated_at = $9
            WHERE review_id = $1 AND user_id = $2
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.user_id.as_uuid())
        .bind(&content.comment)
        .bind(content.rating.value())
        .bind(content.reading_status.as_str())
        .bind(content.read_pages)
        .bind(content.start_read_at)
        .bind(content.finish_read_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::ReviewNotFound);
        }

        Ok(())
    }

    async fn delete(&self, review_id: &ReviewId, owner: &UserId) -> ReviewResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1 AND user_id = $2")
            .bind(review_id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::ReviewNotFound);
        }

        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: u32,
        offset: u64,
    ) -> ReviewResult<Vec<ReviewWithBook>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM reviews r
            JOIN books b ON b.book_id = r.book_id
            WHERE r.user_id = $1
            ORDER BY r.updated_at DESC, r.review_id
            LIMIT $2 OFFSET $3
            "#,
            REVIEW_WITH_BOOK_COLUMNS
        );

        let offset = i64::try_from(offset)
            .map_err(|_| ReviewError::BadRequest("page is out of range".to_string()))?;

        let rows = sqlx::query_as::<_, ReviewWithBookRow>(&sql)
            .bind(user_id.as_uuid())
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(ReviewWithBookRow::into_review_with_book)
            .collect())
    }

    async fn count_by_user(&self, user_id: &UserId) -> ReviewResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(non_negative(count))
    }

    async fn exists_for_book(
        &self,
        user_id: &UserId,
        title: &str,
        author: &str,
    ) -> ReviewResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM reviews r
                JOIN books b ON b.book_id = r.book_id
                WHERE r.user_id = $1 AND b.title = $2 AND b.author = $3
            )
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(title)
        .bind(author)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Stats Repository Implementation
// ============================================================================

impl StatsRepository for PgReviewRepository {
    async fn count_finished(&self, user_id: &UserId, bucket: DateBucket) -> ReviewResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM reviews
            WHERE user_id = $1 AND finish_read_at BETWEEN $2 AND $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(bucket.start)
        .bind(bucket.end)
        .fetch_one(&self.pool)
        .await?;

        Ok(non_negative(count))
    }

    async fn sum_pages_finished(&self, user_id: &UserId, bucket: DateBucket) -> ReviewResult<u64> {
        let pages = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(b.num_of_pages), 0)::BIGINT
            FROM reviews r
            JOIN books b ON b.book_id = r.book_id
            WHERE r.user_id = $1 AND r.finish_read_at BETWEEN $2 AND $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(bucket.start)
        .bind(bucket.end)
        .fetch_one(&self.pool)
        .await?;

        Ok(non_negative(pages))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookRow {
    book_id: Uuid,
    title: String,
    author: String,
    thumbnail_link: String,
    published_date: String,
    num_of_pages: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            book_id: BookId::from_uuid(self.book_id),
            title: self.title,
            author: self.author,
            thumbnail_link: self.thumbnail_link,
            published_date: self.published_date,
            num_of_pages: self.num_of_pages,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewWithBookRow {
    review_id: Uuid,
    user_id: Uuid,
    book_id: Uuid,
    comment: String,
    rating: f64,
    reading_status: String,
    read_pages: i32,
    start_read_at: Option<NaiveDate>,
    finish_read_at: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    author: String,
    thumbnail_link: String,
    published_date: String,
    num_of_pages: i32,
    book_created_at: DateTime<Utc>,
    book_updated_at: DateTime<Utc>,
}

impl ReviewWithBookRow {
    fn into_review_with_book(self) -> ReviewWithBook {
        let book_id = BookId::from_uuid(self.book_id);

        ReviewWithBook {
            review: Review {
                review_id: ReviewId::from_uuid(self.review_id),
                user_id: UserId::from_uuid(self.user_id),
                book_id,
                content: ReviewContent {
                    comment: self.comment,
                    rating: Rating::from_db(self.rating),
                    reading_status: ReadingStatus::from_db(&self.reading_status),
                    read_pages: self.read_pages,
                    start_read_at: self.start_read_at,
                    finish_read_at: self.finish_read_at,
                },
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            book: Book {
                book_id,
                title: self.title,
                author: self.author,
                thumbnail_link: self.thumbnail_link,
                published_date: self.published_date,
                num_of_pages: self.num_of_pages,
                created_at: self.book_created_at,
                updated_at: self.book_updated_at,
            },
        }
    }
}
