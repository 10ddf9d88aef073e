//! Infrastructure Layer
//!
//! Database and external service implementations.

pub mod google_books;
pub mod postgres;

pub use google_books::GoogleBooksClient;
pub use postgres::PgReviewRepository;
