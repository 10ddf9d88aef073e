//! Application Configuration
//!
//! Configuration for the Review application layer.

use std::time::Duration;

/// Default book metadata endpoint (Google Books volumes search)
pub const DEFAULT_BOOK_LOOKUP_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Review application configuration
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Reviews per listing page
    pub page_size: u32,
    /// Book metadata search endpoint
    pub book_lookup_url: String,
    /// Request timeout for the book lookup
    pub lookup_timeout: Duration,
    /// Attempts at get-or-create before giving up on a contended book
    pub book_create_attempts: u32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            book_lookup_url: DEFAULT_BOOK_LOOKUP_URL.to_string(),
            lookup_timeout: Duration::from_secs(10),
            book_create_attempts: 3,
        }
    }
}

impl ReviewConfig {
    /// Use a different lookup endpoint (e.g. a local stub)
    pub fn with_lookup_url(url: impl Into<String>) -> Self {
        Self {
            book_lookup_url: url.into(),
            ..Default::default()
        }
    }
}
