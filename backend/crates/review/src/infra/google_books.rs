//! Google Books Lookup
//!
//! `BookLookup` backed by the Google Books volumes search API.

use std::sync::Arc;

use serde::Deserialize;

use crate::application::config::ReviewConfig;
use crate::domain::entities::BookVolume;
use crate::domain::repository::BookLookup;
use crate::error::{ReviewError, ReviewResult};

/// HTTP client for the volumes endpoint
#[derive(Clone)]
pub struct GoogleBooksClient {
    client: reqwest::Client,
    endpoint: Arc<str>,
}

impl GoogleBooksClient {
    pub fn new(config: &ReviewConfig) -> ReviewResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.lookup_timeout)
            .build()
            .map_err(|e| ReviewError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Arc::from(config.book_lookup_url.as_str()),
        })
    }
}

impl BookLookup for GoogleBooksClient {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> ReviewResult<Vec<BookVolume>> {
        let response = self
            .client
            .get(self.endpoint.as_ref())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| ReviewError::Lookup(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Lookup(format!("lookup returned status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReviewError::Lookup(format!("failed to read body: {}", e)))?;

        parse_volumes(&body)
    }
}

/// Decode a volumes search response body
pub fn parse_volumes(body: &str) -> ReviewResult<Vec<BookVolume>> {
    let response: VolumesResponse = serde_json::from_str(body)
        .map_err(|e| ReviewError::Lookup(format!("unexpected response: {}", e)))?;

    Ok(response.items.into_iter().map(Volume::into_volume).collect())
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize)]
struct VolumesResponse {
    /// Absent when nothing matched
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    id: String,
    #[serde(default)]
    volume_info: VolumeInfo,
    #[serde(default)]
    sale_info: SaleInfo,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct VolumeInfo {
    title: String,
    authors: Vec<String>,
    published_date: String,
    page_count: i32,
    image_links: ImageLinks,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ImageLinks {
    thumbnail: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SaleInfo {
    saleability: String,
    buy_link: String,
}

impl Volume {
    fn into_volume(self) -> BookVolume {
        BookVolume {
            id: self.id,
            title: self.volume_info.title,
            authors: self.volume_info.authors,
            thumbnail_link: self.volume_info.image_links.thumbnail,
            published_date: self.volume_info.published_date,
            num_of_pages: self.volume_info.page_count,
            is_for_sale: self.sale_info.saleability == "FOR_SALE",
            buy_link: self.sale_info.buy_link,
        }
    }
}
