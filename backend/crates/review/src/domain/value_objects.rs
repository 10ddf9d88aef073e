//! Domain Value Objects
//!
//! Immutable value types for the review domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReviewError, ReviewResult};

/// Wire layout for read dates
pub const READ_DATE_FORMAT: &str = "%Y-%m-%d";

/// Star rating, 0.5 to 5.0 inclusive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> ReviewResult<Self> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReviewError::Validation(format!(
                "Rating must be between {} and {}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Trust a stored value (the column carries a CHECK constraint)
    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Where the reader is with the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[default]
    Reading,
    Finish,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Finish => "Finish",
        }
    }

    /// Parse client input; blank means the default (`Reading`)
    pub fn parse(raw: &str) -> ReviewResult<Self> {
        match raw.trim() {
            "" | "Reading" => Ok(ReadingStatus::Reading),
            "Finish" => Ok(ReadingStatus::Finish),
            other => Err(ReviewError::Validation(format!(
                "Unknown reading status: {}",
                other
            ))),
        }
    }

    /// Parse a stored value; unknown text falls back to `Reading`
    pub fn from_db(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

/// Parse an optional `YYYY-MM-DD` date; blank means unset
pub fn parse_read_date(field: &str, raw: &str) -> ReviewResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, READ_DATE_FORMAT)
        .map(Some)
        .map_err(|_| ReviewError::Validation(format!("{} must be a YYYY-MM-DD date", field)))
}

/// Render an optional date back to the wire; unset is the empty string
pub fn format_read_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(READ_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// 1-based page number for review listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(page: i64) -> ReviewResult<Self> {
        u32::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .map(Self)
            .ok_or_else(|| ReviewError::BadRequest("page must be a positive integer".to_string()))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}
