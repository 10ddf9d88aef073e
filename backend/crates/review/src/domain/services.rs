//! Domain Services
//!
//! Pure business rules that do not belong to a single entity: the
//! ownership guard, calendar buckets for statistics and pagination math.

use chrono::{Datelike, NaiveDate};
use kernel::id::UserId;

use crate::error::{ReviewError, ReviewResult};

// ============================================================================
// Ownership Guard
// ============================================================================

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// `Allow` iff the acting user owns the resource
pub fn authorize(acting: &UserId, owner: &UserId) -> Access {
    if acting == owner {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// Run the guard and turn `Deny` into a 403 carrying `message`
pub fn ensure_owner(acting: &UserId, owner: &UserId, message: &'static str) -> ReviewResult<()> {
    match authorize(acting, owner) {
        Access::Allow => Ok(()),
        Access::Deny => Err(ReviewError::Forbidden(message)),
    }
}

// ============================================================================
// Calendar Buckets
// ============================================================================

/// Inclusive date range used to filter reviews by finish date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBucket {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateBucket {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Last day of `month` in `year`
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn validate_month(month: i64) -> ReviewResult<u32> {
    u32::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| ReviewError::BadRequest("month must be between 1 and 12".to_string()))
}

pub fn validate_year(year: i64) -> ReviewResult<i32> {
    i32::try_from(year)
        .ok()
        .filter(|y| (1..=9999).contains(y))
        .ok_or_else(|| ReviewError::BadRequest("year must be between 1 and 9999".to_string()))
}

fn ymd(year: i32, month: u32, day: u32) -> ReviewResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ReviewError::BadRequest(format!("invalid date {:04}-{:02}-{:02}", year, month, day))
    })
}

/// First to last day of the month
pub fn month_bucket(year: i32, month: u32) -> ReviewResult<DateBucket> {
    Ok(DateBucket {
        start: ymd(year, month, 1)?,
        end: ymd(year, month, last_day_of_month(year, month))?,
    })
}

/// January 1st to December 31st
pub fn year_bucket(year: i32) -> ReviewResult<DateBucket> {
    Ok(DateBucket {
        start: ymd(year, 1, 1)?,
        end: ymd(year, 12, 31)?,
    })
}

/// Month and year of `today`, for stats requests that omit them
pub fn current_period(today: NaiveDate) -> (u32, i32) {
    (today.month(), today.year())
}

// ============================================================================
// Pagination
// ============================================================================

/// Number of pages needed for `total` items; an empty listing still has one
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    let size = u64::from(page_size.max(1));
    total.div_ceil(size).max(1)
}

/// Row offset of a 1-based page
pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page_size) * u64::from(page.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize() {
        let alice = UserId::new();
        let bob = UserId::new();

        assert_eq!(authorize(&alice, &alice), Access::Allow);
        assert_eq!(authorize(&bob, &alice), Access::Deny);

        let err = ensure_owner(&bob, &alice, "Couldn't update this review").unwrap_err();
        assert!(matches!(err, ReviewError::Forbidden("Couldn't update this review")));
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_february_bucket_end() {
        let leap = month_bucket(2024, 2).unwrap();
        assert_eq!(leap.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let common = month_bucket(2023, 2).unwrap();
        assert_eq!(common.end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_month_lengths() {
        let days: Vec<u32> = (1..=12).map(|m| last_day_of_month(2023, m)).collect();
        assert_eq!(days, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn test_buckets_are_inclusive() {
        let march = month_bucket(2024, 3).unwrap();
        assert!(march.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(march.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!march.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));

        let year = year_bucket(2024).unwrap();
        assert!(year.contains(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
        assert!(!year.contains(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
    }

    #[test]
    fn test_period_validation() {
        assert_eq!(validate_month(12).unwrap(), 12);
        assert!(matches!(validate_month(0), Err(ReviewError::BadRequest(_))));
        assert!(validate_month(13).is_err());
        assert_eq!(validate_year(2024).unwrap(), 2024);
        assert!(validate_year(0).is_err());
        assert!(validate_year(10_000).is_err());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(9, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(3, 10), 20);
    }
}
