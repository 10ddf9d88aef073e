//! Get Statistics Use Case
//!
//! Monthly and yearly reading totals, bucketed by review finish date.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use kernel::id::UserId;

use crate::domain::repository::StatsRepository;
use crate::domain::services::{current_period, month_bucket, validate_month, validate_year, year_bucket};
use crate::error::ReviewResult;

/// Requested period; missing parts default to today
#[derive(Debug, Clone, Copy, Default)]
pub struct GetStatsInput {
    pub month: Option<i64>,
    pub year: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingStats {
    pub books_read_this_month: u64,
    pub pages_read_this_month: u64,
    pub books_read_this_year: u64,
    pub pages_read_this_year: u64,
}

pub struct GetStatsUseCase<S>
where
    S: StatsRepository,
{
    stats_repo: Arc<S>,
}

impl<S> GetStatsUseCase<S>
where
    S: StatsRepository,
{
    pub fn new(stats_repo: Arc<S>) -> Self {
        Self { stats_repo }
    }

    pub async fn execute(&self, acting: &UserId, input: GetStatsInput) -> ReviewResult<ReadingStats> {
        self.execute_on(acting, input, Utc::now().date_naive()).await
    }

    /// Same as [`execute`](Self::execute) with an explicit "today"
    pub async fn execute_on(
        &self,
        acting: &UserId,
        input: GetStatsInput,
        today: NaiveDate,
    ) -> ReviewResult<ReadingStats> {
        let (this_month, this_year) = current_period(today);
        let month = input.month.map(validate_month).transpose()?.unwrap_or(this_month);
        let year = input.year.map(validate_year).transpose()?.unwrap_or(this_year);

        let month_range = month_bucket(year, month)?;
        let year_range = year_bucket(year)?;

        let repo = &self.stats_repo;
        let (books_month, pages_month, books_year, pages_year) = tokio::try_join!(
            repo.count_finished(acting, month_range),
            repo.sum_pages_finished(acting, month_range),
            repo.count_finished(acting, year_range),
            repo.sum_pages_finished(acting, year_range),
        )?;

        tracing::debug!(user_id = %acting, month, year, "Reading stats computed");

        Ok(ReadingStats {
            books_read_this_month: books_month,
            pages_read_this_month: pages_month,
            books_read_this_year: books_year,
            pages_read_this_year: pages_year,
        })
    }
}
