use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Currency, Observation};

/// Fetches one day's exchange rate for `currency`.
///
/// `Ok(None)` means the source has nothing for that day (weekends, holidays)
/// and the day is skipped. `Err` aborts the whole aggregation run.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rate(&self, date: NaiveDate, currency: Currency) -> Result<Option<Observation>>;

    fn name(&self) -> &str;
}
