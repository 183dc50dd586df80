use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use super::{
    privat_dto::PrivatArchiveDto,
    source::RateSource,
    utils::{make_request, parse_response_object},
};
use crate::models::{Currency, Observation};

pub const BASE_URL: &str = "https://api.privatbank.ua";
const ENDPOINT: &str = "p24api/exchange_rates";

/// PrivatBank's public rate archive. Reports the national bank rate next to its own.
#[derive(Clone, Debug)]
pub struct PrivatSource {
    client: Client,
    base_url: String,
}

impl PrivatSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }
}

pub fn query_params(date: NaiveDate) -> String {
    format!("json&date={}", date.format("%d.%m.%Y"))
}

#[async_trait]
impl RateSource for PrivatSource {
    async fn fetch_rate(&self, date: NaiveDate, currency: Currency) -> Result<Option<Observation>> {
        let res = make_request(&self.client, &self.base_url, ENDPOINT, &query_params(date)).await?;

        let archive = parse_response_object::<PrivatArchiveDto>(
            res,
            &format!("Failed to parse PrivatBank archive for {}", date),
        )?;

        Ok(archive.to_observation(currency))
    }

    fn name(&self) -> &str {
        "PrivatBank"
    }
}
