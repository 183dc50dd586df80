use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use super::{
    nbu_dto::NbuRateDto,
    source::RateSource,
    utils::{make_request, parse_first_entry},
};
use crate::models::{Currency, Observation};

pub const BASE_URL: &str = "https://bank.gov.ua";
const ENDPOINT: &str = "NBUStatService/v1/statdirectory/exchange";

/// Official hryvna rates from the National Bank of Ukraine statistics service.
#[derive(Clone, Debug)]
pub struct NbuSource {
    client: Client,
    base_url: String,
}

impl NbuSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }
}

pub fn query_params(date: NaiveDate, currency: Currency) -> String {
    format!(
        "valcode={}&date={}&json",
        currency.code(),
        date.format("%Y%m%d")
    )
}

#[async_trait]
impl RateSource for NbuSource {
    async fn fetch_rate(&self, date: NaiveDate, currency: Currency) -> Result<Option<Observation>> {
        let params = query_params(date, currency);
        let res = make_request(&self.client, &self.base_url, ENDPOINT, &params).await?;

        let entry = parse_first_entry::<NbuRateDto>(
            res,
            &format!("Failed to parse NBU rate for {} on {}", currency, date),
        )?;

        Ok(entry.map(|dto| dto.to_observation()))
    }

    fn name(&self) -> &str {
        "NBU"
    }
}
