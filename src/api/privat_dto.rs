use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Currency, Observation};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct PrivatArchiveDto {
    date: String,
    bank: Option<String>,
    base_currency_lit: Option<String>,
    #[serde(default)]
    exchange_rate: Vec<PrivatRateDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct PrivatRateDto {
    base_currency: Option<String>,
    currency: Option<String>,
    #[serde(rename = "saleRateNB")]
    sale_rate_nb: Option<Decimal>,
    #[serde(rename = "purchaseRateNB")]
    purchase_rate_nb: Option<Decimal>,
    sale_rate: Option<Decimal>,
    purchase_rate: Option<Decimal>,
}

impl PrivatArchiveDto {
    /// National bank sale rate of `currency`, labelled with the archive date.
    pub fn to_observation(&self, currency: Currency) -> Option<Observation> {
        self.exchange_rate
            .iter()
            .find(|entry| entry.currency.as_deref() == Some(currency.code()))
            .and_then(|entry| entry.sale_rate_nb)
            .map(|rate| Observation::new(self.date.clone(), rate))
    }
}
