use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Observation;

#[derive(Debug, Deserialize, Getters, new)]
pub struct NbuRateDto {
    r030: Option<i64>,
    txt: Option<String>,
    rate: Decimal,
    cc: String,
    exchangedate: String,
}

impl NbuRateDto {
    pub fn to_observation(&self) -> Observation {
        Observation::new(self.exchangedate.clone(), self.rate)
    }
}
