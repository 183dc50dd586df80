use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Month, Observation};

pub type DayRates = IndexMap<String, Decimal>;

/// Month label -> (day label -> rate), kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Changes(IndexMap<String, DayRates>);

impl Changes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert_month(&mut self, month: Month, observations: Vec<Observation>) {
        let days = observations
            .into_iter()
            .map(|obs| (obs.label().clone(), *obs.rate()))
            .collect();
        self.0.insert(month.label(), days);
    }

    pub fn month(&self, month: Month) -> Option<&DayRates> {
        self.0.get(&month.label())
    }

    pub fn months(&self) -> impl Iterator<Item = (&String, &DayRates)> {
        self.0.iter()
    }
}
