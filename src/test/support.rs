#[cfg(test)]
pub mod mocks {
    use std::sync::Mutex;

    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{Datelike, NaiveDate};
    use rust_decimal::Decimal;

    use crate::{
        api::RateSource,
        app::{PlotData, PlotRenderer},
        models::{Currency, Observation},
    };

    /// Answers every day with `base + day / 100` unless told otherwise.
    pub struct MockSource {
        base: Decimal,
        missing: Vec<NaiveDate>,
        fail_on: Option<NaiveDate>,
        calls: Mutex<Vec<NaiveDate>>,
    }

    impl MockSource {
        pub fn new(base: Decimal) -> Self {
            Self {
                base,
                missing: Vec::new(),
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn missing(mut self, date: NaiveDate) -> Self {
            self.missing.push(date);
            self
        }

        pub fn failing_on(mut self, date: NaiveDate) -> Self {
            self.fail_on = Some(date);
            self
        }

        pub fn calls(&self) -> Vec<NaiveDate> {
            self.calls.lock().unwrap().clone()
        }

        pub fn calls_in_month(&self, month: u32) -> usize {
            self.calls()
                .iter()
                .filter(|date| date.month() == month)
                .count()
        }

        pub fn reset(&self) {
            self.calls.lock().unwrap().clear();
        }

        pub fn rate_for(&self, date: NaiveDate) -> Decimal {
            self.base + Decimal::new(date.day() as i64, 2)
        }
    }

    #[async_trait]
    impl RateSource for MockSource {
        async fn fetch_rate(
            &self,
            date: NaiveDate,
            _currency: Currency,
        ) -> anyhow::Result<Option<Observation>> {
            self.calls.lock().unwrap().push(date);

            if self.fail_on == Some(date) {
                return Err(anyhow!("connection reset by peer"));
            }
            if self.missing.contains(&date) {
                return Ok(None);
            }

            Ok(Some(Observation::new(
                date.format("%d.%m.%Y").to_string(),
                self.rate_for(date),
            )))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[derive(Default)]
    pub struct RecordingRenderer {
        pub plots: Vec<PlotData>,
    }

    impl PlotRenderer for RecordingRenderer {
        fn render(&mut self, plot: &PlotData) -> anyhow::Result<()> {
            self.plots.push(plot.clone());
            Ok(())
        }
    }
}
