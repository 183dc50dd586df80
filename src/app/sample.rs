use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use super::{
    calc::middle_value,
    plot::{HIST_X_LABEL, HIST_Y_LABEL, PlotData, PlotRenderer},
};
use crate::{
    api::{NbuSource, RateSource},
    error::{ExchangeError, Result},
    models::{Changes, Currency, HalfYear, Month, View, period},
};

const YEAR_BINS: usize = 12;
const HALF_YEAR_BINS: usize = 6;

/// A year of daily rates of `base_currency` against one counter currency.
///
/// Empty until [`ExchangeSample::generate`] runs; every query before that
/// fails with [`ExchangeError::NotGeneratedYet`].
pub struct ExchangeSample<S: RateSource> {
    base_currency: Currency,
    counter_currency: Option<Currency>,
    year: Option<i32>,
    changes: Changes,
    source: S,
}

/// Hryvna rates from the National Bank of Ukraine.
pub type HryvnaExchange = ExchangeSample<NbuSource>;

impl<S: RateSource> ExchangeSample<S> {
    pub fn new(base_currency: Currency, source: S) -> Self {
        Self {
            base_currency,
            counter_currency: None,
            year: None,
            changes: Changes::new(),
            source,
        }
    }

    pub fn from_code(code: &str, source: S) -> Result<Self> {
        Ok(Self::new(code.parse::<Currency>()?, source))
    }

    pub fn hryvna(source: S) -> Self {
        Self::new(Currency::Uah, source)
    }

    pub fn base_currency(&self) -> Currency {
        self.base_currency
    }

    pub fn counter_currency(&self) -> Option<Currency> {
        self.counter_currency
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn changes(&self) -> &Changes {
        &self.changes
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn middle_value<'a, I>(values: I) -> Result<Decimal>
    where
        I: IntoIterator<Item = &'a Decimal>,
    {
        middle_value(values)
    }

    /// Validates the inputs given as text, then runs [`Self::generate`].
    pub async fn generate_from_str(&mut self, counter_currency: &str, year: &str) -> Result<()> {
        let counter_currency = counter_currency.parse::<Currency>()?;
        let year = period::parse_year(year, Local::now().year())?;
        self.generate(counter_currency, year).await
    }

    /// Fetches every day of `year` from the source, one request at a time.
    ///
    /// Prior results are dropped first. Days the source has no rate for are
    /// left out. A source error stops the run; months finished before it stay.
    pub async fn generate(&mut self, counter_currency: Currency, year: i32) -> Result<()> {
        let year = period::check_year(year, Local::now().year())?;

        self.changes.clear();
        self.counter_currency = Some(counter_currency);
        self.year = Some(year);

        log::info!(
            "Collecting {} to {} rates for {} from {}",
            self.base_currency,
            counter_currency,
            year,
            self.source.name()
        );

        for month in Month::all() {
            let mut observations = Vec::new();

            for day in 1..=month.days_in(year) {
                let date = NaiveDate::from_ymd_opt(year, month.number(), day).ok_or_else(|| {
                    ExchangeError::IncorrectDate(format!("{}-{}-{:02}", year, month, day))
                })?;

                match self.source.fetch_rate(date, counter_currency).await? {
                    Some(observation) => observations.push(observation),
                    None => log::debug!("No {} rate for {}, skipping", counter_currency, date),
                }
            }

            log::info!(
                "{}.{}: {} daily rates",
                month,
                year,
                observations.len()
            );
            self.changes.insert_month(month, observations);
        }

        Ok(())
    }

    fn generated(&self) -> Result<(Currency, i32)> {
        match (self.counter_currency, self.year) {
            (Some(counter), Some(year)) if !self.changes.is_empty() => Ok((counter, year)),
            _ => Err(ExchangeError::NotGeneratedYet),
        }
    }

    fn monthly_means(&self, months: &[Month]) -> Result<Vec<(String, f64)>> {
        let mut points = Vec::with_capacity(months.len());

        for month in months {
            let days = self
                .changes
                .month(*month)
                .ok_or(ExchangeError::NotGeneratedYet)?;

            if days.is_empty() {
                log::warn!("No rates recorded for month {}, leaving it out", month);
                continue;
            }

            let mean = middle_value(days.values())?;
            points.push((month.label(), mean.to_f64().unwrap_or_default()));
        }

        if points.is_empty() {
            return Err(ExchangeError::EmptySample);
        }

        Ok(points)
    }

    fn labels(&self, view: View, x_label: String) -> (String, String) {
        match view {
            View::Hist => (HIST_X_LABEL.to_string(), HIST_Y_LABEL.to_string()),
            View::Timeline => (x_label, format!("{} exchange rate", self.base_currency)),
        }
    }

    /// One point per month: the mean of that month's daily rates.
    pub fn year_plot(&self, view: View) -> Result<PlotData> {
        let (counter, year) = self.generated()?;

        let months: Vec<Month> = Month::all()
            .filter(|month| self.changes.month(*month).is_some())
            .collect();
        let points = self.monthly_means(&months)?;

        let title = format!(
            "Information about {} to {} exchange rate in {} year",
            self.base_currency, counter, year
        );
        let (x_label, y_label) = self.labels(view, "Months".to_string());

        Ok(PlotData::new(title, x_label, y_label, view, points, YEAR_BINS))
    }

    pub fn half_year_plot(&self, part: HalfYear, view: View) -> Result<PlotData> {
        let (counter, year) = self.generated()?;

        let months: Vec<Month> = part.months().collect();
        let points = self.monthly_means(&months)?;

        let title = format!(
            "Information about {} to {} exchange rate in the {} half of the {} year",
            self.base_currency, counter, part, year
        );
        let (x_label, y_label) = self.labels(view, "Months".to_string());

        Ok(PlotData::new(
            title,
            x_label,
            y_label,
            view,
            points,
            HALF_YEAR_BINS,
        ))
    }

    /// Every daily rate of `month`, labelled by day of month.
    pub fn month_plot(&self, month: Month, view: View) -> Result<PlotData> {
        let (counter, year) = self.generated()?;

        let days = self
            .changes
            .month(month)
            .ok_or(ExchangeError::NotGeneratedYet)?;
        if days.is_empty() {
            return Err(ExchangeError::EmptySample);
        }

        let points = days
            .iter()
            .map(|(label, rate)| {
                let day: String = label.chars().take(2).collect();
                (day, rate.to_f64().unwrap_or_default())
            })
            .collect();

        let title = format!(
            "Information about {} to {} exchange rate as of {}.{}",
            self.base_currency, counter, month, year
        );
        let (x_label, y_label) = self.labels(view, format!("Days of the {}.{}", month, year));

        Ok(PlotData::new(title, x_label, y_label, view, points, YEAR_BINS))
    }

    pub fn year_information<R>(&self, view: View, renderer: &mut R) -> Result<()>
    where
        R: PlotRenderer + ?Sized,
    {
        let plot = self.year_plot(view)?;
        renderer.render(&plot).map_err(ExchangeError::Render)
    }

    pub fn half_year_information<R>(
        &self,
        part: HalfYear,
        view: View,
        renderer: &mut R,
    ) -> Result<()>
    where
        R: PlotRenderer + ?Sized,
    {
        let plot = self.half_year_plot(part, view)?;
        renderer.render(&plot).map_err(ExchangeError::Render)
    }

    pub fn month_information<R>(&self, month: Month, view: View, renderer: &mut R) -> Result<()>
    where
        R: PlotRenderer + ?Sized,
    {
        let plot = self.month_plot(month, view)?;
        renderer.render(&plot).map_err(ExchangeError::Render)
    }
}
