use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;

use super::calc::Histogram;
use crate::{error::ExchangeError, models::View};

pub const HIST_X_LABEL: &str = "Value of exchange rate";
pub const HIST_Y_LABEL: &str = "Frequency of occurrence";

/// Everything needed to draw one query result, independent of any backend.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PlotData {
    title: String,
    x_label: String,
    y_label: String,
    view: View,
    points: Vec<(String, f64)>,
    bins: usize,
}

impl PlotData {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    pub fn histogram(&self) -> Result<Histogram, ExchangeError> {
        Histogram::from_values(&self.values(), self.bins)
    }
}

/// Displays a plot. Terminal viewers block until the user closes the chart.
pub trait PlotRenderer {
    fn render(&mut self, plot: &PlotData) -> Result<()>;
}
