use std::str::FromStr;

use strum_macros::Display;

use crate::error::ExchangeError;

/// How a query is drawn: a frequency histogram or a line over time.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    Hist,
    Timeline,
}

impl FromStr for View {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hist" => Ok(View::Hist),
            "timeline" => Ok(View::Timeline),
            other => Err(ExchangeError::IncorrectPlotType(other.to_string())),
        }
    }
}
