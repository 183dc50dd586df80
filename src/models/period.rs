use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::error::{ExchangeError, Result};

/// Calendar month, 1 through 12. Labelled with two digits ("01".."12").
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Month(u32);

impl Month {
    pub fn new(number: u32) -> Result<Self> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ExchangeError::IncorrectDate(format!(
                "Month must be between 1 and 12, got {}",
                number
            )))
        }
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn label(&self) -> String {
        format!("{:02}", self.0)
    }

    /// Number of days this month has in `year`, leap years included.
    pub fn days_in(&self, year: i32) -> u32 {
        let (next_year, next_month) = if self.0 == 12 {
            (year + 1, 1)
        } else {
            (year, self.0 + 1)
        };

        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first| first.pred_opt())
            .map(|last| chrono::Datelike::day(&last))
            .unwrap_or(31)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Month {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ExchangeError::IncorrectDate(format!("Unknown month label '{}'", s));

        if s.len() != 2 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        s.parse::<u32>()
            .ok()
            .and_then(|number| Month::new(number).ok())
            .ok_or_else(invalid)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HalfYear {
    First,
    Second,
}

impl HalfYear {
    pub fn numeral(&self) -> &'static str {
        match self {
            HalfYear::First => "I",
            HalfYear::Second => "II",
        }
    }

    pub fn months(&self) -> impl Iterator<Item = Month> {
        let range = match self {
            HalfYear::First => 1..=6,
            HalfYear::Second => 7..=12,
        };
        range.map(Month)
    }
}

impl fmt::Display for HalfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.numeral())
    }
}

impl FromStr for HalfYear {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "I" => Ok(HalfYear::First),
            "II" => Ok(HalfYear::Second),
            _ => Err(ExchangeError::IncorrectDate(format!(
                "Part of the year must be I or II, got '{}'",
                s
            ))),
        }
    }
}

/// Accepts a four-digit year in `[2000, current_year]`.
pub fn check_year(year: i32, current_year: i32) -> Result<i32> {
    if (2000..=current_year).contains(&year) {
        Ok(year)
    } else {
        Err(ExchangeError::IncorrectDate(format!(
            "Year must be between 2000 and {}, got {}",
            current_year, year
        )))
    }
}

pub fn parse_year(text: &str, current_year: i32) -> Result<i32> {
    let year = text
        .trim()
        .parse::<i32>()
        .map_err(|_| ExchangeError::IncorrectDate(format!("'{}' is not a year", text)))?;
    check_year(year, current_year)
}
