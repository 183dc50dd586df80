use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::ExchangeError;

/// Currencies the hryvna sources publish rates for.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    Uah,
    Usd,
    Rub,
    Eur,
}

/// Code older callers used for hryvna.
const LEGACY_HRYVNA_CODE: &str = "UAN";

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Uah => "UAH",
            Currency::Usd => "USD",
            Currency::Rub => "RUB",
            Currency::Eur => "EUR",
        }
    }
}

impl FromStr for Currency {
    type Err = ExchangeError;

    /// Codes must match exactly; case and surrounding whitespace are not forgiven.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LEGACY_HRYVNA_CODE {
            return Ok(Currency::Uah);
        }

        Currency::iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| ExchangeError::UnavailableCurrency(s.to_string()))
    }
}
