use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Unavailable currency: {0}")]
    UnavailableCurrency(String),

    #[error("Incorrect date: {0}")]
    IncorrectDate(String),

    #[error("Incorrect plot type '{0}': must be hist or timeline")]
    IncorrectPlotType(String),

    #[error("No exchange data yet, call generate(currency, year) first")]
    NotGeneratedYet,

    #[error("Cannot average an empty sample")]
    EmptySample,

    #[error("Source error: {0:#}")]
    Source(#[from] anyhow::Error),

    #[error("Failed to render plot: {0:#}")]
    Render(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
