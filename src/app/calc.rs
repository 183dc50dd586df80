use derive_getters::Getters;
use rust_decimal::Decimal;

use crate::error::{ExchangeError, Result};

/// Arithmetic mean of `values`. An empty sample has no mean.
pub fn middle_value<'a, I>(values: I) -> Result<Decimal>
where
    I: IntoIterator<Item = &'a Decimal>,
{
    let (sum, count) = values
        .into_iter()
        .fold((Decimal::ZERO, 0u32), |(sum, count), value| {
            (sum + value, count + 1)
        });

    if count == 0 {
        return Err(ExchangeError::EmptySample);
    }

    Ok(sum / Decimal::from(count))
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Histogram {
    /// Lower edge of every bin
    edges: Vec<f64>,
    width: f64,
    counts: Vec<u64>,
}

impl Histogram {
    /// Equal-width bins spanning `[min, max]`; the maximum lands in the last bin.
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(ExchangeError::EmptySample);
        }
        let bins = bins.max(1);

        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max - min == 0.0 {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0u64; bins];
        for value in values {
            let index = (((value - min) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        let edges = (0..bins).map(|i| min + width * i as f64).collect();

        Ok(Self {
            edges,
            width,
            counts,
        })
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
