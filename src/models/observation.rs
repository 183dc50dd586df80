use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One day's rate as reported by a source. `label` is the source's own date string.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Observation {
    label: String,
    rate: Decimal,
}
