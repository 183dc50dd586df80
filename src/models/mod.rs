pub mod changes;
pub mod currency;
pub mod observation;
pub mod period;
pub mod view;

pub use changes::{Changes, DayRates};
pub use currency::Currency;
pub use observation::Observation;
pub use period::{HalfYear, Month};
pub use view::View;
