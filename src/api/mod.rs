pub mod nbu;
pub mod nbu_dto;
pub mod privat;
pub mod privat_dto;
pub mod source;
pub mod utils;

pub use nbu::NbuSource;
pub use privat::PrivatSource;
pub use source::RateSource;
