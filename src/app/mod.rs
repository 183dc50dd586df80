pub mod calc;
pub mod plot;
pub mod sample;
pub mod ui;
pub mod viewer;

pub use plot::{PlotData, PlotRenderer};
pub use sample::{ExchangeSample, HryvnaExchange};
pub use viewer::{PlainViewer, TerminalViewer};
