//! Common types shared across the avwx decoding and resolution crates.

pub mod category;
pub mod clouds;
pub mod error;
pub mod observation;
pub mod wind;
pub mod wx;

pub use category::{classify, FlightCategory};
pub use clouds::{ceiling, CloudCover, CloudLayer};
pub use error::{AvwxError, AvwxResult};
pub use observation::Observation;
pub use wind::{Wind, WindDirection};
