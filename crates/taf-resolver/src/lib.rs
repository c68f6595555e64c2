//! Forecast resolution engine.
//!
//! Consumes a structured forecast document (a serde mirror of the
//! third-party aviation-forecast API response) and produces a 12-hour
//! flight-category timeline, applying base-forecast selection, gradual
//! transition semantics and temporary-overlay precedence, then annotating
//! each hour with wind-shear and icing-risk heuristics.
//!
//! The whole crate is synchronous, side-effect-free and allocation-light:
//! every operation is a pure function from its inputs to a fresh result.
//! Fetching, caching and rendering belong to the caller.

pub mod document;
pub mod icing;
pub mod merge;
pub mod resolve;
pub mod shear;

pub use document::{ChangeKind, ForecastDocument, ForecastPeriod, Visibility};
pub use icing::is_icing;
pub use resolve::{resolve, resolve_at, resolve_hour, HourlyForecast, TransientOutlook};
pub use shear::detect as detect_wind_shear;
