//! Field inheritance between forecast periods.
//!
//! Change lines usually spell out only the elements that change; everything
//! they leave unset is carried from the initial base period. The merge is an
//! explicit per-field fallthrough over fully optional fields, never a
//! default to zero/clear.

use avwx_common::clouds::{ceiling, CloudLayer};
use avwx_common::wind::Wind;

use crate::document::{ForecastPeriod, Visibility};

/// The fields in force for one period after inheritance.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveFields {
    pub visibility: Option<Visibility>,
    pub clouds: Option<Vec<CloudLayer>>,
    pub wind: Wind,
    pub wx: Option<String>,
}

impl EffectiveFields {
    /// Visibility in meters; `None` when unset or unlimited (both pass
    /// every classifier minimum).
    pub fn visibility_m(&self) -> Option<f64> {
        self.visibility.and_then(|v| v.meters())
    }

    /// Ceiling in feet from the effective cloud layers.
    pub fn ceiling_ft(&self) -> Option<u32> {
        self.clouds.as_deref().and_then(ceiling)
    }
}

/// Resolve `period`'s fields, inheriting anything unset from `base`.
/// When the period is the base itself the merge is the identity.
pub fn inherit(period: &ForecastPeriod, base: &ForecastPeriod) -> EffectiveFields {
    EffectiveFields {
        visibility: period.visibility.or(base.visibility),
        clouds: period.clouds.clone().or_else(|| base.clouds.clone()),
        wind: if period.wind().is_empty() {
            base.wind()
        } else {
            period.wind()
        },
        wx: period.wx.clone().or_else(|| base.wx.clone()),
    }
}
