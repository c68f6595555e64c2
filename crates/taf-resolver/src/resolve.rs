//! Hourly forecast resolution.
//!
//! Turns a multi-period forecast document into a 12-hour timeline. Each hour
//! is resolved independently by [`resolve_hour`]: pick the active base
//! period, inherit unset fields from the initial base, apply temporary
//! overlays by precedence, then annotate with wind-shear and icing.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use avwx_common::category::{classify, FlightCategory};
use avwx_common::observation::Observation;
use avwx_common::wind::Wind;
use avwx_common::wx;

use crate::document::{ChangeKind, ForecastDocument, ForecastPeriod};
use crate::merge::inherit;
use crate::{icing, shear};

/// Number of hours resolved from "now".
pub const FORECAST_HOURS: u8 = 12;

/// TEMPO overlays qualified with at least this probability are never applied.
const DISREGARD_TEMPO_PROB: u8 = 30;

/// Worst case across concurrently valid overlays, kept for display even
/// when the applied resolution disregarded the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransientOutlook {
    pub category: FlightCategory,
    pub ceiling_ft: Option<u32>,
    pub visibility_m: Option<f64>,
}

/// One resolved hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyForecast {
    /// Hour index from "now", 0-11.
    pub hour: u8,
    /// The UTC hour this entry covers.
    pub time: DateTime<Utc>,
    /// Resolved category; absent when no period covers this hour.
    pub category: Option<FlightCategory>,
    pub ceiling_ft: Option<u32>,
    pub visibility_m: Option<f64>,
    /// Base wind with speed/gust raised to the overlay maximum.
    pub wind: Wind,
    /// Merged, de-duplicated weather groups from base and overlays.
    pub wx: String,
    /// Possible transient deterioration, independent of what was applied.
    pub transient: Option<TransientOutlook>,
    /// Shear description against the first concurrent overlay, if any.
    pub wind_shear: Option<String>,
    pub icing_risk: bool,
}

impl HourlyForecast {
    fn uncovered(hour: u8, time: DateTime<Utc>) -> Self {
        HourlyForecast {
            hour,
            time,
            category: None,
            ceiling_ft: None,
            visibility_m: None,
            wind: Wind::default(),
            wx: String::new(),
            transient: None,
            wind_shear: None,
            icing_risk: false,
        }
    }

    /// Readable rendering of the merged weather groups.
    pub fn wx_text(&self) -> String {
        self.wx
            .split_whitespace()
            .map(wx::describe)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Resolve the next 12 hours from the current instant.
///
/// `latest_obs` supplies temperature/dewpoint for the icing heuristic;
/// forecasts carry no temperature field. Returns `None` for a document with
/// no periods.
pub fn resolve(
    doc: &ForecastDocument,
    latest_obs: Option<&Observation>,
) -> Option<Vec<HourlyForecast>> {
    resolve_at(doc, latest_obs, Utc::now())
}

/// Resolve the 12 hours starting at `now`. Pure and idempotent: every call
/// recomputes from the supplied document.
pub fn resolve_at(
    doc: &ForecastDocument,
    latest_obs: Option<&Observation>,
    now: DateTime<Utc>,
) -> Option<Vec<HourlyForecast>> {
    if doc.periods.is_empty() {
        return None;
    }
    let hours = (0..FORECAST_HOURS)
        .map(|i| resolve_hour(doc, latest_obs, now + Duration::hours(i64::from(i)), i))
        .collect();
    Some(hours)
}

/// Select the base period in force at `t`.
///
/// FM and unconditioned periods take effect at their start. A BECMG period
/// whose transition is complete is an ordinary base update; one still
/// transitioning applies immediately only if it deteriorates the category
/// relative to the base in force, otherwise it waits for completion.
fn select_base<'doc>(
    doc: &'doc ForecastDocument,
    t: DateTime<Utc>,
) -> Option<&'doc ForecastPeriod> {
    let initial = doc.initial_base();
    let mut active: Option<&ForecastPeriod> = None;

    for period in doc.periods.iter().filter(|p| !p.is_overlay()) {
        if period.from > t {
            continue;
        }
        if period.change != Some(ChangeKind::Becmg) {
            active = Some(period);
            continue;
        }
        let complete = period.becoming.or(period.to);
        if complete.map_or(true, |c| c <= t) {
            active = Some(period);
            continue;
        }
        // Mid-transition BECMG: deteriorations count from the window start,
        // improvements only once the transition completes.
        let reference = match active.or(initial) {
            Some(r) => r,
            None => {
                active = Some(period);
                continue;
            }
        };
        let fallback = initial.unwrap_or(reference);
        let ref_fields = inherit(reference, fallback);
        let ref_cat = classify(ref_fields.ceiling_ft(), ref_fields.visibility_m());
        let becmg_fields = inherit(period, fallback);
        let becmg_cat = classify(becmg_fields.ceiling_ft(), becmg_fields.visibility_m());
        if becmg_cat.is_worse_than(ref_cat) {
            trace!(at = %t, "BECMG deterioration applied from window start");
            active = Some(period);
        }
    }
    active
}

/// Resolve a single hour. Pure function of the document, the latest
/// observation and the instant.
pub fn resolve_hour(
    doc: &ForecastDocument,
    latest_obs: Option<&Observation>,
    t: DateTime<Utc>,
    hour: u8,
) -> HourlyForecast {
    let Some(active) = select_base(doc, t) else {
        return HourlyForecast::uncovered(hour, t);
    };
    let initial = doc.initial_base().unwrap_or(active);
    let base_fields = inherit(active, initial);
    let base_wind = base_fields.wind;

    let mut category = classify(base_fields.ceiling_ft(), base_fields.visibility_m());
    let mut ceiling_ft = base_fields.ceiling_ft();
    let mut visibility_m = base_fields.visibility_m();
    let mut wind = base_wind;
    let mut wx_tokens: Vec<&str> = base_fields
        .wx
        .as_deref()
        .map(|s| s.split_whitespace().collect())
        .unwrap_or_default();

    let mut first_overlay: Option<&ForecastPeriod> = None;
    let mut worst: Option<TransientOutlook> = None;

    for overlay in doc.periods.iter().filter(|p| p.is_overlay() && p.covers(t)) {
        if first_overlay.is_none() {
            first_overlay = Some(overlay);
        }
        // Wind and weather are collected from every concurrent overlay,
        // whatever the category rules decide below.
        wind.max_speeds(&overlay.wind());
        if let Some(overlay_wx) = overlay.wx.as_deref() {
            wx_tokens.extend(overlay_wx.split_whitespace());
        }

        // (a) probability-qualified TEMPO: never applied, never displayed.
        if overlay.change == Some(ChangeKind::Tempo)
            && overlay.probability.map_or(false, |p| p >= DISREGARD_TEMPO_PROB)
        {
            trace!(at = %t, "disregarding probability-qualified TEMPO");
            continue;
        }

        // Overlay fields inherit from the currently resolved base values.
        let overlay_vis = match overlay.visibility {
            Some(v) => v.meters(),
            None => visibility_m,
        };
        let overlay_ceiling = match overlay.ceiling_ft() {
            Some(c) => c,
            None => ceiling_ft,
        };
        let overlay_cat = classify(overlay_ceiling, overlay_vis);

        // Unfiltered worst case, kept for display.
        if worst.as_ref().map_or(true, |w| overlay_cat > w.category) {
            worst = Some(TransientOutlook {
                category: overlay_cat,
                ceiling_ft: overlay_ceiling,
                visibility_m: overlay_vis,
            });
        }

        // (b) only strict deteriorations are ever applied.
        if !overlay_cat.is_worse_than(category) {
            continue;
        }
        // (c) purely transient showers/thunderstorms are not applied.
        if overlay.wx.as_deref().map_or(false, wx::is_transient_only) {
            trace!(at = %t, "disregarding transient-only overlay");
            continue;
        }
        // (d) adopt the overlay as the hour's resolved state.
        category = overlay_cat;
        ceiling_ft = overlay_ceiling;
        visibility_m = overlay_vis;
    }

    let wind_shear =
        first_overlay.and_then(|overlay| shear::detect(&base_wind, &overlay.wind()));

    let mut merged_wx: Vec<String> = Vec::new();
    for token in wx_tokens {
        if !merged_wx.iter().any(|seen| seen == token) {
            merged_wx.push(token.to_string());
        }
    }

    let icing_risk = icing::is_icing(
        &merged_wx,
        latest_obs.and_then(|o| o.temperature_c),
        latest_obs.and_then(|o| o.dewpoint_c),
        ceiling_ft,
    );

    debug!(hour, at = %t, category = %category, "resolved hour");
    HourlyForecast {
        hour,
        time: t,
        category: Some(category),
        ceiling_ft,
        visibility_m,
        wind,
        wx: merged_wx.join(" "),
        transient: worst,
        wind_shear,
        icing_risk,
    }
}
