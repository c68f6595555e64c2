//! Forecast document model.
//!
//! A serde mirror of the third-party aviation-forecast API response: an
//! unordered collection of periods plus an issue time. Exactly one period
//! carries no change indicator; that period is the initial base every other
//! period inherits unset fields from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use avwx_common::clouds::{ceiling, CloudLayer};
use avwx_common::error::{AvwxError, AvwxResult};
use avwx_common::wind::{Wind, WindDirection};

const METERS_PER_STATUTE_MILE: f64 = 1609.34;

/// Change indicator on a forecast period. A period with no indicator is the
/// initial base line of the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Rapid change: a complete new base forecast from its start time.
    #[serde(rename = "FM")]
    Fm,
    /// Gradual transition over a window.
    #[serde(rename = "BECMG")]
    Becmg,
    /// Temporary fluctuation expected to recur within the window.
    #[serde(rename = "TEMPO")]
    Tempo,
    /// Probability-qualified group.
    #[serde(rename = "PROB")]
    Prob,
}

/// Forecast visibility. Distinct from an unset field: a period that reports
/// "P6SM"/"6+" has *set* its visibility (to unrestricted) and must not
/// inherit the base value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Visibility {
    /// "6+" / "P6" sentinel: effectively unrestricted.
    Unlimited,
    Meters(f64),
}

impl Visibility {
    /// Visibility in meters; `None` for unlimited (passes every minimum).
    pub fn meters(&self) -> Option<f64> {
        match self {
            Visibility::Unlimited => None,
            Visibility::Meters(m) => Some(*m),
        }
    }

    /// Parse the API's string form: statute miles, simple fractions, and
    /// the "P6"/"6+" unrestricted sentinels, with an optional SM suffix.
    pub fn from_api_str(s: &str) -> AvwxResult<Visibility> {
        let body = s.trim();
        let body = body.strip_suffix("SM").unwrap_or(body);
        if body.starts_with('P') || body.ends_with('+') {
            return Ok(Visibility::Unlimited);
        }
        let miles = if let Some((num, den)) = body.split_once('/') {
            let num: f64 = num
                .parse()
                .map_err(|_| AvwxError::InvalidVisibility(s.to_string()))?;
            let den: f64 = den
                .parse()
                .map_err(|_| AvwxError::InvalidVisibility(s.to_string()))?;
            if den <= 0.0 {
                return Err(AvwxError::InvalidVisibility(s.to_string()));
            }
            num / den
        } else {
            body.parse()
                .map_err(|_| AvwxError::InvalidVisibility(s.to_string()))?
        };
        Ok(Visibility::Meters(miles * METERS_PER_STATUTE_MILE))
    }
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Meters(f64),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Meters(m) => Ok(Visibility::Meters(m)),
            Raw::Text(s) => Visibility::from_api_str(&s).map_err(serde::de::Error::custom),
        }
    }
}

/// One forecast period (a single TAF line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Change indicator; absent for the initial base period.
    #[serde(default, rename = "change_indicator")]
    pub change: Option<ChangeKind>,
    /// Probability tier (30/40) for PROB-qualified groups.
    #[serde(default)]
    pub probability: Option<u8>,
    /// Validity start.
    #[serde(rename = "time_from")]
    pub from: DateTime<Utc>,
    /// Validity end; carried by TEMPO/PROB windows.
    #[serde(default, rename = "time_to")]
    pub to: Option<DateTime<Utc>>,
    /// Transition-complete time for BECMG periods.
    #[serde(default, rename = "time_becoming")]
    pub becoming: Option<DateTime<Utc>>,
    /// Visibility override; unset fields inherit from the initial base.
    #[serde(default)]
    pub visibility: Option<Visibility>,
    /// Cloud-layer override. `Some(vec![])` is an explicit clear sky,
    /// `None` inherits.
    #[serde(default, rename = "sky_condition")]
    pub clouds: Option<Vec<CloudLayer>>,
    #[serde(default, rename = "wind_dir_degrees")]
    pub wind_dir_degrees: Option<u16>,
    #[serde(default, rename = "wind_speed_kt")]
    pub wind_speed_kt: Option<u32>,
    #[serde(default, rename = "wind_gust_kt")]
    pub wind_gust_kt: Option<u32>,
    /// Raw weather-phenomenon string, space separated.
    #[serde(default, rename = "wx_string")]
    pub wx: Option<String>,
}

impl ForecastPeriod {
    /// TEMPO and PROB periods overlay the active base; everything else is a
    /// base candidate.
    pub fn is_overlay(&self) -> bool {
        matches!(self.change, Some(ChangeKind::Tempo) | Some(ChangeKind::Prob))
    }

    /// True if the period's validity window covers `t` (half-open: a window
    /// ending on the hour does not cover that hour).
    pub fn covers(&self, t: DateTime<Utc>) -> bool {
        self.from <= t && self.to.map_or(true, |end| t < end)
    }

    /// The period's wind override as a [`Wind`]; empty if none of the wind
    /// fields are set.
    pub fn wind(&self) -> Wind {
        Wind {
            direction: self.wind_dir_degrees.map(WindDirection::Degrees),
            speed_kt: self.wind_speed_kt,
            gust_kt: self.wind_gust_kt,
        }
    }

    /// Ceiling from this period's own cloud override, if it has one.
    pub fn ceiling_ft(&self) -> Option<Option<u32>> {
        self.clouds.as_deref().map(ceiling)
    }
}

/// A complete forecast document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDocument {
    /// Issue time of the forecast.
    #[serde(rename = "issue_time")]
    pub issued: DateTime<Utc>,
    /// Forecast periods; order follows the source document.
    #[serde(rename = "forecast")]
    pub periods: Vec<ForecastPeriod>,
}

impl ForecastDocument {
    /// Deserialize from the third-party API JSON shape.
    pub fn from_json(json: &str) -> AvwxResult<ForecastDocument> {
        Ok(serde_json::from_str(json)?)
    }

    /// The one unconditioned period, used for field inheritance.
    pub fn initial_base(&self) -> Option<&ForecastPeriod> {
        self.periods.iter().find(|p| p.change.is_none())
    }
}
