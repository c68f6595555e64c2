//! Decoded surface observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{classify, FlightCategory};
use crate::clouds::{ceiling, CloudLayer};
use crate::wind::Wind;

/// A decoded METAR. Every field the report did not carry is absent; a
/// truncated or partly malformed report still decodes to whatever fields
/// were recognizable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// The raw report text as received.
    pub raw: String,
    /// Observation time (day/hour/minute group resolved to a full instant).
    pub time: Option<DateTime<Utc>>,
    pub wind: Wind,
    /// Horizontal visibility in meters; absent means unrestricted.
    pub visibility_m: Option<f64>,
    /// Cloud layers in reported order.
    pub clouds: Vec<CloudLayer>,
    pub temperature_c: Option<i32>,
    pub dewpoint_c: Option<i32>,
    /// Altimeter setting in hectopascals.
    pub altimeter_hpa: Option<i32>,
    /// Raw weather-phenomenon groups, verbatim, in reported order.
    pub wx_codes: Vec<String>,
    /// Flight category derived from ceiling and visibility.
    pub category: FlightCategory,
}

impl Observation {
    /// Empty observation wrapping the raw text; all fields absent.
    pub fn empty(raw: &str) -> Self {
        Observation {
            raw: raw.to_string(),
            time: None,
            wind: Wind::default(),
            visibility_m: None,
            clouds: Vec::new(),
            temperature_c: None,
            dewpoint_c: None,
            altimeter_hpa: None,
            wx_codes: Vec::new(),
            category: FlightCategory::Vfr,
        }
    }

    /// Lowest broken/overcast/obscured layer base, in feet.
    pub fn ceiling_ft(&self) -> Option<u32> {
        ceiling(&self.clouds)
    }

    /// Recompute the derived flight category from the current fields.
    pub fn derive_category(&mut self) {
        self.category = classify(self.ceiling_ft(), self.visibility_m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clouds::CloudCover;

    #[test]
    fn test_empty_is_unrestricted_vfr() {
        let obs = Observation::empty("EFHK NIL");
        assert_eq!(obs.ceiling_ft(), None);
        assert_eq!(obs.category, FlightCategory::Vfr);
    }

    #[test]
    fn test_derive_category_tracks_fields() {
        let mut obs = Observation::empty("test");
        obs.visibility_m = Some(400.0);
        obs.clouds.push(CloudLayer { cover: CloudCover::Obscured, base_ft: 200 });
        obs.derive_category();
        assert_eq!(obs.category, FlightCategory::Lifr);
    }
}
