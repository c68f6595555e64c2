//! METAR decoder.
//!
//! Decodes a raw surface observation into an [`Observation`]. The grammar is
//! a small fixed vocabulary, so each field has one independent matcher that
//! scans the whole token stream and takes the first hit; unsupported or
//! malformed groups are skipped rather than rejected, and a field with no
//! matching group is simply absent.

mod fields;
mod time;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use avwx_common::Observation;

pub use time::resolve_report_time;

/// Decode a raw METAR against the current instant.
///
/// Returns `None` only for empty input; a truncated or partly malformed
/// report decodes to whatever fields were recognizable.
pub fn parse(raw: &str) -> Option<Observation> {
    parse_at(raw, Utc::now())
}

/// Decode a raw METAR, resolving its time group against `reference`.
pub fn parse_at(raw: &str, reference: DateTime<Utc>) -> Option<Observation> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let mut obs = Observation::empty(raw);
    obs.time = tokens
        .iter()
        .find_map(|t| time::resolve_report_time(t, reference));
    obs.wind = fields::wind(&tokens);
    obs.visibility_m = fields::visibility(&tokens);
    // CAVOK overrides any other visibility group unconditionally.
    if tokens.iter().any(|t| *t == "CAVOK") {
        trace!("CAVOK present, forcing visibility to 10 km");
        obs.visibility_m = Some(10000.0);
    }
    obs.clouds = fields::clouds(&tokens);
    if let Some((temp, dew)) = fields::temperature_dewpoint(&tokens) {
        obs.temperature_c = Some(temp);
        obs.dewpoint_c = Some(dew);
    }
    obs.altimeter_hpa = fields::altimeter(&tokens);
    obs.wx_codes = fields::weather(&tokens);
    obs.derive_category();

    debug!(
        category = %obs.category,
        ceiling = ?obs.ceiling_ft(),
        visibility = ?obs.visibility_m,
        "decoded observation"
    );
    Some(obs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use avwx_common::FlightCategory;
    use chrono::TimeZone;

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
    }

    #[test]
    fn test_partial_report_degrades_gracefully() {
        let obs = parse("EFHK 121920Z GARBAGE !!").unwrap();
        assert_eq!(obs.visibility_m, None);
        assert!(obs.clouds.is_empty());
        assert_eq!(obs.category, FlightCategory::Vfr);
    }

    #[test]
    fn test_cavok_overrides_other_groups() {
        let obs = parse("EFHK 121920Z 27015KT 4000 CAVOK 07/02 Q1008").unwrap();
        assert_eq!(obs.visibility_m, Some(10000.0));
    }

    #[test]
    fn test_time_resolution_uses_reference() {
        let reference = Utc.with_ymd_and_hms(2024, 3, 12, 21, 0, 0).unwrap();
        let obs = parse_at("EFHK 121920Z 27015KT CAVOK", reference).unwrap();
        let time = obs.time.unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2024, 3, 12, 19, 20, 0).unwrap());
    }
}
