//! Airframe icing risk heuristic.

use avwx_common::wx;

/// Icing-conducive temperature band, inclusive, in degrees C.
const ICING_TEMP_RANGE: std::ops::RangeInclusive<i32> = -20..=2;

/// Ceiling at or below which near-saturated cloud counts as icing risk.
const LOW_CLOUD_CEILING_FT: u32 = 5000;

/// Evaluate icing risk from reported weather, temperature/dewpoint and
/// ceiling.
///
/// Freezing precipitation (any `FZ`-marked code) is an unconditional yes.
/// Otherwise the temperature must sit in the icing band; within it, any
/// precipitation code signals risk, as does a low ceiling with a small
/// temperature/dewpoint spread (near-saturated low cloud). Without a
/// temperature there is no signal beyond the freezing marker.
pub fn is_icing(
    wx_codes: &[String],
    temperature_c: Option<i32>,
    dewpoint_c: Option<i32>,
    ceiling_ft: Option<u32>,
) -> bool {
    if wx_codes.iter().any(|code| wx::has_freezing_marker(code)) {
        return true;
    }
    let Some(temp) = temperature_c else {
        return false;
    };
    if !ICING_TEMP_RANGE.contains(&temp) {
        return false;
    }
    if wx_codes.iter().any(|code| wx::has_precipitation(code)) {
        return true;
    }
    if let (Some(ceiling), Some(dew)) = (ceiling_ft, dewpoint_c) {
        if ceiling <= LOW_CLOUD_CEILING_FT && (temp - dew).abs() <= 3 {
            return true;
        }
    }
    false
}
