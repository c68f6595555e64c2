//! Wind-shear heuristic between a base forecast wind and an overlay wind.

use avwx_common::wind::Wind;

/// Sustained-speed difference that signals shear, in knots.
const SPEED_DELTA_KT: u32 = 10;

/// Direction swing that signals shear when both winds are strong enough.
const DIRECTION_DELTA_DEG: u16 = 60;

/// Minimum sustained speed for the direction test to be meaningful.
const DIRECTION_MIN_SPEED_KT: u32 = 8;

/// Overlay gust-over-sustained spread that signals shear, in knots.
const GUST_SPREAD_KT: u32 = 15;

/// Compare the base wind against an overlay wind and describe the shear if
/// any trigger fires. No signal when both speeds are absent; a single
/// absent speed contributes 0 kt to the speed test.
pub fn detect(base: &Wind, overlay: &Wind) -> Option<String> {
    if base.speed_kt.is_none() && overlay.speed_kt.is_none() {
        return None;
    }
    let base_speed = base.speed_kt.unwrap_or(0);
    let overlay_speed = overlay.speed_kt.unwrap_or(0);

    let mut triggered = base_speed.abs_diff(overlay_speed) >= SPEED_DELTA_KT;

    if !triggered && base_speed >= DIRECTION_MIN_SPEED_KT && overlay_speed >= DIRECTION_MIN_SPEED_KT
    {
        if let (Some(bd), Some(od)) = (base.direction, overlay.direction) {
            if let Some(swing) = bd.angular_difference(&od) {
                triggered = swing >= DIRECTION_DELTA_DEG;
            }
        }
    }

    if !triggered {
        if let (Some(gust), Some(speed)) = (overlay.gust_kt, overlay.speed_kt) {
            triggered = gust.saturating_sub(speed) >= GUST_SPREAD_KT;
        }
    }

    triggered.then(|| format!("{} \u{2192} {}", base, overlay))
}
