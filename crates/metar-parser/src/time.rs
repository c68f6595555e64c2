//! Observation time group resolution.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Resolve a `ddHHmmZ` group against a reference instant.
///
/// The group carries only day-of-month, hour and minute; year and month are
/// taken from the reference. A report received shortly after a month
/// boundary can still carry the previous month's day, so a constructed time
/// more than 24 hours in the future is rolled back one month.
pub fn resolve_report_time(token: &str, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if token.len() != 7 || !token.is_ascii() || !token.ends_with('Z') {
        return None;
    }
    let digits = &token[..6];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u32 = digits[0..2].parse().ok()?;
    let hour: u32 = digits[2..4].parse().ok()?;
    let minute: u32 = digits[4..6].parse().ok()?;
    if day == 0 || day > 31 || hour > 23 || minute > 59 {
        return None;
    }

    let candidate = Utc
        .with_ymd_and_hms(reference.year(), reference.month(), day, hour, minute, 0)
        .single();
    match candidate {
        Some(dt) if dt <= reference + Duration::hours(24) => Some(dt),
        _ => {
            // Day belongs to the previous month (or doesn't exist in this one).
            let (year, month) = if reference.month() == 1 {
                (reference.year() - 1, 12)
            } else {
                (reference.year(), reference.month() - 1)
            };
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
        }
    }
}
