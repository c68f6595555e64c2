//! Per-field token matchers.
//!
//! Each extractor scans the whole token stream independently and takes the
//! first token matching its pattern, so group order in the report doesn't
//! matter. A field with no matching token is simply absent.

use avwx_common::clouds::{CloudCover, CloudLayer};
use avwx_common::wind::{Wind, WindDirection};
use avwx_common::wx;

const METERS_PER_STATUTE_MILE: f64 = 1609.34;

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `dddss[Gggg]KT` or `VRBss[Gggg]KT`.
pub fn wind(tokens: &[&str]) -> Wind {
    for token in tokens {
        if !token.is_ascii() {
            continue;
        }
        let Some(body) = token.strip_suffix("KT") else {
            continue;
        };
        let (direction, rest) = if let Some(rest) = body.strip_prefix("VRB") {
            (WindDirection::Variable, rest)
        } else if body.len() >= 5 && all_digits(&body[..3]) {
            // 360 is reported for a due-north wind.
            let deg: u16 = match body[..3].parse() {
                Ok(d) if d <= 360 => d,
                _ => continue,
            };
            (WindDirection::Degrees(deg), &body[3..])
        } else {
            continue;
        };

        let (speed_part, gust_part) = match rest.split_once('G') {
            Some((s, g)) => (s, Some(g)),
            None => (rest, None),
        };
        if !all_digits(speed_part) || speed_part.len() > 3 {
            continue;
        }
        let speed: u32 = match speed_part.parse() {
            Ok(s) => s,
            Err(_) => continue,
        };
        let gust = match gust_part {
            Some(g) if all_digits(g) && g.len() <= 3 => g.parse().ok(),
            Some(_) => continue,
            None => None,
        };
        return Wind {
            direction: Some(direction),
            speed_kt: Some(speed),
            gust_kt: gust,
        };
    }
    Wind::default()
}

/// Visibility in meters.
///
/// Matches a bare 4-digit meter group (only from token index 2 on, so the
/// station code and time group can never be mistaken for visibility) or a
/// statute-mile group with simple fractions. `9999` means "10 km or more".
/// `CAVOK` is handled by the caller and overrides whatever this returns.
pub fn visibility(tokens: &[&str]) -> Option<f64> {
    for (i, token) in tokens.iter().enumerate() {
        if i > 1 && token.len() == 4 && all_digits(token) {
            let meters: u32 = token.parse().ok()?;
            return Some(if meters == 9999 { 10000.0 } else { f64::from(meters) });
        }
        if let Some(body) = token.strip_suffix("SM") {
            // "P" prefix ("more than") contributes nothing to the number.
            let body = body.strip_prefix('P').unwrap_or(body);
            let miles = if let Some((num, den)) = body.split_once('/') {
                let num: f64 = match num.parse() {
                    Ok(n) => n,
                    Err(_) => continue,
                };
                let den: f64 = match den.parse() {
                    Ok(d) if d > 0.0 => d,
                    _ => continue,
                };
                num / den
            } else if all_digits(body) {
                match body.parse::<f64>() {
                    Ok(m) => m,
                    Err(_) => continue,
                }
            } else {
                continue;
            };
            return Some(miles * METERS_PER_STATUTE_MILE);
        }
    }
    None
}

/// Repeated `(FEW|SCT|BKN|OVC|VV)nnn` groups, in order of appearance.
/// A trailing convective marker (`CB`, `TCU`) is tolerated and ignored.
pub fn clouds(tokens: &[&str]) -> Vec<CloudLayer> {
    let mut layers = Vec::new();
    for token in tokens {
        if !token.is_ascii() {
            continue;
        }
        let (code, rest) = if let Some(rest) = token.strip_prefix("VV") {
            ("VV", rest)
        } else if token.len() >= 5 {
            (&token[..3], &token[3..])
        } else {
            continue;
        };
        let Some(cover) = CloudCover::from_code(code) else {
            continue;
        };
        if rest.len() < 3 || !all_digits(&rest[..3]) {
            continue;
        }
        let hundreds: u32 = match rest[..3].parse() {
            Ok(h) => h,
            Err(_) => continue,
        };
        layers.push(CloudLayer { cover, base_ft: hundreds * 100 });
    }
    layers
}

fn signed_temp(part: &str) -> Option<i32> {
    let (negative, digits) = match part.strip_prefix('M') {
        Some(rest) => (true, rest),
        None => (false, part),
    };
    if digits.is_empty() || digits.len() > 2 || !all_digits(digits) {
        return None;
    }
    let value: i32 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `(M?nn)/(M?nn)` temperature/dewpoint group.
pub fn temperature_dewpoint(tokens: &[&str]) -> Option<(i32, i32)> {
    for token in tokens {
        let Some((t, d)) = token.split_once('/') else {
            continue;
        };
        if let (Some(temp), Some(dew)) = (signed_temp(t), signed_temp(d)) {
            return Some((temp, dew));
        }
    }
    None
}

/// `Qnnnn` (hPa) or `Annnn` (inHg hundredths, converted to hPa).
pub fn altimeter(tokens: &[&str]) -> Option<i32> {
    for token in tokens {
        if token.len() != 5 || !token.is_ascii() {
            continue;
        }
        let digits = &token[1..];
        if !all_digits(digits) {
            continue;
        }
        let value: i32 = digits.parse().ok()?;
        match token.as_bytes()[0] {
            b'Q' => return Some(value),
            b'A' => return Some((f64::from(value) * 33.8639 / 100.0).round() as i32),
            _ => continue,
        }
    }
    None
}

/// Every well-formed weather-phenomenon group, verbatim, in order.
/// The station code (token 0) is never considered.
pub fn weather(tokens: &[&str]) -> Vec<String> {
    tokens
        .iter()
        .skip(1)
        .filter(|token| wx::is_wx_token(token))
        .map(|token| token.to_string())
        .collect()
}
