//! Weather-phenomenon code tables and decoding.
//!
//! Raw METAR/TAF weather groups (`-SHRA`, `VCTS`, `FZFG`, ...) are kept
//! verbatim by the parser; this module validates them, decomposes them into
//! two-letter codes and translates them into readable text for display.

/// Descriptor codes that qualify a phenomenon.
const DESCRIPTORS: [&str; 8] = ["MI", "PR", "BC", "DR", "BL", "SH", "TS", "FZ"];

/// Phenomenon codes (precipitation, obscuration and other).
const PHENOMENA: [&str; 21] = [
    "DZ", "RA", "SN", "SG", "IC", "PL", "GR", "GS", "UP", "BR", "FG", "FU", "VA", "DU", "SA",
    "HZ", "PO", "SQ", "FC", "SS", "DS",
];

/// Precipitation codes that matter for icing.
const PRECIPITATION: [&str; 7] = ["RA", "SN", "DZ", "PL", "SG", "GR", "GS"];

/// A weather group decomposed into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WxGroup {
    /// `+` heavy, `-` light, absent for moderate.
    pub intensity: Option<char>,
    /// VC prefix: phenomenon in the vicinity, not at the station.
    pub vicinity: bool,
    /// Two-letter codes in reported order, descriptors first.
    pub codes: Vec<String>,
}

impl WxGroup {
    /// Decompose a raw token into a weather group.
    ///
    /// Returns `None` unless the whole token is a well-formed group: an
    /// optional intensity sign, optional `VC`, then two-letter codes drawn
    /// from the descriptor/phenomenon tables, at least one of which is a
    /// phenomenon (`TS` standing alone also qualifies).
    pub fn decompose(token: &str) -> Option<WxGroup> {
        let mut rest = token;
        let intensity = match rest.chars().next() {
            Some(c @ ('+' | '-')) => {
                rest = &rest[1..];
                Some(c)
            }
            _ => None,
        };
        let vicinity = if let Some(stripped) = rest.strip_prefix("VC") {
            rest = stripped;
            true
        } else {
            false
        };
        if rest.is_empty() || rest.len() % 2 != 0 || !rest.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }

        let mut codes = Vec::with_capacity(rest.len() / 2);
        let mut has_phenomenon = false;
        for chunk in rest.as_bytes().chunks(2) {
            let code = std::str::from_utf8(chunk).ok()?;
            if PHENOMENA.contains(&code) {
                has_phenomenon = true;
            } else if code == "TS" {
                // A bare thunderstorm group is reportable weather on its own.
                has_phenomenon = true;
            } else if !DESCRIPTORS.contains(&code) {
                return None;
            }
            codes.push(code.to_string());
        }
        if !has_phenomenon {
            return None;
        }
        Some(WxGroup { intensity, vicinity, codes })
    }

    /// True if this group contains any precipitation code.
    pub fn has_precipitation(&self) -> bool {
        self.codes.iter().any(|c| PRECIPITATION.contains(&c.as_str()))
    }

    /// True if the group is led by a shower or thunderstorm descriptor.
    pub fn is_shower_or_thunder(&self) -> bool {
        self.codes
            .first()
            .map(|c| c == "SH" || c == "TS")
            .unwrap_or(false)
    }
}

/// True if the token is a well-formed weather group.
pub fn is_wx_token(token: &str) -> bool {
    WxGroup::decompose(token).is_some()
}

/// True if the raw code carries the freezing-precipitation marker.
pub fn has_freezing_marker(code: &str) -> bool {
    code.contains("FZ")
}

/// True if the raw code contains any precipitation phenomenon.
pub fn has_precipitation(code: &str) -> bool {
    match WxGroup::decompose(code) {
        Some(group) => group.has_precipitation(),
        // Fall back to a substring scan for codes that arrive pre-merged.
        None => PRECIPITATION.iter().any(|p| code.contains(p)),
    }
}

/// True if every group in a whitespace-separated weather string is purely
/// transient: shower or thunderstorm groups only. Any standalone phenomenon
/// (RA, FG, BR, ...) counts as persistent weather.
pub fn is_transient_only(wx: &str) -> bool {
    let mut saw_group = false;
    for token in wx.split_whitespace() {
        match WxGroup::decompose(token) {
            Some(group) if group.is_shower_or_thunder() => saw_group = true,
            Some(_) => return false,
            // Unrecognized tokens don't make the weather transient.
            None => return false,
        }
    }
    saw_group
}

fn code_text(code: &str) -> &'static str {
    match code {
        "MI" => "shallow",
        "PR" => "partial",
        "BC" => "patches of",
        "DR" => "drifting",
        "BL" => "blowing",
        "SH" => "showers of",
        "TS" => "thunderstorm",
        "FZ" => "freezing",
        "DZ" => "drizzle",
        "RA" => "rain",
        "SN" => "snow",
        "SG" => "snow grains",
        "IC" => "ice crystals",
        "PL" => "ice pellets",
        "GR" => "hail",
        "GS" => "small hail",
        "UP" => "unknown precipitation",
        "BR" => "mist",
        "FG" => "fog",
        "FU" => "smoke",
        "VA" => "volcanic ash",
        "DU" => "dust",
        "SA" => "sand",
        "HZ" => "haze",
        "PO" => "dust whirls",
        "SQ" => "squalls",
        "FC" => "funnel cloud",
        "SS" => "sandstorm",
        "DS" => "duststorm",
        _ => "",
    }
}

/// Translate a raw weather group into readable text, e.g.
/// `-SHRA` -> "light showers of rain", `VCTS` -> "thunderstorm in vicinity".
/// Unrecognized tokens come back unchanged.
pub fn describe(token: &str) -> String {
    let group = match WxGroup::decompose(token) {
        Some(g) => g,
        None => return token.to_string(),
    };
    let mut parts: Vec<&str> = Vec::new();
    match group.intensity {
        Some('+') => parts.push("heavy"),
        Some('-') => parts.push("light"),
        _ => {}
    }
    for code in &group.codes {
        let text = code_text(code);
        if !text.is_empty() {
            parts.push(text);
        }
    }
    if group.vicinity {
        parts.push("in vicinity");
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_simple() {
        let group = WxGroup::decompose("RA").unwrap();
        assert_eq!(group.codes, vec!["RA"]);
        assert!(group.has_precipitation());
        assert!(!group.is_shower_or_thunder());
    }

    #[test]
    fn test_decompose_prefixed() {
        let group = WxGroup::decompose("+SHRA").unwrap();
        assert_eq!(group.intensity, Some('+'));
        assert_eq!(group.codes, vec!["SH", "RA"]);
        assert!(group.is_shower_or_thunder());

        let group = WxGroup::decompose("VCTS").unwrap();
        assert!(group.vicinity);
        assert_eq!(group.codes, vec!["TS"]);
    }

    #[test]
    fn test_decompose_rejects_non_weather() {
        assert!(WxGroup::decompose("EFHK").is_none());
        assert!(WxGroup::decompose("BKN035").is_none());
        assert!(WxGroup::decompose("KT").is_none());
        // Descriptor with no phenomenon is not reportable weather.
        assert!(WxGroup::decompose("SH").is_none());
        assert!(WxGroup::decompose("").is_none());
    }

    #[test]
    fn test_freezing_marker() {
        assert!(has_freezing_marker("FZFG"));
        assert!(has_freezing_marker("-FZRA"));
        assert!(!has_freezing_marker("-RA"));
    }

    #[test]
    fn test_transient_only() {
        assert!(is_transient_only("SHRA"));
        assert!(is_transient_only("TSRA SHSN"));
        assert!(!is_transient_only("SHRA BR"));
        assert!(!is_transient_only("RA"));
        assert!(!is_transient_only(""));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("-SHRA"), "light showers of rain");
        assert_eq!(describe("FZFG"), "freezing fog");
        assert_eq!(describe("VCTS"), "thunderstorm in vicinity");
        assert_eq!(describe("XYZ123"), "XYZ123");
    }
}
