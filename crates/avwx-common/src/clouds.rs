//! Cloud layers and ceiling derivation.

use serde::{Deserialize, Serialize};

/// Cloud cover tier as reported in METAR/TAF cloud groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudCover {
    /// 1-2 oktas.
    #[serde(rename = "FEW")]
    Few,
    /// 3-4 oktas.
    #[serde(rename = "SCT")]
    Scattered,
    /// 5-7 oktas.
    #[serde(rename = "BKN")]
    Broken,
    /// 8 oktas.
    #[serde(rename = "OVC")]
    Overcast,
    /// Sky fully obscured, vertical visibility reported instead (VV).
    #[serde(rename = "VV")]
    Obscured,
}

impl CloudCover {
    /// Parse a METAR cover code (`FEW`, `SCT`, `BKN`, `OVC`, `VV`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FEW" => Some(CloudCover::Few),
            "SCT" => Some(CloudCover::Scattered),
            "BKN" => Some(CloudCover::Broken),
            "OVC" => Some(CloudCover::Overcast),
            "VV" => Some(CloudCover::Obscured),
            _ => None,
        }
    }

    /// True if this tier constitutes a ceiling (broken or more).
    pub fn is_ceiling(&self) -> bool {
        matches!(
            self,
            CloudCover::Broken | CloudCover::Overcast | CloudCover::Obscured
        )
    }
}

/// One reported cloud layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    pub cover: CloudCover,
    /// Layer base above field elevation, in feet.
    pub base_ft: u32,
}

/// Ceiling: the lowest base among layers that count as a ceiling
/// (BKN/OVC/VV). FEW and SCT never set one.
pub fn ceiling(layers: &[CloudLayer]) -> Option<u32> {
    layers
        .iter()
        .filter(|layer| layer.cover.is_ceiling())
        .map(|layer| layer.base_ft)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_ignores_few_and_sct() {
        let layers = [
            CloudLayer { cover: CloudCover::Few, base_ft: 500 },
            CloudLayer { cover: CloudCover::Scattered, base_ft: 1200 },
        ];
        assert_eq!(ceiling(&layers), None);
    }

    #[test]
    fn test_ceiling_is_lowest_qualifying_base() {
        let layers = [
            CloudLayer { cover: CloudCover::Few, base_ft: 800 },
            CloudLayer { cover: CloudCover::Broken, base_ft: 3500 },
            CloudLayer { cover: CloudCover::Overcast, base_ft: 2500 },
        ];
        assert_eq!(ceiling(&layers), Some(2500));
    }

    #[test]
    fn test_vertical_visibility_sets_ceiling() {
        let layers = [CloudLayer { cover: CloudCover::Obscured, base_ft: 200 }];
        assert_eq!(ceiling(&layers), Some(200));
    }
}
