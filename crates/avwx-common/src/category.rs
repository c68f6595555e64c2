//! Flight-category classification from ceiling and visibility.

use serde::{Deserialize, Serialize};

/// Flight category, ordered by increasing severity.
///
/// The derived `Ord` follows declaration order, so
/// `Vfr < Mvfr < Bir < Ifr < Lifr` and "worse" means "greater".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlightCategory {
    /// Visual flight rules.
    Vfr,
    /// Marginal VFR.
    Mvfr,
    /// Basic instrument rating minima.
    Bir,
    /// Instrument flight rules.
    Ifr,
    /// Low IFR.
    Lifr,
}

impl FlightCategory {
    /// Short code as displayed on aviation charts.
    pub fn code(&self) -> &'static str {
        match self {
            FlightCategory::Vfr => "VFR",
            FlightCategory::Mvfr => "MVFR",
            FlightCategory::Bir => "BIR",
            FlightCategory::Ifr => "IFR",
            FlightCategory::Lifr => "LIFR",
        }
    }

    /// True if `self` is strictly worse (more restrictive) than `other`.
    pub fn is_worse_than(&self, other: FlightCategory) -> bool {
        *self > other
    }
}

impl std::fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify ceiling (ft) and visibility (m) into a flight category.
///
/// Absent values are unrestricted: a missing ceiling or visibility passes
/// every minimum. The tests run in order and the first match wins; the
/// boundaries are regulatory contract values, not tunables. Note the final
/// LIFR test is an OR of independent thresholds while the earlier tiers
/// require both, which leaves an IFR residual bucket for combinations that
/// fail BIR's AND without satisfying LIFR's OR (e.g. ceiling 550 / vis 2000).
pub fn classify(ceiling_ft: Option<u32>, visibility_m: Option<f64>) -> FlightCategory {
    let ceil = ceiling_ft.map(f64::from).unwrap_or(f64::INFINITY);
    let vis = visibility_m.unwrap_or(f64::INFINITY);

    if ceil > 3000.0 && vis > 8000.0 {
        FlightCategory::Vfr
    } else if ceil >= 1000.0 && vis >= 5000.0 {
        FlightCategory::Mvfr
    } else if ceil >= 600.0 && vis >= 1500.0 {
        FlightCategory::Bir
    } else if ceil < 500.0 || vis < 1500.0 {
        FlightCategory::Lifr
    } else {
        FlightCategory::Ifr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(FlightCategory::Vfr < FlightCategory::Mvfr);
        assert!(FlightCategory::Mvfr < FlightCategory::Bir);
        assert!(FlightCategory::Bir < FlightCategory::Ifr);
        assert!(FlightCategory::Ifr < FlightCategory::Lifr);
        assert!(FlightCategory::Lifr.is_worse_than(FlightCategory::Vfr));
        assert!(!FlightCategory::Vfr.is_worse_than(FlightCategory::Vfr));
    }

    #[test]
    fn test_unrestricted_is_vfr() {
        assert_eq!(classify(None, None), FlightCategory::Vfr);
        assert_eq!(classify(None, Some(9500.0)), FlightCategory::Vfr);
        assert_eq!(classify(Some(4000), None), FlightCategory::Vfr);
    }

    #[test]
    fn test_vfr_boundaries_are_strict() {
        assert_eq!(classify(Some(3500), Some(9000.0)), FlightCategory::Vfr);
        // Exactly 3000/8000 fails the strict VFR test and lands in MVFR.
        assert_eq!(classify(Some(3000), Some(9000.0)), FlightCategory::Mvfr);
        assert_eq!(classify(Some(3500), Some(8000.0)), FlightCategory::Mvfr);
    }

    #[test]
    fn test_mvfr_and_bir() {
        assert_eq!(classify(Some(800), Some(6000.0)), FlightCategory::Bir);
        assert_eq!(classify(Some(1000), Some(5000.0)), FlightCategory::Mvfr);
        assert_eq!(classify(Some(600), Some(1500.0)), FlightCategory::Bir);
        assert_eq!(classify(Some(700), Some(4000.0)), FlightCategory::Bir);
    }

    #[test]
    fn test_residual_ifr_bucket() {
        // Fails BIR's AND test (ceiling 550 < 600) but also fails LIFR's OR
        // test (550 >= 500 and 2000 >= 1500): the residual bucket is IFR.
        assert_eq!(classify(Some(550), Some(2000.0)), FlightCategory::Ifr);
        assert_eq!(classify(Some(500), Some(1500.0)), FlightCategory::Ifr);
    }

    #[test]
    fn test_lifr() {
        assert_eq!(classify(Some(400), Some(1000.0)), FlightCategory::Lifr);
        assert_eq!(classify(Some(400), Some(9999.0)), FlightCategory::Lifr);
        assert_eq!(classify(Some(2000), Some(800.0)), FlightCategory::Lifr);
        assert_eq!(classify(None, Some(1000.0)), FlightCategory::Lifr);
    }

    #[test]
    fn test_classify_is_total() {
        // Every combination in a coarse sweep returns some category without
        // panicking, and the same inputs always give the same answer.
        for ceil in [None, Some(0), Some(450), Some(599), Some(999), Some(5000)] {
            for vis in [None, Some(0.0), Some(1499.0), Some(4999.0), Some(10000.0)] {
                assert_eq!(classify(ceil, vis), classify(ceil, vis));
            }
        }
    }
}
