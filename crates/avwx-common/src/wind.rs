//! Surface wind representation.

use serde::{Deserialize, Serialize};

/// Wind direction: a compass bearing or the variable indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    /// Bearing in degrees true, 0-359.
    Degrees(u16),
    /// Direction varying too much to report (VRB).
    Variable,
}

impl WindDirection {
    /// Numeric bearing, or `None` for variable winds.
    pub fn degrees(&self) -> Option<u16> {
        match self {
            WindDirection::Degrees(d) => Some(*d),
            WindDirection::Variable => None,
        }
    }

    /// Minimum angular separation to another direction, wrap-around aware.
    ///
    /// Returns `None` unless both directions are numeric.
    pub fn angular_difference(&self, other: &WindDirection) -> Option<u16> {
        let a = self.degrees()?;
        let b = other.degrees()?;
        let diff = (i32::from(a) - i32::from(b)).unsigned_abs() as u16 % 360;
        Some(diff.min(360 - diff))
    }
}

impl std::fmt::Display for WindDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindDirection::Degrees(d) => write!(f, "{:03}\u{00b0}", d),
            WindDirection::Variable => f.write_str("VRB"),
        }
    }
}

/// Surface wind. Every field is optional: observations usually carry all of
/// them, forecast periods often only speed and gust.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wind {
    pub direction: Option<WindDirection>,
    pub speed_kt: Option<u32>,
    pub gust_kt: Option<u32>,
}

impl Wind {
    /// True if no component is set.
    pub fn is_empty(&self) -> bool {
        self.direction.is_none() && self.speed_kt.is_none() && self.gust_kt.is_none()
    }

    /// Fold another wind in, keeping the maximum speed and gust seen.
    /// Direction is left untouched.
    pub fn max_speeds(&mut self, other: &Wind) {
        self.speed_kt = match (self.speed_kt, other.speed_kt) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.gust_kt = match (self.gust_kt, other.gust_kt) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }
}

impl std::fmt::Display for Wind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Some(dir) => write!(f, "{} ", dir)?,
            None => {}
        }
        match self.speed_kt {
            Some(speed) => write!(f, "{}kt", speed)?,
            None => f.write_str("calm")?,
        }
        if let Some(gust) = self.gust_kt {
            write!(f, " gusting {}kt", gust)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_difference_wraps() {
        let a = WindDirection::Degrees(350);
        let b = WindDirection::Degrees(10);
        assert_eq!(a.angular_difference(&b), Some(20));
        assert_eq!(b.angular_difference(&a), Some(20));

        let c = WindDirection::Degrees(90);
        let d = WindDirection::Degrees(270);
        assert_eq!(c.angular_difference(&d), Some(180));
    }

    #[test]
    fn test_angular_difference_requires_numeric() {
        let a = WindDirection::Variable;
        let b = WindDirection::Degrees(90);
        assert_eq!(a.angular_difference(&b), None);
    }

    #[test]
    fn test_max_speeds() {
        let mut base = Wind {
            direction: Some(WindDirection::Degrees(270)),
            speed_kt: Some(10),
            gust_kt: None,
        };
        let overlay = Wind {
            direction: Some(WindDirection::Degrees(180)),
            speed_kt: Some(25),
            gust_kt: Some(40),
        };
        base.max_speeds(&overlay);
        assert_eq!(base.speed_kt, Some(25));
        assert_eq!(base.gust_kt, Some(40));
        // Direction is never merged.
        assert_eq!(base.direction, Some(WindDirection::Degrees(270)));
    }

    #[test]
    fn test_display() {
        let wind = Wind {
            direction: Some(WindDirection::Degrees(270)),
            speed_kt: Some(15),
            gust_kt: Some(25),
        };
        assert_eq!(wind.to_string(), "270\u{00b0} 15kt gusting 25kt");
        assert_eq!(Wind::default().to_string(), "calm");
    }
}
