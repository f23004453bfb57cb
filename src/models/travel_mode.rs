//! Travel mode and its speed constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Walking speed used for time totals, in km/h.
pub const WALKING_SPEED_KMH: f64 = 4.0;

/// Driving speed used for time totals, in km/h.
pub const DRIVING_SPEED_KMH: f64 = 40.0;

/// How the route is travelled.
///
/// The mode never changes the visiting order; it only selects the speed used
/// to convert leg distances into minutes and the mode token of deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// On foot.
    #[default]
    Walking,
    /// By car.
    Driving,
}

impl TravelMode {
    /// Default speed for this mode in km/h.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TravelMode::Walking => WALKING_SPEED_KMH,
            TravelMode::Driving => DRIVING_SPEED_KMH,
        }
    }

    /// Lowercase token (`walking` / `driving`).
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

/// A travel mode paired with the speed used for time totals.
///
/// Converting from a bare [`TravelMode`] uses the mode's default speed.
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Travel, TravelMode};
///
/// let t: Travel = TravelMode::Driving.into();
/// assert_eq!(t.speed_kmh, 40.0);
/// let slow = Travel::new(TravelMode::Walking, 3.0);
/// assert_eq!(slow.mode, TravelMode::Walking);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Travel {
    /// Travel mode.
    pub mode: TravelMode,
    /// Speed in km/h.
    pub speed_kmh: f64,
}

impl Travel {
    /// Pairs a mode with an explicit speed.
    pub fn new(mode: TravelMode, speed_kmh: f64) -> Self {
        Self { mode, speed_kmh }
    }
}

impl From<TravelMode> for Travel {
    fn from(mode: TravelMode) -> Self {
        Self::new(mode, mode.speed_kmh())
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" | "walk" => Ok(TravelMode::Walking),
            "driving" | "drive" | "car" => Ok(TravelMode::Driving),
            _ => Err(RoutingError::UnknownVariant {
                kind: "travel mode",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speeds() {
        assert_eq!(TravelMode::Walking.speed_kmh(), 4.0);
        assert_eq!(TravelMode::Driving.speed_kmh(), 40.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Walking".parse::<TravelMode>().expect("ok"), TravelMode::Walking);
        assert_eq!("car".parse::<TravelMode>().expect("ok"), TravelMode::Driving);
        assert!("bicycle".parse::<TravelMode>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TravelMode::Driving.to_string(), "driving");
        assert_eq!(TravelMode::default(), TravelMode::Walking);
    }
}
