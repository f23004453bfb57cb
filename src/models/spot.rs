//! Spot type: a named destination with optional wait and visit durations.

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::error::{Result, RoutingError};

/// A candidate destination.
///
/// Spots are identified by name, which must be unique within one candidate
/// list. Wait time and visit duration are in minutes; missing values count as
/// zero when totals are computed.
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Spot};
///
/// let c = Coordinate::new(33.322, 130.926).unwrap();
/// let spot = Spot::new("Castle", c).with_wait_minutes(15.0).unwrap();
/// assert_eq!(spot.name(), "Castle");
/// assert_eq!(spot.wait_minutes(), 15.0);
/// assert_eq!(spot.visit_minutes(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpot", into = "RawSpot")]
pub struct Spot {
    name: String,
    coordinate: Coordinate,
    wait_minutes: Option<f64>,
    visit_minutes: Option<f64>,
}

impl Spot {
    /// Creates a spot with no wait time or visit duration.
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
            wait_minutes: None,
            visit_minutes: None,
        }
    }

    /// Sets the expected wait time in minutes.
    pub fn with_wait_minutes(mut self, minutes: f64) -> Result<Self> {
        self.wait_minutes = Some(check_minutes(&self.name, "wait_minutes", minutes)?);
        Ok(self)
    }

    /// Sets the nominal visit duration in minutes.
    pub fn with_visit_minutes(mut self, minutes: f64) -> Result<Self> {
        self.visit_minutes = Some(check_minutes(&self.name, "visit_minutes", minutes)?);
        Ok(self)
    }

    /// Spot name (identity).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of this spot.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Expected wait time in minutes, zero if unknown.
    pub fn wait_minutes(&self) -> f64 {
        self.wait_minutes.unwrap_or(0.0)
    }

    /// Nominal visit duration in minutes, zero if unknown.
    pub fn visit_minutes(&self) -> f64 {
        self.visit_minutes.unwrap_or(0.0)
    }
}

#[derive(Serialize, Deserialize)]
struct RawSpot {
    name: String,
    coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wait_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    visit_minutes: Option<f64>,
}

impl TryFrom<RawSpot> for Spot {
    type Error = RoutingError;

    fn try_from(raw: RawSpot) -> Result<Self> {
        let mut spot = Spot::new(raw.name, raw.coordinate);
        if let Some(w) = raw.wait_minutes {
            spot = spot.with_wait_minutes(w)?;
        }
        if let Some(v) = raw.visit_minutes {
            spot = spot.with_visit_minutes(v)?;
        }
        Ok(spot)
    }
}

impl From<Spot> for RawSpot {
    fn from(s: Spot) -> Self {
        Self {
            name: s.name,
            coordinate: s.coordinate,
            wait_minutes: s.wait_minutes,
            visit_minutes: s.visit_minutes,
        }
    }
}

fn check_minutes(spot: &str, field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(RoutingError::InvalidAttribute {
            spot: spot.to_string(),
            field,
            value,
        });
    }
    Ok(value)
}

/// Returns an error naming the first spot whose name was already seen.
pub fn ensure_unique_names(spots: &[Spot]) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(spots.len());
    for spot in spots {
        if !seen.insert(spot.name()) {
            return Err(RoutingError::DuplicateSpot {
                name: spot.name().to_string(),
            });
        }
    }
    Ok(())
}
