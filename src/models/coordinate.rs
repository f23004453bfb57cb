//! Geographic coordinate type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A latitude/longitude pair in decimal degrees.
///
/// Construction validates the range: latitude in [-90, 90], longitude in
/// [-180, 180], both finite.
///
/// # Examples
///
/// ```
/// use spot_routing::models::Coordinate;
///
/// let c = Coordinate::new(33.320, 130.930).unwrap();
/// assert_eq!(c.latitude(), 33.320);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(RoutingError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses the `"lat,lon"` text form (whitespace around either part allowed).
    pub fn parse(input: &str) -> Result<Self> {
        let parse_err = || RoutingError::ParseCoordinate {
            input: input.to_string(),
        };
        let (lat, lon) = input.split_once(',').ok_or_else(parse_err)?;
        let lat: f64 = lat.trim().parse().map_err(|_| parse_err())?;
        let lon: f64 = lon.trim().parse().map_err(|_| parse_err())?;
        Self::new(lat, lon)
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another coordinate, in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::distance::haversine_km(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = RoutingError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid() {
        let c = Coordinate::new(-33.5, 151.2).expect("valid");
        assert_eq!(c.latitude(), -33.5);
        assert_eq!(c.longitude(), 151.2);
    }

    #[test]
    fn test_coordinate_bounds_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinate_out_of_range() {
        assert!(matches!(
            Coordinate::new(90.1, 0.0),
            Err(RoutingError::InvalidCoordinate { .. })
        ));
        assert!(Coordinate::new(0.0, -180.5).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse() {
        let c = Coordinate::parse(" 33.320 , 130.930 ").expect("valid");
        assert_eq!(c, Coordinate::new(33.320, 130.930).expect("valid"));
        let c: Coordinate = "35.0,139.0".parse().expect("valid");
        assert_eq!(c.longitude(), 139.0);
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            Coordinate::parse("tokyo"),
            Err(RoutingError::ParseCoordinate { .. })
        ));
        assert!(matches!(
            Coordinate::parse("35.0,east"),
            Err(RoutingError::ParseCoordinate { .. })
        ));
        assert!(matches!(
            Coordinate::parse("135.0,35.0"),
            Err(RoutingError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let c = Coordinate::new(33.324, 130.932).expect("valid");
        assert_eq!(c.to_string(), "33.324,130.932");
        assert_eq!(Coordinate::parse(&c.to_string()).expect("valid"), c);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Coordinate =
            serde_json::from_str(r#"{"latitude":1.0,"longitude":2.0}"#).expect("valid");
        assert_eq!(ok.latitude(), 1.0);
        let bad = serde_json::from_str::<Coordinate>(r#"{"latitude":100.0,"longitude":2.0}"#);
        assert!(bad.is_err());
    }
}
