//! Route and leg types.

use serde::Serialize;

use super::{Coordinate, TravelMode};

/// One step of a route: travel from the previous position to a spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Index of the spot in the input list.
    pub spot_index: usize,
    /// Spot name.
    pub spot_name: String,
    /// Spot location.
    pub coordinate: Coordinate,
    /// Distance of this leg in kilometers.
    pub distance_km: f64,
    /// Travel time of this leg in minutes.
    pub travel_minutes: f64,
    /// Wait time counted at this spot (zero when the policy ignores waits).
    pub wait_minutes: f64,
    /// Visit duration counted at this spot (zero when the policy ignores visits).
    pub visit_minutes: f64,
    /// Distance from the start up to this spot.
    pub cumulative_km: f64,
    /// Time from the start until leaving this spot.
    pub cumulative_minutes: f64,
}

/// An ordered visiting sequence from a start position, with derived totals.
///
/// The route ends at its last spot (no return leg). An empty route has zero
/// distance and zero time and is what every orderer returns for empty input.
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Route, TravelMode};
///
/// let start = Coordinate::new(33.32, 130.93).unwrap();
/// let route = Route::empty(start, TravelMode::Walking);
/// assert!(route.is_empty());
/// assert_eq!(route.total_distance_km(), 0.0);
/// assert_eq!(route.total_minutes(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    start: Coordinate,
    mode: TravelMode,
    legs: Vec<Leg>,
    total_distance_km: f64,
    total_minutes: f64,
}

impl Route {
    /// Creates a route with no legs.
    pub fn empty(start: Coordinate, mode: TravelMode) -> Self {
        Self {
            start,
            mode,
            legs: Vec::new(),
            total_distance_km: 0.0,
            total_minutes: 0.0,
        }
    }

    /// Appends a leg and updates totals from its cumulative fields.
    pub fn push_leg(&mut self, leg: Leg) {
        self.total_distance_km = leg.cumulative_km;
        self.total_minutes = leg.cumulative_minutes;
        self.legs.push(leg);
    }

    /// Start position.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Travel mode used for the time totals.
    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Legs in visiting order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Input indices of the spots in visiting order.
    pub fn spot_indices(&self) -> Vec<usize> {
        self.legs.iter().map(|l| l.spot_index).collect()
    }

    /// Spot names in visiting order.
    pub fn spot_names(&self) -> Vec<&str> {
        self.legs.iter().map(|l| l.spot_name.as_str()).collect()
    }

    /// Stop coordinates in visiting order (start excluded).
    pub fn stop_coordinates(&self) -> Vec<Coordinate> {
        self.legs.iter().map(|l| l.coordinate).collect()
    }

    /// Total distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Total time in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(index: usize, name: &str, cumulative_km: f64, cumulative_minutes: f64) -> Leg {
        Leg {
            spot_index: index,
            spot_name: name.to_string(),
            coordinate: Coordinate::new(0.0, index as f64).expect("valid"),
            distance_km: 1.0,
            travel_minutes: 15.0,
            wait_minutes: 0.0,
            visit_minutes: 0.0,
            cumulative_km,
            cumulative_minutes,
        }
    }

    #[test]
    fn test_route_push_leg() {
        let start = Coordinate::new(0.0, 0.0).expect("valid");
        let mut r = Route::empty(start, TravelMode::Walking);
        r.push_leg(leg(2, "B", 1.0, 15.0));
        r.push_leg(leg(0, "A", 2.0, 30.0));
        assert_eq!(r.len(), 2);
        assert_eq!(r.spot_indices(), vec![2, 0]);
        assert_eq!(r.spot_names(), vec!["B", "A"]);
        assert_eq!(r.total_distance_km(), 2.0);
        assert_eq!(r.total_minutes(), 30.0);
        assert_eq!(r.stop_coordinates().len(), 2);
    }

    #[test]
    fn test_route_serializes() {
        let start = Coordinate::new(1.0, 2.0).expect("valid");
        let r = Route::empty(start, TravelMode::Driving);
        let json = serde_json::to_value(&r).expect("serializes");
        assert_eq!(json["mode"], "driving");
        assert_eq!(json["start"]["latitude"], 1.0);
        assert_eq!(json["legs"].as_array().map(Vec::len), Some(0));
    }
}
