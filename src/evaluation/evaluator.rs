//! Route evaluator that computes legs and cumulative distance/time.

use crate::distance::DistanceMatrix;
use crate::models::{Coordinate, Leg, Route, Spot, Travel, TravelMode};

/// Which time components count toward a route's total time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimePolicy {
    /// Only travel time at the given speed.
    TravelOnly {
        /// Speed in km/h.
        speed_kmh: f64,
    },
    /// Travel time plus each spot's wait time and visit duration.
    TravelWaitAndVisit {
        /// Speed in km/h.
        speed_kmh: f64,
    },
}

impl TimePolicy {
    /// Travel-only policy. A bare [`TravelMode`] uses its default speed.
    pub fn travel_only(travel: impl Into<Travel>) -> Self {
        TimePolicy::TravelOnly {
            speed_kmh: travel.into().speed_kmh,
        }
    }

    /// Travel + wait + visit policy. A bare [`TravelMode`] uses its default speed.
    pub fn with_stays(travel: impl Into<Travel>) -> Self {
        TimePolicy::TravelWaitAndVisit {
            speed_kmh: travel.into().speed_kmh,
        }
    }

    /// Speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        match *self {
            TimePolicy::TravelOnly { speed_kmh } | TimePolicy::TravelWaitAndVisit { speed_kmh } => {
                speed_kmh
            }
        }
    }

    /// Minutes needed to cover `distance_km`.
    pub fn travel_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh() * 60.0
    }

    fn counts_stays(&self) -> bool {
        matches!(self, TimePolicy::TravelWaitAndVisit { .. })
    }
}

/// Builds [`Route`]s from visiting orders over a start position and spot list.
///
/// Spot indices refer to `spots`; the matrix must have been built with
/// [`DistanceMatrix::from_start_and_spots`] so that spot `i` is row `i + 1`.
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Spot, TravelMode};
/// use spot_routing::distance::DistanceMatrix;
/// use spot_routing::evaluation::{RouteEvaluator, TimePolicy};
///
/// let start = Coordinate::new(0.0, 0.0).unwrap();
/// let spots = vec![
///     Spot::new("A", Coordinate::new(0.0, 0.01).unwrap()),
///     Spot::new("B", Coordinate::new(0.0, 0.02).unwrap()),
/// ];
/// let dm = DistanceMatrix::from_start_and_spots(start, &spots);
/// let policy = TimePolicy::travel_only(TravelMode::Walking);
/// let evaluator = RouteEvaluator::new(start, &spots, &dm, TravelMode::Walking, policy);
///
/// let route = evaluator.build_route(&[0, 1]);
/// assert_eq!(route.spot_names(), vec!["A", "B"]);
/// assert!((route.total_distance_km() - dm.get(0, 2)).abs() < 1e-9);
/// ```
pub struct RouteEvaluator<'a> {
    start: Coordinate,
    spots: &'a [Spot],
    distances: &'a DistanceMatrix,
    mode: TravelMode,
    policy: TimePolicy,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(
        start: Coordinate,
        spots: &'a [Spot],
        distances: &'a DistanceMatrix,
        mode: TravelMode,
        policy: TimePolicy,
    ) -> Self {
        Self {
            start,
            spots,
            distances,
            mode,
            policy,
        }
    }

    /// Time policy in use.
    pub fn policy(&self) -> TimePolicy {
        self.policy
    }

    /// Distance between two matrix rows (0 = start, `i + 1` = spot `i`).
    pub fn leg_distance(&self, from_row: usize, to_spot: usize) -> f64 {
        self.distances.get(from_row, to_spot + 1)
    }

    /// Total distance of visiting `order` from the start, without return.
    pub fn path_distance(&self, order: &[usize]) -> f64 {
        let mut prev = 0;
        let mut total = 0.0;
        for &i in order {
            total += self.distances.get(prev, i + 1);
            prev = i + 1;
        }
        total
    }

    /// Builds a route from spot indices in visiting order.
    pub fn build_route(&self, order: &[usize]) -> Route {
        let mut route = Route::empty(self.start, self.mode);
        let mut prev = 0;
        let mut cumulative_km = 0.0;
        let mut cumulative_minutes = 0.0;

        for &i in order {
            let spot = &self.spots[i];
            let distance_km = self.distances.get(prev, i + 1);
            let travel_minutes = self.policy.travel_minutes(distance_km);
            let (wait_minutes, visit_minutes) = if self.policy.counts_stays() {
                (spot.wait_minutes(), spot.visit_minutes())
            } else {
                (0.0, 0.0)
            };

            cumulative_km += distance_km;
            cumulative_minutes += travel_minutes + wait_minutes + visit_minutes;

            route.push_leg(Leg {
                spot_index: i,
                spot_name: spot.name().to_string(),
                coordinate: spot.coordinate(),
                distance_km,
                travel_minutes,
                wait_minutes,
                visit_minutes,
                cumulative_km,
                cumulative_minutes,
            });
            prev = i + 1;
        }

        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid")
    }

    fn setup() -> (Coordinate, Vec<Spot>, DistanceMatrix) {
        let start = at(0.0, 0.0);
        let spots = vec![
            Spot::new("A", at(0.0, 0.1))
                .with_wait_minutes(10.0)
                .and_then(|s| s.with_visit_minutes(30.0))
                .expect("valid"),
            Spot::new("B", at(0.0, 0.2)).with_wait_minutes(5.0).expect("valid"),
        ];
        let dm = DistanceMatrix::from_start_and_spots(start, &spots);
        (start, spots, dm)
    }

    #[test]
    fn test_travel_minutes() {
        let walking = TimePolicy::travel_only(TravelMode::Walking);
        assert!((walking.travel_minutes(4.0) - 60.0).abs() < 1e-12);
        let driving = TimePolicy::with_stays(TravelMode::Driving);
        assert!((driving.travel_minutes(10.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_route_travel_only() {
        let (start, spots, dm) = setup();
        let policy = TimePolicy::travel_only(TravelMode::Walking);
        let ev = RouteEvaluator::new(start, &spots, &dm, TravelMode::Walking, policy);
        let route = ev.build_route(&[0, 1]);
        let expected_km = dm.get(0, 1) + dm.get(1, 2);
        assert!((route.total_distance_km() - expected_km).abs() < 1e-9);
        assert!((route.total_minutes() - expected_km / 4.0 * 60.0).abs() < 1e-9);
        assert!(route.legs().iter().all(|l| l.wait_minutes == 0.0));
    }

    #[test]
    fn test_build_route_with_stays() {
        let (start, spots, dm) = setup();
        let policy = TimePolicy::with_stays(TravelMode::Driving);
        let ev = RouteEvaluator::new(start, &spots, &dm, TravelMode::Driving, policy);
        let route = ev.build_route(&[0, 1]);
        let km = dm.get(0, 1) + dm.get(1, 2);
        let expected = km / 40.0 * 60.0 + 10.0 + 30.0 + 5.0;
        assert!((route.total_minutes() - expected).abs() < 1e-9);
        assert_eq!(route.legs()[0].visit_minutes, 30.0);
        assert_eq!(route.mode(), TravelMode::Driving);
    }

    #[test]
    fn test_cumulative_fields_accumulate() {
        let (start, spots, dm) = setup();
        let policy = TimePolicy::with_stays(TravelMode::Walking);
        let ev = RouteEvaluator::new(start, &spots, &dm, TravelMode::Walking, policy);
        let route = ev.build_route(&[1, 0]);
        let legs = route.legs();
        assert!((legs[1].cumulative_km - (legs[0].distance_km + legs[1].distance_km)).abs() < 1e-12);
        assert!(legs[1].cumulative_minutes > legs[0].cumulative_minutes);
    }

    #[test]
    fn test_path_distance_matches_route() {
        let (start, spots, dm) = setup();
        let policy = TimePolicy::travel_only(TravelMode::Walking);
        let ev = RouteEvaluator::new(start, &spots, &dm, TravelMode::Walking, policy);
        for order in [[0, 1], [1, 0]] {
            let route = ev.build_route(&order);
            assert!((ev.path_distance(&order) - route.total_distance_km()).abs() < 1e-12);
        }
        assert_eq!(ev.path_distance(&[]), 0.0);
    }

    #[test]
    fn test_empty_order() {
        let (start, spots, dm) = setup();
        let policy = TimePolicy::travel_only(TravelMode::Walking);
        let ev = RouteEvaluator::new(start, &spots, &dm, TravelMode::Walking, policy);
        let route = ev.build_route(&[]);
        assert!(route.is_empty());
        assert_eq!(route.total_distance_km(), 0.0);
        assert_eq!(route.total_minutes(), 0.0);
    }
}
