//! Exhaustive-permutation orderer.
//!
//! # Algorithm
//!
//! Enumerate every permutation of the destinations and keep the one with the
//! smallest open-path distance from the start (no return leg). Permutations
//! are generated in lexicographic order of input indices; only a strictly
//! shorter total replaces the incumbent, so the first minimal order wins.
//!
//! # Complexity
//!
//! O(n · n!), capped at [`MAX_EXHAUSTIVE_SPOTS`] destinations (120 orders).

use itertools::Itertools;
use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::evaluation::{RouteEvaluator, TimePolicy};
use crate::models::{Coordinate, Route, Spot, Travel};

/// Hard cap on the number of destinations the exhaustive orderer accepts.
pub const MAX_EXHAUSTIVE_SPOTS: usize = 5;

/// Finds the shortest visiting order by trying every permutation.
///
/// Time totals count travel only. Returns an empty route for no spots and
/// [`RoutingError::TooManyDestinations`] above [`MAX_EXHAUSTIVE_SPOTS`].
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Spot, TravelMode};
/// use spot_routing::ordering::exhaustive;
///
/// let start = Coordinate::new(0.0, 0.0).unwrap();
/// let spots = vec![
///     Spot::new("far", Coordinate::new(0.0, 0.03).unwrap()),
///     Spot::new("near", Coordinate::new(0.0, 0.01).unwrap()),
///     Spot::new("mid", Coordinate::new(0.0, 0.02).unwrap()),
/// ];
/// let route = exhaustive(start, &spots, TravelMode::Walking).unwrap();
/// assert_eq!(route.spot_names(), vec!["near", "mid", "far"]);
/// ```
pub fn exhaustive(start: Coordinate, spots: &[Spot], travel: impl Into<Travel>) -> Result<Route> {
    exhaustive_capped(start, spots, travel, MAX_EXHAUSTIVE_SPOTS)
}

/// Like [`exhaustive`] with a lower cap. `max_spots` above
/// [`MAX_EXHAUSTIVE_SPOTS`] is clamped down to it.
pub fn exhaustive_capped(
    start: Coordinate,
    spots: &[Spot],
    travel: impl Into<Travel>,
    max_spots: usize,
) -> Result<Route> {
    let travel = travel.into();
    let max = max_spots.min(MAX_EXHAUSTIVE_SPOTS);
    if spots.len() > max {
        return Err(RoutingError::TooManyDestinations {
            count: spots.len(),
            max,
        });
    }
    if spots.is_empty() {
        return Ok(Route::empty(start, travel.mode));
    }

    let distances = DistanceMatrix::from_start_and_spots(start, spots);
    let evaluator = RouteEvaluator::new(
        start,
        spots,
        &distances,
        travel.mode,
        TimePolicy::travel_only(travel),
    );

    let mut best: Option<(Vec<usize>, f64)> = None;
    for order in (0..spots.len()).permutations(spots.len()) {
        let d = evaluator.path_distance(&order);
        trace!(?order, distance_km = d, "permutation");
        if best.as_ref().map_or(true, |(_, best_d)| d < *best_d) {
            best = Some((order, d));
        }
    }

    let order = best.map(|(order, _)| order).unwrap_or_default();
    let route = evaluator.build_route(&order);
    debug!(
        spots = spots.len(),
        ?order,
        total_km = route.total_distance_km(),
        "exhaustive ordering done"
    );
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TravelMode;
    use proptest::prelude::*;

    fn at(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid")
    }

    fn spots_at(points: &[(f64, f64)]) -> Vec<Spot> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| Spot::new(format!("s{i}"), at(lat, lon)))
            .collect()
    }

    #[test]
    fn test_exhaustive_empty() {
        let route = exhaustive(at(33.32, 130.93), &[], TravelMode::Walking).expect("ok");
        assert!(route.is_empty());
        assert_eq!(route.total_distance_km(), 0.0);
        assert_eq!(route.total_minutes(), 0.0);
    }

    #[test]
    fn test_exhaustive_two_destinations_picks_shorter() {
        let start = at(33.320, 130.930);
        let spots = spots_at(&[(33.322, 130.926), (33.324, 130.932)]);
        let route = exhaustive(start, &spots, TravelMode::Walking).expect("ok");

        let dm = DistanceMatrix::from_start_and_spots(start, &spots);
        let d01 = dm.get(0, 1) + dm.get(1, 2);
        let d10 = dm.get(0, 2) + dm.get(2, 1);
        let expected = if d01 <= d10 { vec![0, 1] } else { vec![1, 0] };
        assert_eq!(route.spot_indices(), expected);
        assert!((route.total_distance_km() - d01.min(d10)).abs() < 1e-12);

        let again = exhaustive(start, &spots, TravelMode::Walking).expect("ok");
        assert_eq!(again, route);
    }

    #[test]
    fn test_exhaustive_beats_greedy_trap() {
        // Nearest-first would go east to 0.01 then all the way west;
        // the optimum goes west first and sweeps east.
        let start = at(0.0, 0.0);
        let spots = spots_at(&[(0.0, 0.01), (0.0, -0.011), (0.0, 0.05)]);
        let route = exhaustive(start, &spots, TravelMode::Walking).expect("ok");
        assert_eq!(route.spot_indices(), vec![1, 0, 2]);
    }

    #[test]
    fn test_exhaustive_tie_takes_first_permutation() {
        // Two identical spots: every order has the same length.
        let spots = spots_at(&[(0.0, 0.01), (0.0, 0.01)]);
        let route = exhaustive(at(0.0, 0.0), &spots, TravelMode::Walking).expect("ok");
        assert_eq!(route.spot_indices(), vec![0, 1]);
    }

    #[test]
    fn test_exhaustive_rejects_six() {
        let spots = spots_at(&[(0.0, 0.1), (0.0, 0.2), (0.0, 0.3), (0.0, 0.4), (0.0, 0.5), (0.0, 0.6)]);
        let err = exhaustive(at(0.0, 0.0), &spots, TravelMode::Walking).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::TooManyDestinations { count: 6, max: 5 }
        ));
    }

    #[test]
    fn test_exhaustive_capped_lowers_and_clamps() {
        let spots = spots_at(&[(0.0, 0.1), (0.0, 0.2), (0.0, 0.3)]);
        assert!(matches!(
            exhaustive_capped(at(0.0, 0.0), &spots, TravelMode::Walking, 2),
            Err(RoutingError::TooManyDestinations { count: 3, max: 2 })
        ));
        let six = spots_at(&[(0.0, 0.1), (0.0, 0.2), (0.0, 0.3), (0.0, 0.4), (0.0, 0.5), (0.0, 0.6)]);
        assert!(matches!(
            exhaustive_capped(at(0.0, 0.0), &six, TravelMode::Walking, 100),
            Err(RoutingError::TooManyDestinations { max: 5, .. })
        ));
    }

    #[test]
    fn test_exhaustive_time_is_travel_only() {
        let spots = vec![Spot::new("a", at(0.0, 0.01))
            .with_wait_minutes(99.0)
            .expect("valid")];
        let route = exhaustive(at(0.0, 0.0), &spots, TravelMode::Walking).expect("ok");
        let expected = route.total_distance_km() / 4.0 * 60.0;
        assert!((route.total_minutes() - expected).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_exhaustive_is_minimal(
            points in prop::collection::vec((-0.5f64..0.5, -0.5f64..0.5), 1..=5)
        ) {
            let start = at(35.0, 139.0);
            let spots: Vec<Spot> = points
                .iter()
                .enumerate()
                .map(|(i, &(dlat, dlon))| Spot::new(format!("s{i}"), at(35.0 + dlat, 139.0 + dlon)))
                .collect();
            let route = exhaustive(start, &spots, TravelMode::Driving).expect("ok");
            let dm = DistanceMatrix::from_start_and_spots(start, &spots);
            let ev = RouteEvaluator::new(
                start, &spots, &dm, TravelMode::Driving, TimePolicy::travel_only(TravelMode::Driving),
            );
            prop_assert_eq!(route.len(), spots.len());
            for order in (0..spots.len()).permutations(spots.len()) {
                prop_assert!(route.total_distance_km() <= ev.path_distance(&order) + 1e-9);
            }
        }
    }
}
