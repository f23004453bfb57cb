//! Greedy nearest-neighbor orderer.
//!
//! Starting from the current position, always move to the closest spot not
//! yet visited. Ties go to the spot that comes first in the input list.
//!
//! # Complexity
//!
//! O(n²) where n = number of spots.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::evaluation::{RouteEvaluator, TimePolicy};
use crate::models::{Coordinate, Route, Spot, Travel};

/// Orders spots by repeatedly visiting the nearest unvisited one.
///
/// Time totals count travel only; the disaster-navigation use passes
/// [`TravelMode::Walking`](crate::models::TravelMode::Walking) (4 km/h).
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Spot, TravelMode};
/// use spot_routing::ordering::nearest_neighbor;
///
/// let start = Coordinate::new(0.0, 0.0).unwrap();
/// let spots = vec![
///     Spot::new("shelter C", Coordinate::new(0.0, 0.03).unwrap()),
///     Spot::new("shelter A", Coordinate::new(0.0, 0.01).unwrap()),
///     Spot::new("shelter B", Coordinate::new(0.0, 0.02).unwrap()),
/// ];
/// let route = nearest_neighbor(start, &spots, TravelMode::Walking);
/// assert_eq!(route.spot_names(), vec!["shelter A", "shelter B", "shelter C"]);
/// ```
pub fn nearest_neighbor(start: Coordinate, spots: &[Spot], travel: impl Into<Travel>) -> Route {
    let travel = travel.into();
    if spots.is_empty() {
        return Route::empty(start, travel.mode);
    }

    let distances = DistanceMatrix::from_start_and_spots(start, spots);
    let evaluator = RouteEvaluator::new(
        start,
        spots,
        &distances,
        travel.mode,
        TimePolicy::travel_only(travel),
    );

    // Matrix rows of unvisited spots, kept in input order.
    let mut unvisited: Vec<usize> = (1..=spots.len()).collect();
    let mut order = Vec::with_capacity(spots.len());
    let mut current = 0;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        debug!(
            spot = spots[next - 1].name(),
            distance_km = distances.get(current, next),
            "nearest neighbor step"
        );
        unvisited.retain(|&row| row != next);
        order.push(next - 1);
        current = next;
    }

    evaluator.build_route(&order)
}
