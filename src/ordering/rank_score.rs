//! Greedy rank-score orderer.
//!
//! # Algorithm
//!
//! At each step, rank the remaining spots twice: by distance from the current
//! position (1 = closest) and by wait time (1 = shortest). The spot with the
//! smallest rank sum is visited next. Equal values share the lowest rank of
//! their group (competition ranking: 1, 1, 3), so a criterion on which every
//! spot is equal leaves the order to the other one. Equal scores go to the
//! spot that comes first in the remaining list.
//!
//! Totals count travel time, wait time, and visit duration.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of spots.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::evaluation::{RouteEvaluator, TimePolicy};
use crate::models::{Coordinate, Route, Spot, Travel};

/// Orders spots by the combined distance rank and wait-time rank.
///
/// The tourism use passes
/// [`TravelMode::Driving`](crate::models::TravelMode::Driving) (40 km/h).
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Spot, TravelMode};
/// use spot_routing::ordering::rank_score;
///
/// let start = Coordinate::new(0.0, 0.0).unwrap();
/// let spots = vec![
///     // Closest, but a long queue.
///     Spot::new("aquarium", Coordinate::new(0.0, 0.01).unwrap())
///         .with_wait_minutes(90.0).unwrap(),
///     Spot::new("museum", Coordinate::new(0.0, 0.02).unwrap())
///         .with_wait_minutes(5.0).unwrap(),
///     Spot::new("tower", Coordinate::new(0.0, 0.03).unwrap())
///         .with_wait_minutes(30.0).unwrap(),
/// ];
/// let route = rank_score(start, &spots, TravelMode::Driving);
/// assert_eq!(route.spot_names()[0], "museum");
/// ```
pub fn rank_score(start: Coordinate, spots: &[Spot], travel: impl Into<Travel>) -> Route {
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
        TimePolicy::with_stays(travel),
    );

    let mut unvisited: Vec<usize> = (0..spots.len()).collect();
    let mut order = Vec::with_capacity(spots.len());
    let mut current_row = 0;

    while !unvisited.is_empty() {
        let dists: Vec<f64> = unvisited
            .iter()
            .map(|&i| evaluator.leg_distance(current_row, i))
            .collect();
        let waits: Vec<f64> = unvisited.iter().map(|&i| spots[i].wait_minutes()).collect();
        let scores = rank_scores(&dists, &waits);
        trace!(?unvisited, ?scores, "rank scores");

        let pos = min_position(&scores);
        let next = unvisited.remove(pos);
        debug!(
            spot = spots[next].name(),
            score = scores[pos],
            distance_km = dists[pos],
            wait_minutes = waits[pos],
            "rank score step"
        );
        order.push(next);
        current_row = next + 1;
    }

    evaluator.build_route(&order)
}

/// Combined rank scores for candidates with the given distances and waits.
///
/// `distances[k]` and `waits[k]` describe candidate `k`. Each list is ranked
/// ascending from 1, tied values share the lowest rank of their group, and the
/// score is the sum of both ranks.
///
/// # Examples
///
/// ```
/// use spot_routing::ordering::rank_scores;
///
/// // Candidate 0 is nearest but has the longest wait.
/// let scores = rank_scores(&[1.0, 2.0, 3.0], &[30.0, 10.0, 20.0]);
/// assert_eq!(scores, vec![4, 3, 5]);
///
/// // Equal waits carry no preference: distance alone decides.
/// let scores = rank_scores(&[3.0, 1.0, 2.0], &[30.0, 30.0, 30.0]);
/// assert_eq!(scores, vec![4, 2, 3]);
/// ```
pub fn rank_scores(distances: &[f64], waits: &[f64]) -> Vec<usize> {
    let by_distance = ranks(distances);
    let by_wait = ranks(waits);
    by_distance
        .iter()
        .zip(&by_wait)
        .map(|(d, w)| d + w)
        .collect()
}

fn ranks(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
    let mut out = vec![0; values.len()];
    for (pos, &i) in idx.iter().enumerate() {
        out[i] = match pos.checked_sub(1).map(|p| idx[p]) {
            Some(prev) if values[prev] == values[i] => out[prev],
            _ => pos + 1,
        };
    }
    out
}

fn min_position(scores: &[usize]) -> usize {
    let mut best = 0;
    for (k, &s) in scores.iter().enumerate() {
        if s < scores[best] {
            best = k;
        }
    }
    best
}
