//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{exhaustive_capped, nearest_neighbor, rank_score, MAX_EXHAUSTIVE_SPOTS};
use crate::error::{Result, RoutingError};
use crate::models::{Coordinate, Route, Spot, Travel};

/// Which orderer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Try every permutation (at most five spots).
    Exhaustive,
    /// Always go to the nearest unvisited spot.
    #[default]
    NearestNeighbor,
    /// Combine distance rank and wait-time rank.
    RankScore,
}

impl Strategy {
    /// Runs the selected orderer with the default exhaustive cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use spot_routing::models::{Coordinate, Spot, TravelMode};
    /// use spot_routing::ordering::Strategy;
    ///
    /// let start = Coordinate::new(0.0, 0.0).unwrap();
    /// let spots = vec![Spot::new("only", Coordinate::new(0.0, 0.01).unwrap())];
    /// for strategy in [Strategy::Exhaustive, Strategy::NearestNeighbor, Strategy::RankScore] {
    ///     let route = strategy.order(start, &spots, TravelMode::Walking).unwrap();
    ///     assert_eq!(route.spot_names(), vec!["only"]);
    /// }
    /// ```
    pub fn order(self, start: Coordinate, spots: &[Spot], travel: impl Into<Travel>) -> Result<Route> {
        self.order_with_cap(start, spots, travel, MAX_EXHAUSTIVE_SPOTS)
    }

    /// Runs the selected orderer; `max_exhaustive` only affects [`Strategy::Exhaustive`].
    pub fn order_with_cap(
        self,
        start: Coordinate,
        spots: &[Spot],
        travel: impl Into<Travel>,
        max_exhaustive: usize,
    ) -> Result<Route> {
        match self {
            Strategy::Exhaustive => exhaustive_capped(start, spots, travel, max_exhaustive),
            Strategy::NearestNeighbor => Ok(nearest_neighbor(start, spots, travel)),
            Strategy::RankScore => Ok(rank_score(start, spots, travel)),
        }
    }

    /// Short name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::NearestNeighbor => "nearest",
            Strategy::RankScore => "rank",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "brute_force" | "brute-force" => Ok(Strategy::Exhaustive),
            "nearest" | "nearest_neighbor" | "nearest-neighbor" => Ok(Strategy::NearestNeighbor),
            "rank" | "rank_score" | "rank-score" => Ok(Strategy::RankScore),
            _ => Err(RoutingError::UnknownVariant {
                kind: "strategy",
                name: s.to_string(),
            }),
        }
    }
}
