//! Route-ordering heuristics.
//!
//! - [`exhaustive`] — Every permutation, shortest open path, at most 5 spots, O(n·n!)
//! - [`nearest_neighbor`] — Greedy nearest unvisited spot, O(n²)
//! - [`rank_score`] — Greedy on distance rank + wait-time rank, O(n² log n)
//!
//! All orderers are pure: they return an empty [`Route`](crate::models::Route)
//! for an empty spot list and never touch shared state. Ties always go to the
//! candidate encountered first (input order, or lexicographic permutation
//! order for [`exhaustive`]).

mod exhaustive;
mod nearest_neighbor;
mod rank_score;
mod strategy;

pub use exhaustive::{exhaustive, exhaustive_capped, MAX_EXHAUSTIVE_SPOTS};
pub use nearest_neighbor::nearest_neighbor;
pub use rank_score::{rank_score, rank_scores};
pub use strategy::Strategy;
