//! # spot-routing
//!
//! Orders a set of named geographic spots into a visiting route from a start
//! position, using great-circle (haversine) distances.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, Spot, TravelMode, Route)
//! - [`distance`] — Haversine distance and distance matrix
//! - [`evaluation`] — Leg and total computation for a visiting order
//! - [`ordering`] — Exhaustive, nearest-neighbor, and rank-score orderers
//! - [`export`] — Directions deep links for a computed route
//! - [`loader`] — Spot lists from CSV
//! - [`session`] — Explicit per-user planning sessions
//! - [`config`] — Planner configuration from TOML
//! - [`error`] — Error type

pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod loader;
pub mod models;
pub mod ordering;
pub mod session;

pub use error::{Result, RoutingError};
