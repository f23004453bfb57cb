//! Great-circle distances.
//!
//! Provides the haversine function and a dense distance matrix over a start
//! position and its candidate spots.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
