//! Domain model types for spot routing.
//!
//! Coordinates with range validation, named spots with optional wait and
//! visit durations, the travel mode that picks a speed constant, and routes
//! as ordered sequences of legs with cumulative totals.

mod coordinate;
mod route;
mod spot;
mod travel_mode;

pub use coordinate::Coordinate;
pub use route::{Leg, Route};
pub use spot::{ensure_unique_names, Spot};
pub use travel_mode::{Travel, TravelMode, DRIVING_SPEED_KMH, WALKING_SPEED_KMH};
