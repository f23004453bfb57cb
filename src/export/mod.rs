//! Outputs derived from a computed route.

mod deep_link;

pub use deep_link::{directions_url, DEFAULT_DIRECTIONS_BASE};
