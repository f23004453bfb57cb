//! A single user's planning session.

use tracing::debug;
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::error::{Result, RoutingError};
use crate::models::{Coordinate, Route, Spot, TravelMode};
use crate::ordering::Strategy;

/// Explicit per-user planning state: where the user is, which spots they
/// picked, and how the route should be ordered.
///
/// # Examples
///
/// ```
/// use spot_routing::config::PlannerConfig;
/// use spot_routing::models::{Coordinate, Spot};
/// use spot_routing::session::PlannerSession;
///
/// let config = PlannerConfig::default();
/// let mut session = PlannerSession::new(Coordinate::new(0.0, 0.0).unwrap(), &config);
/// session.add_spot(Spot::new("B", Coordinate::new(0.0, 0.02).unwrap())).unwrap();
/// session.add_spot(Spot::new("A", Coordinate::new(0.0, 0.01).unwrap())).unwrap();
/// let route = session.plan(&config).unwrap();
/// assert_eq!(route.spot_names(), vec!["A", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct PlannerSession {
    id: Uuid,
    position: Coordinate,
    spots: Vec<Spot>,
    mode: TravelMode,
    strategy: Strategy,
}

impl PlannerSession {
    /// Starts a session at `position` with the configured default mode and strategy.
    pub fn new(position: Coordinate, config: &PlannerConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            spots: Vec::new(),
            mode: config.default_mode,
            strategy: config.default_strategy,
        }
    }

    /// Session id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current position.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Selected spots in selection order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Travel mode.
    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Ordering strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Moves the current position (e.g. after a new GPS fix).
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Changes the travel mode.
    pub fn set_mode(&mut self, mode: TravelMode) {
        self.mode = mode;
    }

    /// Changes the ordering strategy.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Adds a spot; names must be unique within the session.
    pub fn add_spot(&mut self, spot: Spot) -> Result<()> {
        if self.spots.iter().any(|s| s.name() == spot.name()) {
            return Err(RoutingError::DuplicateSpot {
                name: spot.name().to_string(),
            });
        }
        self.spots.push(spot);
        Ok(())
    }

    /// Removes the spot with the given name, returning it if present.
    pub fn remove_spot(&mut self, name: &str) -> Option<Spot> {
        let pos = self.spots.iter().position(|s| s.name() == name)?;
        Some(self.spots.remove(pos))
    }

    /// Drops every selected spot.
    pub fn clear_spots(&mut self) {
        self.spots.clear();
    }

    /// Orders the selected spots from the current position.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn plan(&self, config: &PlannerConfig) -> Result<Route> {
        debug!(
            session = %self.id,
            strategy = %self.strategy,
            mode = %self.mode,
            spots = self.spots.len(),
            "planning route"
        );
        self.strategy.order_with_cap(
            self.position,
            &self.spots,
            config.travel(self.mode),
            config.exhaustive_cap(),
        )
    }
}
