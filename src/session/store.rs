//! Session lifecycle.

use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use super::PlannerSession;
use crate::config::PlannerConfig;
use crate::error::{Result, RoutingError};
use crate::models::Coordinate;

/// Owns live planning sessions keyed by id.
///
/// The store is a plain value: callers own it and pass it by reference to
/// whatever handles user requests.
///
/// # Examples
///
/// ```
/// use spot_routing::config::PlannerConfig;
/// use spot_routing::models::Coordinate;
/// use spot_routing::session::SessionStore;
///
/// let mut store = SessionStore::new(PlannerConfig::default());
/// let id = store.create(Coordinate::new(33.32, 130.93).unwrap());
/// assert!(store.get(id).is_ok());
/// store.destroy(id).unwrap();
/// assert!(store.get(id).is_err());
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    config: PlannerConfig,
    sessions: HashMap<Uuid, PlannerSession>,
}

impl SessionStore {
    /// Creates an empty store whose sessions use `config`.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    /// Configuration shared by all sessions.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Opens a new session at `position` and returns its id.
    pub fn create(&mut self, position: Coordinate) -> Uuid {
        let session = PlannerSession::new(position, &self.config);
        let id = session.id();
        self.sessions.insert(id, session);
        info!(session = %id, "session created");
        id
    }

    /// Looks up a session.
    pub fn get(&self, id: Uuid) -> Result<&PlannerSession> {
        self.sessions.get(&id).ok_or(RoutingError::SessionNotFound(id))
    }

    /// Looks up a session for modification.
    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut PlannerSession> {
        self.sessions
            .get_mut(&id)
            .ok_or(RoutingError::SessionNotFound(id))
    }

    /// Plans the route for a session with the store's configuration.
    pub fn plan(&self, id: Uuid) -> Result<crate::models::Route> {
        self.get(id)?.plan(&self.config)
    }

    /// Closes a session, returning its final state.
    pub fn destroy(&mut self, id: Uuid) -> Result<PlannerSession> {
        let session = self
            .sessions
            .remove(&id)
            .ok_or(RoutingError::SessionNotFound(id))?;
        info!(session = %id, "session destroyed");
        Ok(session)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
