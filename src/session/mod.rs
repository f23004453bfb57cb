//! Explicit per-user planning sessions and their lifecycle.

mod planner;
mod store;

pub use planner::PlannerSession;
pub use store::SessionStore;
