//! Route evaluation: turning a visiting order into legs and totals.

mod evaluator;

pub use evaluator::{RouteEvaluator, TimePolicy};
