//! Cost evaluation for route sets.
//!
//! - [`CostWeights`] — weights for distance, fuel, and the arc penalty term
//! - [`CostEvaluator`] — sums weighted arc costs across every route

mod cost;

pub use cost::{CostEvaluator, CostWeights};
