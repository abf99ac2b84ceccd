//! Domain model types for multi-depot fleet routing.
//!
//! Provides 1-based node identifiers, depot-anchored routes, and the route
//! set that the annealing optimizer perturbs.

mod node;
mod route;
mod route_set;

pub use node::NodeId;
pub use route::Route;
pub use route_set::{build_initial_routes, RouteSet};
