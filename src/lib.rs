//! # u-route-anneal
//!
//! Multi-depot fleet routing by simulated annealing. Customers are assigned
//! to vehicle routes that start and end at fixed depots, minimizing a
//! weighted sum of distance and fuel cost over every traversed arc.
//!
//! ## Modules
//!
//! - [`models`] — Node identifiers, routes, route sets, initial partitioning
//! - [`distance`] — Dense distance and fuel cost matrices
//! - [`evaluation`] — Weighted arc and route-set cost
//! - [`annealing`] — Neighbor move, Metropolis acceptance, cooling schedule
//! - [`render`] — Named, human-readable route output
//! - [`error`] — Input validation errors
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use u_route_anneal::annealing::{optimize, AnnealingConfig};
//! use u_route_anneal::distance::CostMatrix;
//! use u_route_anneal::models::{build_initial_routes, NodeId};
//!
//! let size = 8;
//! let mut dist = CostMatrix::new(size);
//! let mut fuel = CostMatrix::new(size);
//! for i in 0..size {
//!     for j in 0..size {
//!         let gap = (i as f64 - j as f64).abs();
//!         dist.set(i, j, gap);
//!         fuel.set(i, j, 0.2 * gap);
//!     }
//! }
//!
//! let depots: Vec<NodeId> = [1, 8].into_iter().filter_map(NodeId::new).collect();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let routes = build_initial_routes(2, &depots, size, &mut rng).expect("valid input");
//!
//! let config = AnnealingConfig::default().with_min_temperature(1.0).with_seed(42);
//! let (best, cost) = optimize(routes, &dist, &fuel, &config).expect("valid input");
//! assert_eq!(best.num_customers(), 6);
//! assert!(cost > 0.0);
//! ```

pub mod annealing;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod render;

pub use error::RoutingError;
