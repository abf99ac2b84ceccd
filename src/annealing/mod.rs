//! Simulated annealing over route sets.
//!
//! The optimizer repeatedly swaps one customer between two routes and keeps
//! the change according to the Metropolis criterion. Temperature decays
//! geometrically after each level of inner iterations, and decays faster
//! when too many accepted moves in a row failed to improve the best cost.
//!
//! - [`AnnealingConfig`] — schedule, weights, and seed
//! - [`swap_neighbor`] — the single cross-route swap move
//! - [`metropolis_probability`] / [`accept`] — acceptance test
//! - [`SolverState`] — current and best solutions, temperature, stagnation
//! - [`AnnealingRunner`] / [`optimize`] — the control loop
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod acceptance;
mod config;
mod neighbor;
mod runner;
mod state;

pub use acceptance::{accept, metropolis_probability};
pub use config::AnnealingConfig;
pub use neighbor::{swap_neighbor, SwapMove};
pub use runner::{optimize, AnnealingResult, AnnealingRunner};
pub use state::SolverState;
