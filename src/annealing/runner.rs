//! Annealing control loop.

use super::acceptance::accept;
use super::config::AnnealingConfig;
use super::neighbor::swap_neighbor;
use super::state::SolverState;
use crate::distance::CostMatrix;
use crate::error::RoutingError;
use crate::evaluation::CostEvaluator;
use crate::models::RouteSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Result of an annealing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealingResult {
    /// The best route set found.
    pub best: RouteSet,

    /// Cost of the best route set.
    pub best_cost: f64,

    /// Cost of the route set the run started from.
    pub initial_cost: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Number of temperature levels completed.
    pub temperature_levels: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates with a negative cost delta.
    pub improving_moves: usize,

    /// Number of levels that ended with the aggressive cooling factor.
    pub aggressive_coolings: usize,

    /// Best cost after each temperature level, starting with the initial cost.
    pub cost_history: Vec<f64>,
}

impl AnnealingResult {
    /// Splits into the best route set and its cost.
    pub fn into_parts(self) -> (RouteSet, f64) {
        (self.best, self.best_cost)
    }
}

/// Executes the route annealing loop.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs the optimizer with a generator seeded from `config.seed`, or from
    /// fresh entropy when no seed is set.
    pub fn run(
        routes: RouteSet,
        distances: &CostMatrix,
        fuel: &CostMatrix,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult, RoutingError> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(routes, distances, fuel, config, &mut rng)
    }

    /// Runs the optimizer drawing every random value from `rng`.
    pub fn run_with_rng<R: Rng>(
        routes: RouteSet,
        distances: &CostMatrix,
        fuel: &CostMatrix,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<AnnealingResult, RoutingError> {
        Self::run_observed(routes, distances, fuel, config, rng, |_, _| {})
    }

    /// Runs the optimizer, calling `observer` after every iteration with the
    /// candidate just evaluated and the state after the acceptance decision.
    /// An accepted candidate is passed as `state.current()`.
    ///
    /// All input checks happen before the first iteration; once the loop has
    /// started the run always completes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use u_route_anneal::annealing::{AnnealingConfig, AnnealingRunner};
    /// use u_route_anneal::distance::CostMatrix;
    /// use u_route_anneal::models::{build_initial_routes, NodeId};
    ///
    /// let size = 6;
    /// let mut dist = CostMatrix::new(size);
    /// for i in 0..size {
    ///     for j in 0..size {
    ///         dist.set(i, j, (i as f64 - j as f64).abs());
    ///     }
    /// }
    /// let fuel = CostMatrix::new(size);
    /// let depots: Vec<NodeId> = (1..=2).filter_map(NodeId::new).collect();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let routes = build_initial_routes(2, &depots, size, &mut rng).expect("valid");
    ///
    /// let config = AnnealingConfig::default().with_min_temperature(1.0);
    /// let mut worst_current = f64::NEG_INFINITY;
    /// let result = AnnealingRunner::run_observed(routes, &dist, &fuel, &config, &mut rng, |_, state| {
    ///     worst_current = worst_current.max(state.current_cost());
    /// })
    /// .expect("valid input");
    /// assert!(result.best_cost <= worst_current);
    /// ```
    pub fn run_observed<R, F>(
        routes: RouteSet,
        distances: &CostMatrix,
        fuel: &CostMatrix,
        config: &AnnealingConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<AnnealingResult, RoutingError>
    where
        R: Rng,
        F: FnMut(&RouteSet, &SolverState),
    {
        let evaluator = check_inputs(&routes, distances, fuel, config)?;

        let initial_cost = evaluator.total_cost(&routes);
        info!(
            vehicles = routes.num_routes(),
            customers = routes.num_customers(),
            initial_cost,
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            cooling_rate = config.cooling_rate,
            "starting route annealing"
        );

        let mut state = SolverState::new(routes, initial_cost, config.initial_temperature);
        let mut iterations = 0usize;
        let mut levels = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut aggressive_coolings = 0usize;
        let mut cost_history = vec![initial_cost];

        while state.is_running(config.min_temperature) {
            for _ in 0..config.inner_iterations {
                let candidate = swap_neighbor(state.current(), rng);
                let candidate_cost = evaluator.total_cost(&candidate);
                let delta = candidate_cost - state.current_cost();
                if delta < 0.0 {
                    improving_moves += 1;
                }

                iterations += 1;
                if accept(delta, state.temperature(), rng) {
                    accepted_moves += 1;
                    if state.accept(candidate, candidate_cost) {
                        trace!(
                            level = levels,
                            best_cost = candidate_cost,
                            "new best route set"
                        );
                    }
                    observer(state.current(), &state);
                } else {
                    observer(&candidate, &state);
                }
            }

            if state.cool(config) {
                aggressive_coolings += 1;
                debug!(
                    level = levels,
                    temperature = state.temperature(),
                    "stagnation threshold exceeded, cooling aggressively"
                );
            }
            levels += 1;
            cost_history.push(state.best_cost());
            debug!(
                level = levels,
                temperature = state.temperature(),
                best_cost = state.best_cost(),
                "temperature level complete"
            );
        }

        let final_temperature = state.temperature();
        let (best, best_cost) = state.into_best();
        info!(
            best_cost,
            levels, iterations, accepted_moves, "route annealing finished"
        );

        Ok(AnnealingResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            temperature_levels: levels,
            final_temperature,
            accepted_moves,
            improving_moves,
            aggressive_coolings,
            cost_history,
        })
    }
}

/// Optimizes `routes` and returns the best route set with its cost.
///
/// # Examples
///
/// ```
/// use u_route_anneal::annealing::{optimize, AnnealingConfig};
/// use u_route_anneal::distance::CostMatrix;
/// use u_route_anneal::models::{NodeId, Route, RouteSet};
///
/// let dist = CostMatrix::from_rows(vec![
///     vec![0.0, 9.0, 1.0, 9.0],
///     vec![9.0, 0.0, 9.0, 1.0],
///     vec![1.0, 9.0, 0.0, 9.0],
///     vec![9.0, 1.0, 9.0, 0.0],
/// ])
/// .expect("square");
/// let fuel = CostMatrix::new(4);
/// let n = |id| NodeId::new(id).expect("non-zero");
/// // Each customer starts on the far depot's route.
/// let routes = RouteSet::new(vec![
///     Route::with_customers(n(1), [n(4)]),
///     Route::with_customers(n(2), [n(3)]),
/// ]);
///
/// let config = AnnealingConfig::default().with_min_temperature(1.0).with_seed(42);
/// let (best, cost) = optimize(routes, &dist, &fuel, &config).expect("valid input");
/// assert_eq!(best.routes()[0].customers(), &[n(3)]);
/// assert!((cost - 4.4).abs() < 1e-9);
/// ```
pub fn optimize(
    routes: RouteSet,
    distances: &CostMatrix,
    fuel: &CostMatrix,
    config: &AnnealingConfig,
) -> Result<(RouteSet, f64), RoutingError> {
    AnnealingRunner::run(routes, distances, fuel, config).map(AnnealingResult::into_parts)
}

fn check_inputs<'a>(
    routes: &RouteSet,
    distances: &'a CostMatrix,
    fuel: &'a CostMatrix,
    config: &AnnealingConfig,
) -> Result<CostEvaluator<'a>, RoutingError> {
    config.validate()?;
    let evaluator = CostEvaluator::new(distances, fuel, config.weights())?;
    distances.check_entries()?;
    fuel.check_entries()?;

    if !distances.is_symmetric(1e-9) {
        debug!("distance matrix is asymmetric, arc direction matters");
    }

    let size = evaluator.size();
    let vehicles = routes.num_routes();
    if vehicles == 0 || size < vehicles {
        return Err(RoutingError::TooFewNodes {
            nodes: size,
            vehicles,
        });
    }
    if let Some((idx, route)) = routes
        .routes()
        .iter()
        .enumerate()
        .find(|(_, r)| r.nodes().len() < 2)
    {
        return Err(RoutingError::InvalidRoute {
            route: idx,
            reason: format!("needs at least 2 nodes, has {}", route.nodes().len()),
        });
    }
    let nodes = vehicles + routes.num_customers();
    if nodes != size {
        return Err(RoutingError::NodeCountMismatch {
            matrix: size,
            nodes,
        });
    }
    routes.validate(&routes.depots(), size)?;
    Ok(evaluator)
}
