//! Solver state carried through the annealing loop.

use super::config::AnnealingConfig;
use crate::models::RouteSet;

/// Temperature, current and best solutions, and the stagnation counter.
///
/// Each run owns its own state; nothing is shared between runs. The state can
/// be inspected but only the control loop mutates it.
#[derive(Debug, Clone)]
pub struct SolverState {
    temperature: f64,
    current: RouteSet,
    current_cost: f64,
    best: RouteSet,
    best_cost: f64,
    stagnation: usize,
}

impl SolverState {
    pub(crate) fn new(initial: RouteSet, cost: f64, temperature: f64) -> Self {
        Self {
            temperature,
            best: initial.clone(),
            current: initial,
            current_cost: cost,
            best_cost: cost,
            stagnation: 0,
        }
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Current accepted solution.
    pub fn current(&self) -> &RouteSet {
        &self.current
    }

    /// Cost of the current solution.
    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    /// Best solution seen so far.
    pub fn best(&self) -> &RouteSet {
        &self.best
    }

    /// Cost of the best solution.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Accepted moves since the best cost last improved.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// `true` while the temperature is above `min_temperature`.
    pub fn is_running(&self, min_temperature: f64) -> bool {
        self.temperature > min_temperature
    }

    /// Makes `candidate` the current solution.
    ///
    /// Returns `true` if it also became the new best, which resets the
    /// stagnation counter; otherwise the counter is incremented.
    pub(crate) fn accept(&mut self, candidate: RouteSet, cost: f64) -> bool {
        self.current = candidate;
        self.current_cost = cost;
        if cost < self.best_cost {
            self.best = self.current.clone();
            self.best_cost = cost;
            self.stagnation = 0;
            true
        } else {
            self.stagnation += 1;
            false
        }
    }

    /// Lowers the temperature at the end of a level.
    ///
    /// Uses the aggressive factor and clears the counter when stagnation
    /// exceeds the threshold, the normal factor otherwise. Returns `true` if
    /// the aggressive factor was applied.
    pub(crate) fn cool(&mut self, config: &AnnealingConfig) -> bool {
        if self.stagnation > config.stagnation_threshold {
            self.temperature *= config.aggressive_cooling_rate;
            self.stagnation = 0;
            true
        } else {
            self.temperature *= config.cooling_rate;
            false
        }
    }

    pub(crate) fn into_best(self) -> (RouteSet, f64) {
        (self.best, self.best_cost)
    }
}
