//! Annealing configuration.

use crate::error::RoutingError;
use crate::evaluation::CostWeights;
use serde::{Deserialize, Serialize};

/// Configuration for the route annealing optimizer.
///
/// # Examples
///
/// ```
/// use u_route_anneal::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(50.0)
///     .with_min_temperature(0.1)
///     .with_cooling_rate(0.99)
///     .with_inner_iterations(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Geometric cooling factor applied after a normal temperature level.
    pub cooling_rate: f64,

    /// Neighbor evaluations per temperature level.
    pub inner_iterations: usize,

    /// Stagnation count above which the aggressive factor is used.
    pub stagnation_threshold: usize,

    /// Cooling factor applied when the search has stagnated.
    pub aggressive_cooling_rate: f64,

    /// Weight on distance (α).
    pub weight_distance: f64,

    /// Weight on fuel cost (β).
    pub weight_fuel: f64,

    /// Arc penalty coefficient (ε).
    pub penalty_epsilon: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.01,
            cooling_rate: 0.995,
            inner_iterations: 200,
            stagnation_threshold: 500,
            aggressive_cooling_rate: 0.9,
            weight_distance: 1.0,
            weight_fuel: 1.0,
            penalty_epsilon: 0.1,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_inner_iterations(mut self, n: usize) -> Self {
        self.inner_iterations = n;
        self
    }

    pub fn with_stagnation_threshold(mut self, n: usize) -> Self {
        self.stagnation_threshold = n;
        self
    }

    pub fn with_aggressive_cooling_rate(mut self, rate: f64) -> Self {
        self.aggressive_cooling_rate = rate;
        self
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weight_distance = weights.distance;
        self.weight_fuel = weights.fuel;
        self.penalty_epsilon = weights.penalty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cost weights assembled from the weight fields.
    pub fn weights(&self) -> CostWeights {
        CostWeights::new(self.weight_distance, self.weight_fuel, self.penalty_epsilon)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if !(self.initial_temperature > 0.0) || !self.initial_temperature.is_finite() {
            return Err(RoutingError::InvalidConfig(
                "initial_temperature must be positive and finite".into(),
            ));
        }
        if !(self.min_temperature > 0.0) {
            return Err(RoutingError::InvalidConfig(
                "min_temperature must be positive".into(),
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(RoutingError::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        for (name, rate) in [
            ("cooling_rate", self.cooling_rate),
            ("aggressive_cooling_rate", self.aggressive_cooling_rate),
        ] {
            if !(rate > 0.0 && rate < 1.0) {
                return Err(RoutingError::InvalidConfig(format!(
                    "{name} must be in (0, 1), got {rate}"
                )));
            }
        }
        if self.inner_iterations == 0 {
            return Err(RoutingError::InvalidConfig(
                "inner_iterations must be at least 1".into(),
            ));
        }
        self.weights().validate()
    }
}
