//! Weighted distance and fuel cost.

use crate::distance::CostMatrix;
use crate::error::RoutingError;
use crate::models::{NodeId, Route, RouteSet};
use serde::{Deserialize, Serialize};

/// Weights applied to each arc.
///
/// An arc `(o, d)` costs
/// `distance_weight·dist + fuel_weight·fuel + penalty·(dist + fuel)`.
/// The penalty term amplifies expensive arcs so that shortening one moves the
/// total more than an unweighted sum would.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWeights {
    /// Weight on distance (α).
    pub distance: f64,
    /// Weight on fuel cost (β).
    pub fuel: f64,
    /// Extra coefficient on the arc's combined distance and fuel (ε).
    pub penalty: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            distance: 1.0,
            fuel: 1.0,
            penalty: 0.1,
        }
    }
}

impl CostWeights {
    /// Creates weights from explicit values.
    pub fn new(distance: f64, fuel: f64, penalty: f64) -> Self {
        Self {
            distance,
            fuel,
            penalty,
        }
    }

    /// Checks that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), RoutingError> {
        for (name, w) in [
            ("weight_distance", self.distance),
            ("weight_fuel", self.fuel),
            ("penalty_epsilon", self.penalty),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(RoutingError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Evaluates route sets against a distance matrix and a fuel matrix.
///
/// Evaluation is pure: it only reads the routes and matrices.
///
/// # Examples
///
/// ```
/// use u_route_anneal::distance::CostMatrix;
/// use u_route_anneal::evaluation::{CostEvaluator, CostWeights};
/// use u_route_anneal::models::{NodeId, Route, RouteSet};
///
/// let dist = CostMatrix::from_rows(vec![vec![0.0, 10.0], vec![10.0, 0.0]]).expect("square");
/// let fuel = CostMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]]).expect("square");
/// let eval = CostEvaluator::new(&dist, &fuel, CostWeights::default()).expect("same size");
///
/// let n = |id| NodeId::new(id).expect("non-zero");
/// let routes = RouteSet::new(vec![Route::with_customers(n(1), [n(2)])]);
/// // Two arcs, each 10 + 2 + 0.1 * 12 = 13.2
/// assert!((eval.total_cost(&routes) - 26.4).abs() < 1e-10);
/// ```
pub struct CostEvaluator<'a> {
    distances: &'a CostMatrix,
    fuel: &'a CostMatrix,
    weights: CostWeights,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator. Both matrices must have the same size.
    pub fn new(
        distances: &'a CostMatrix,
        fuel: &'a CostMatrix,
        weights: CostWeights,
    ) -> Result<Self, RoutingError> {
        if distances.size() != fuel.size() {
            return Err(RoutingError::MatrixSizeMismatch {
                distance: distances.size(),
                fuel: fuel.size(),
            });
        }
        Ok(Self {
            distances,
            fuel,
            weights,
        })
    }

    /// The weights in use.
    pub fn weights(&self) -> CostWeights {
        self.weights
    }

    /// Number of nodes covered by the matrices.
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// Weighted cost of a single arc.
    #[inline]
    pub fn arc_cost(&self, from: NodeId, to: NodeId) -> f64 {
        let d = self.distances.arc(from, to);
        let f = self.fuel.arc(from, to);
        self.weights.distance * d + self.weights.fuel * f + self.weights.penalty * (d + f)
    }

    /// Sum of arc costs along one route, closing arc included.
    pub fn route_cost(&self, route: &Route) -> f64 {
        route.arcs().map(|(o, d)| self.arc_cost(o, d)).sum()
    }

    /// Sum of route costs over the whole set.
    pub fn total_cost(&self, routes: &RouteSet) -> f64 {
        routes.routes().iter().map(|r| self.route_cost(r)).sum()
    }
}
