//! Route set: one route per vehicle.

use super::{NodeId, Route};
use crate::error::RoutingError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered collection of routes, route `i` belonging to vehicle `i`.
///
/// Every customer appears in exactly one route and every route starts and
/// ends at its vehicle's depot. [`RouteSet::validate`] checks both.
///
/// # Examples
///
/// ```
/// use u_route_anneal::models::{NodeId, Route, RouteSet};
///
/// let n = |id| NodeId::new(id).expect("non-zero");
/// let set = RouteSet::new(vec![
///     Route::with_customers(n(1), [n(3)]),
///     Route::with_customers(n(2), [n(4), n(5)]),
/// ]);
/// assert_eq!(set.num_routes(), 2);
/// assert_eq!(set.num_customers(), 3);
/// assert!(set.validate(&[n(1), n(2)], 5).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Creates a route set from per-vehicle routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns the routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (vehicles).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers across all routes.
    pub fn num_customers(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Depot of each route, in vehicle order.
    pub fn depots(&self) -> Vec<NodeId> {
        self.routes.iter().map(Route::depot).collect()
    }

    /// All customers across all routes, sorted.
    pub fn customer_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .routes
            .iter()
            .flat_map(|r| r.customers().iter().copied())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Exchanges customer `pos_a` of route `a` with customer `pos_b` of route `b`.
    ///
    /// Positions count customers only, so position 0 is the first stop after
    /// the depot. Requires `a != b` and both positions in range.
    pub(crate) fn swap_customers(&mut self, a: usize, pos_a: usize, b: usize, pos_b: usize) {
        debug_assert_ne!(a, b);
        let (lo, lo_pos, hi, hi_pos) = if a < b {
            (a, pos_a, b, pos_b)
        } else {
            (b, pos_b, a, pos_a)
        };
        let (left, right) = self.routes.split_at_mut(hi);
        std::mem::swap(
            &mut left[lo].customers_mut()[lo_pos],
            &mut right[0].customers_mut()[hi_pos],
        );
    }

    /// Checks the route-shape and coverage invariants.
    ///
    /// `depots[i]` is the fixed depot of vehicle `i`; customers are every
    /// identifier in `1..=node_count` that is not a depot.
    pub fn validate(&self, depots: &[NodeId], node_count: usize) -> Result<(), RoutingError> {
        if depots.len() != self.routes.len() {
            return Err(RoutingError::DepotCountMismatch {
                depots: depots.len(),
                vehicles: self.routes.len(),
            });
        }

        let mut is_depot = vec![false; node_count];
        for &d in depots {
            check_range(d, node_count)?;
            if std::mem::replace(&mut is_depot[d.index()], true) {
                return Err(RoutingError::DuplicateNode { node: d.get() });
            }
        }

        let mut seen = vec![false; node_count];
        for (idx, (route, &depot)) in self.routes.iter().zip(depots).enumerate() {
            let nodes = route.nodes();
            if nodes.len() < 2 {
                return Err(RoutingError::InvalidRoute {
                    route: idx,
                    reason: format!("needs at least 2 nodes, has {}", nodes.len()),
                });
            }
            if nodes[0] != depot || nodes[nodes.len() - 1] != depot {
                return Err(RoutingError::InvalidRoute {
                    route: idx,
                    reason: format!("must start and end at depot {depot}"),
                });
            }
            for &c in route.customers() {
                check_range(c, node_count)?;
                if is_depot[c.index()] {
                    return Err(RoutingError::InvalidRoute {
                        route: idx,
                        reason: format!("visits depot {c} between its endpoints"),
                    });
                }
                if std::mem::replace(&mut seen[c.index()], true) {
                    return Err(RoutingError::DuplicateNode { node: c.get() });
                }
            }
        }

        if let Some(missing) = (0..node_count).find(|&i| !is_depot[i] && !seen[i]) {
            return Err(RoutingError::MissingNode {
                node: NodeId::from_index(missing).get(),
            });
        }

        Ok(())
    }
}

fn check_range(node: NodeId, node_count: usize) -> Result<(), RoutingError> {
    if node.get() > node_count {
        return Err(RoutingError::NodeOutOfRange {
            node: node.get(),
            size: node_count,
        });
    }
    Ok(())
}

/// Builds a random starting route set.
///
/// Shuffles every non-depot node in `1..=node_count` and splits the shuffled
/// list into `vehicle_count` contiguous chunks whose sizes differ by at most
/// one (the first `customers % vehicle_count` chunks get the extra node).
/// Chunk `i` becomes the route of depot `depots[i]`.
///
/// # Errors
///
/// Fails if there are no vehicles, if `depots` does not hold one distinct
/// in-range depot per vehicle, or if `node_count < vehicle_count`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_route_anneal::models::{build_initial_routes, NodeId};
///
/// let depots: Vec<NodeId> = (1..=3).filter_map(NodeId::new).collect();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let set = build_initial_routes(3, &depots, 10, &mut rng).expect("valid input");
/// assert_eq!(set.num_routes(), 3);
/// assert_eq!(set.num_customers(), 7);
/// ```
pub fn build_initial_routes<R: Rng>(
    vehicle_count: usize,
    depots: &[NodeId],
    node_count: usize,
    rng: &mut R,
) -> Result<RouteSet, RoutingError> {
    if vehicle_count == 0 || node_count < vehicle_count {
        return Err(RoutingError::TooFewNodes {
            nodes: node_count,
            vehicles: vehicle_count,
        });
    }
    if depots.len() != vehicle_count {
        return Err(RoutingError::DepotCountMismatch {
            depots: depots.len(),
            vehicles: vehicle_count,
        });
    }

    let mut is_depot = vec![false; node_count];
    for &d in depots {
        check_range(d, node_count)?;
        if std::mem::replace(&mut is_depot[d.index()], true) {
            return Err(RoutingError::DuplicateNode { node: d.get() });
        }
    }

    let mut customers: Vec<NodeId> = (0..node_count)
        .filter(|&i| !is_depot[i])
        .map(NodeId::from_index)
        .collect();
    customers.shuffle(rng);

    let base = customers.len() / vehicle_count;
    let extra = customers.len() % vehicle_count;
    let mut rest = customers.as_slice();
    let routes = depots
        .iter()
        .enumerate()
        .map(|(i, &depot)| {
            let size = base + usize::from(i < extra);
            let (chunk, tail) = rest.split_at(size);
            rest = tail;
            Route::with_customers(depot, chunk.iter().copied())
        })
        .collect();

    Ok(RouteSet::new(routes))
}
