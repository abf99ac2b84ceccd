//! Cross-route single-customer swap.

use crate::models::RouteSet;
use rand::Rng;

/// Exchange of one customer between two distinct routes.
///
/// Positions count customers only (0 is the first stop after the depot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapMove {
    /// First route index.
    pub route_a: usize,
    /// Customer position in the first route.
    pub pos_a: usize,
    /// Second route index.
    pub route_b: usize,
    /// Customer position in the second route.
    pub pos_b: usize,
}

impl SwapMove {
    /// Picks a random swap, or `None` when the move is a no-op.
    ///
    /// Two distinct routes are drawn uniformly. If either has no customers
    /// the draw is not retried and `None` is returned. A set with fewer than
    /// two routes never yields a move.
    pub fn random<R: Rng>(routes: &RouteSet, rng: &mut R) -> Option<Self> {
        let n = routes.num_routes();
        if n < 2 {
            return None;
        }
        let route_a = rng.random_range(0..n);
        let mut route_b = rng.random_range(0..n - 1);
        if route_b >= route_a {
            route_b += 1;
        }

        let len_a = routes.routes()[route_a].len();
        let len_b = routes.routes()[route_b].len();
        if len_a == 0 || len_b == 0 {
            return None;
        }

        Some(Self {
            route_a,
            pos_a: rng.random_range(0..len_a),
            route_b,
            pos_b: rng.random_range(0..len_b),
        })
    }

    /// Applies the swap in place.
    ///
    /// # Panics
    ///
    /// Panics if the routes are equal or a position is out of range.
    pub fn apply(&self, routes: &mut RouteSet) {
        assert_ne!(self.route_a, self.route_b, "swap needs two distinct routes");
        routes.swap_customers(self.route_a, self.pos_a, self.route_b, self.pos_b);
    }
}

/// Returns a perturbed copy of `routes`; the input is left untouched.
///
/// The copy is identical to the input when the drawn route pair includes a
/// depot-only route.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_route_anneal::annealing::swap_neighbor;
/// use u_route_anneal::models::{NodeId, Route, RouteSet};
///
/// let n = |id| NodeId::new(id).expect("non-zero");
/// let routes = RouteSet::new(vec![
///     Route::with_customers(n(1), [n(3), n(4)]),
///     Route::with_customers(n(2), [n(5), n(6)]),
/// ]);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let neighbor = swap_neighbor(&routes, &mut rng);
/// assert_eq!(neighbor.customer_ids(), routes.customer_ids());
/// assert_ne!(neighbor, routes);
/// ```
pub fn swap_neighbor<R: Rng>(routes: &RouteSet, rng: &mut R) -> RouteSet {
    let mut candidate = routes.clone();
    if let Some(mv) = SwapMove::random(routes, rng) {
        mv.apply(&mut candidate);
    }
    candidate
}
