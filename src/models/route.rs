//! Depot-anchored route type.

use super::NodeId;
use serde::{Deserialize, Serialize};

/// An ordered node sequence `[depot, c1, ..., ck, depot]` served by one vehicle.
///
/// The depot is stored at both ends, so a route with no customers is
/// `[depot, depot]` and still traverses one arc.
///
/// # Examples
///
/// ```
/// use u_route_anneal::models::{NodeId, Route};
///
/// let depot = NodeId::new(1).expect("non-zero");
/// let customers = [NodeId::new(4).expect("non-zero"), NodeId::new(5).expect("non-zero")];
/// let route = Route::with_customers(depot, customers);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.nodes().len(), 4);
/// assert_eq!(route.arcs().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    nodes: Vec<NodeId>,
}

impl Route {
    /// Creates a depot-only route.
    pub fn new(depot: NodeId) -> Self {
        Self {
            nodes: vec![depot, depot],
        }
    }

    /// Creates a route visiting `customers` in order.
    pub fn with_customers(depot: NodeId, customers: impl IntoIterator<Item = NodeId>) -> Self {
        let mut nodes = vec![depot];
        nodes.extend(customers);
        nodes.push(depot);
        Self { nodes }
    }

    /// Wraps a raw node sequence without checking its shape.
    ///
    /// Use [`RouteSet::validate`](super::RouteSet::validate) before optimizing
    /// routes built this way.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// The depot this route starts from.
    ///
    /// # Panics
    ///
    /// Panics if the route was built from an empty node sequence.
    pub fn depot(&self) -> NodeId {
        self.nodes[0]
    }

    /// The full sequence including both depot endpoints.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The customers in visit order (depot endpoints excluded).
    pub fn customers(&self) -> &[NodeId] {
        if self.nodes.len() < 2 {
            return &[];
        }
        &self.nodes[1..self.nodes.len() - 1]
    }

    pub(crate) fn customers_mut(&mut self) -> &mut [NodeId] {
        let end = self.nodes.len().saturating_sub(1);
        &mut self.nodes[1.min(end)..end]
    }

    /// Number of customers on this route.
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(2)
    }

    /// Returns `true` if the route only goes depot to depot.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive `(origin, destination)` pairs, including the closing arc.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId::new(id).expect("non-zero")
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new(n(2));
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.depot(), n(2));
        assert_eq!(r.nodes(), &[n(2), n(2)]);
        assert!(r.customers().is_empty());
    }

    #[test]
    fn test_empty_route_has_one_arc() {
        let r = Route::new(n(3));
        let arcs: Vec<_> = r.arcs().collect();
        assert_eq!(arcs, vec![(n(3), n(3))]);
    }

    #[test]
    fn test_route_with_customers() {
        let r = Route::with_customers(n(1), [n(5), n(3)]);
        assert_eq!(r.len(), 2);
        assert_eq!(r.customers(), &[n(5), n(3)]);
        let arcs: Vec<_> = r.arcs().collect();
        assert_eq!(arcs, vec![(n(1), n(5)), (n(5), n(3)), (n(3), n(1))]);
    }

    #[test]
    fn test_customers_mut_touches_interior_only() {
        let mut r = Route::with_customers(n(1), [n(4), n(6)]);
        r.customers_mut()[1] = n(9);
        assert_eq!(r.nodes(), &[n(1), n(4), n(9), n(1)]);

        let mut empty = Route::new(n(2));
        assert!(empty.customers_mut().is_empty());
    }
}
