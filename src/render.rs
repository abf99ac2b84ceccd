//! Plain-text rendering of route sets with location names.
//!
//! The optimizer never needs names; this module is for callers that want to
//! print results.

use crate::models::{NodeId, Route, RouteSet};
use std::borrow::Cow;
use std::collections::HashMap;

/// Display names keyed by node identifier.
///
/// # Examples
///
/// ```
/// use u_route_anneal::models::{NodeId, Route};
/// use u_route_anneal::render::NodeNames;
///
/// let names = NodeNames::from_ordered(["Depot", "Store A", "Store B"]);
/// let n = |id| NodeId::new(id).expect("non-zero");
/// let route = Route::with_customers(n(1), [n(3), n(2)]);
/// assert_eq!(names.render_route(&route), "Depot -> Store B -> Store A -> Depot");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeNames {
    names: HashMap<NodeId, String>,
}

impl NodeNames {
    /// Creates an empty name table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names listed in node order: the first name belongs to node 1.
    pub fn from_ordered<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .enumerate()
                .map(|(i, name)| (NodeId::from_index(i), name.into()))
                .collect(),
        }
    }

    /// Sets the name of one node.
    pub fn insert(&mut self, node: NodeId, name: impl Into<String>) {
        self.names.insert(node, name.into());
    }

    /// Name of `node`, or its identifier when no name is known.
    pub fn name(&self, node: NodeId) -> Cow<'_, str> {
        match self.names.get(&node) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(node.to_string()),
        }
    }

    /// Number of named nodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Joins the route's stops with `" -> "`.
    pub fn render_route(&self, route: &Route) -> String {
        route
            .nodes()
            .iter()
            .map(|&n| self.name(n))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Renders a full report: total cost, then one line per route.
    pub fn render_route_set(&self, routes: &RouteSet, cost: f64) -> String {
        let mut out = format!("Total cost: {cost:.2}\n");
        for (i, route) in routes.routes().iter().enumerate() {
            out.push_str(&format!("Route {:02} -> {}\n", i + 1, self.render_route(route)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId::new(id).expect("non-zero")
    }

    #[test]
    fn test_unknown_node_falls_back_to_id() {
        let names = NodeNames::from_ordered(["North"]);
        assert_eq!(names.name(n(1)), "North");
        assert_eq!(names.name(n(7)), "7");
    }

    #[test]
    fn test_insert_overrides() {
        let mut names = NodeNames::new();
        assert!(names.is_empty());
        names.insert(n(2), "Hub");
        names.insert(n(2), "Main Hub");
        assert_eq!(names.len(), 1);
        assert_eq!(names.name(n(2)), "Main Hub");
    }

    #[test]
    fn test_render_route_set() {
        let names = NodeNames::from_ordered(["North", "South", "Mill", "Port"]);
        let routes = RouteSet::new(vec![
            Route::with_customers(n(1), [n(3)]),
            Route::new(n(2)),
        ]);
        let report = names.render_route_set(&routes, 1234.567);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Total cost: 1234.57");
        assert_eq!(lines[1], "Route 01 -> North -> Mill -> North");
        assert_eq!(lines[2], "Route 02 -> South -> South");
        assert_eq!(lines.len(), 3);
    }
}
