//! Error type shared by construction, validation and optimization entry points.

use std::fmt::{self, Display};

/// Errors reported before an optimization run starts.
///
/// The annealing loop itself never fails; every variant here describes an
/// input that was rejected up front.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// Matrix data is not square (or a row has the wrong length).
    MatrixShape {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the offending row (or total length for flat data).
        cols: usize,
    },
    /// Distance and fuel matrices have different sizes.
    MatrixSizeMismatch {
        /// Size of the distance matrix.
        distance: usize,
        /// Size of the fuel matrix.
        fuel: usize,
    },
    /// Matrix size does not match the declared node count.
    NodeCountMismatch {
        /// Size of the matrices.
        matrix: usize,
        /// Declared number of nodes.
        nodes: usize,
    },
    /// Fewer nodes than vehicles, or no vehicles at all.
    TooFewNodes {
        /// Number of nodes.
        nodes: usize,
        /// Number of vehicles.
        vehicles: usize,
    },
    /// Number of depots differs from the number of vehicles.
    DepotCountMismatch {
        /// Number of depots supplied.
        depots: usize,
        /// Number of vehicles.
        vehicles: usize,
    },
    /// A node identifier lies outside `[1, size]`.
    NodeOutOfRange {
        /// The offending identifier.
        node: usize,
        /// Number of nodes.
        size: usize,
    },
    /// A route does not start and end at its depot, or visits a depot inside.
    InvalidRoute {
        /// Route index.
        route: usize,
        /// Human-readable reason.
        reason: String,
    },
    /// A customer appears in more than one position.
    DuplicateNode {
        /// The duplicated identifier.
        node: usize,
    },
    /// A customer is not visited by any route.
    MissingNode {
        /// The missing identifier.
        node: usize,
    },
    /// A matrix entry is negative or not finite.
    NegativeCost {
        /// Row index (0-based).
        from: usize,
        /// Column index (0-based).
        to: usize,
    },
    /// A configuration value is out of range.
    InvalidConfig(String),
}

impl Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatrixShape { rows, cols } => {
                write!(f, "matrix is not square: {rows} rows, found row of length {cols}")
            }
            Self::MatrixSizeMismatch { distance, fuel } => write!(
                f,
                "distance matrix is {distance}x{distance} but fuel matrix is {fuel}x{fuel}"
            ),
            Self::NodeCountMismatch { matrix, nodes } => {
                write!(f, "matrix covers {matrix} nodes but {nodes} were declared")
            }
            Self::TooFewNodes { nodes, vehicles } => {
                write!(f, "{nodes} nodes cannot serve {vehicles} vehicles")
            }
            Self::DepotCountMismatch { depots, vehicles } => {
                write!(f, "{depots} depots given for {vehicles} vehicles")
            }
            Self::NodeOutOfRange { node, size } => {
                write!(f, "node {node} is outside the valid range 1..={size}")
            }
            Self::InvalidRoute { route, reason } => write!(f, "route {route} is invalid: {reason}"),
            Self::DuplicateNode { node } => write!(f, "node {node} is visited more than once"),
            Self::MissingNode { node } => write!(f, "node {node} is not visited by any route"),
            Self::NegativeCost { from, to } => {
                write!(f, "matrix entry ({from}, {to}) is negative or not finite")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for RoutingError {}
