//! Node identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based location identifier.
///
/// Node `k` corresponds to row and column `k - 1` of every cost matrix.
/// [`NodeId::index`] is the only place that conversion happens.
///
/// # Examples
///
/// ```
/// use u_route_anneal::models::NodeId;
///
/// let n = NodeId::new(4).expect("non-zero");
/// assert_eq!(n.get(), 4);
/// assert_eq!(n.index(), 3);
/// assert_eq!(NodeId::from_index(3), n);
/// assert!(NodeId::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct NodeId(usize);

impl NodeId {
    /// Creates an identifier. Returns `None` for `0`.
    pub fn new(id: usize) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Creates the identifier for a 0-based matrix index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 1-based identifier.
    pub fn get(self) -> usize {
        self.0
    }

    /// The 0-based matrix index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl TryFrom<usize> for NodeId {
    type Error = String;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| "node identifiers start at 1".to_string())
    }
}
