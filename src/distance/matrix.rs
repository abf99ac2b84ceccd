//! Dense cost matrix.

use crate::error::RoutingError;
use crate::models::NodeId;

/// A dense n×n matrix of non-negative arc costs stored in row-major order.
///
/// Storage is 0-based. Lookups by [`NodeId`] go through [`CostMatrix::arc`],
/// which applies the 1-based to 0-based conversion.
///
/// # Examples
///
/// ```
/// use u_route_anneal::distance::CostMatrix;
/// use u_route_anneal::models::NodeId;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 4.0],
///     vec![6.0, 0.0],
/// ]).expect("square");
/// let a = NodeId::new(1).expect("non-zero");
/// let b = NodeId::new(2).expect("non-zero");
/// assert_eq!(m.arc(a, b), 4.0);
/// assert_eq!(m.get(1, 0), 6.0);
/// assert_eq!(m.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a matrix from tabular rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RoutingError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(RoutingError::MatrixShape {
                    rows: size,
                    cols: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the cost from index `from` to index `to` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from index `from` to index `to` (0-based).
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Returns the cost of the arc between two nodes.
    #[inline]
    pub fn arc(&self, from: NodeId, to: NodeId) -> f64 {
        self.get(from.index(), to.index())
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Asymmetric matrices are valid input; the optimizer only logs them.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that every entry is finite and non-negative.
    pub fn check_entries(&self) -> Result<(), RoutingError> {
        match self
            .data
            .iter()
            .position(|&v| !v.is_finite() || v < 0.0)
        {
            Some(pos) => Err(RoutingError::NegativeCost {
                from: pos / self.size,
                to: pos % self.size,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .expect("square");
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(1, 2), 3.0);
        assert!(m.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(err, RoutingError::MatrixShape { rows: 2, cols: 1 });
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = CostMatrix::from_rows(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]]).unwrap_err();
        assert!(matches!(err, RoutingError::MatrixShape { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_arc_uses_one_based_ids() {
        let mut m = CostMatrix::new(3);
        m.set(0, 2, 7.5);
        let first = NodeId::new(1).expect("non-zero");
        let last = NodeId::new(3).expect("non-zero");
        assert_eq!(m.arc(first, last), 7.5);
        assert_eq!(m.arc(last, first), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut m = CostMatrix::new(2);
        m.set(0, 1, 10.0);
        m.set(1, 0, 15.0);
        assert!(!m.is_symmetric(1e-10));
    }

    #[test]
    fn test_check_entries() {
        let mut m = CostMatrix::new(3);
        assert!(m.check_entries().is_ok());
        m.set(2, 1, -0.5);
        assert_eq!(
            m.check_entries(),
            Err(RoutingError::NegativeCost { from: 2, to: 1 })
        );
        m.set(2, 1, f64::NAN);
        assert!(m.check_entries().is_err());
    }
}
