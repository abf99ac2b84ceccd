//! Dense cost matrices.
//!
//! Both the distance matrix and the fuel matrix use [`CostMatrix`].

mod matrix;

pub use matrix::CostMatrix;
