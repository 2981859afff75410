//! # GF(2) Module
//!
//! Provides the [`BitMatrix`] value type and exact modulo-2 linear algebra:
//! products, Gauss-Jordan inversion and random sampling of the masking matrices.

pub mod matrix;
pub mod matrix_ops;
pub mod random;

/// Represents a row vector over GF(2). Every entry is `0` or `1`.
pub type BitVector = Vec<u8>;

pub use matrix::BitMatrix;
pub use random::{random_bits, random_invertible, random_permutation};

/// Number of positions in which `a` and `b` differ.
///
/// Extra trailing entries of the longer slice count as differences.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    let common = a.iter().zip(b).filter(|(x, y)| (**x ^ **y) & 1 == 1).count();
    common + a.len().abs_diff(b.len())
}

/// Hamming weight of a bit vector.
pub fn weight(v: &[u8]) -> usize {
    v.iter().filter(|&&bit| bit & 1 == 1).count()
}
