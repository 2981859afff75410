//! Dense bit matrix over GF(2).

use crate::errors::McElieceError;

use itertools::Itertools;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A `rows × cols` matrix over GF(2), stored row-major with one byte per entry.
///
/// Every entry is `0` or `1`; all arithmetic on it is modulo 2, so equality is
/// an exact bit comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BitMatrixRepr", into = "BitMatrixRepr")]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    bits: Vec<u8>,
}

/// Serialized form: explicit dimensions plus one `"0101…"` string per row.
#[derive(Serialize, Deserialize)]
struct BitMatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<String>,
}

impl BitMatrix {
    /// Creates an all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![0; rows * cols],
        }
    }

    /// Creates the `n × n` identity matrix.
    ///
    /// # Example
    ///
    /// ```
    /// # use mceliece_crypto::gf2::BitMatrix;
    /// let id = BitMatrix::identity(3);
    /// assert_eq!(id.get(1, 1), 1);
    /// assert_eq!(id.get(1, 2), 0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1);
        }
        m
    }

    /// Builds a matrix entry by entry. Only the lowest bit of each value is kept.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut bits = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                bits.push(f(r, c) & 1);
            }
        }
        Self { rows, cols, bits }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns `McElieceError::DimensionMismatch` for ragged rows and
    /// `McElieceError::InvalidParameters` for entries other than `0`/`1`.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, McElieceError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut bits = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(McElieceError::DimensionMismatch(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            if let Some(&bad) = row.iter().find(|&&b| b > 1) {
                return Err(McElieceError::InvalidParameters(format!(
                    "Row {} contains {} which is not a GF(2) element",
                    i, bad
                )));
            }
            bits.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            bits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// `(rows, cols)`, mostly for diagnostics.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.bits[r * self.cols + c]
    }

    pub fn set(&mut self, r: usize, c: usize, bit: u8) {
        self.bits[r * self.cols + c] = bit & 1;
    }

    pub fn flip(&mut self, r: usize, c: usize) {
        self.bits[r * self.cols + c] ^= 1;
    }

    pub fn row(&self, r: usize) -> &[u8] {
        &self.bits[r * self.cols..(r + 1) * self.cols]
    }

    /// Copies the matrix out as a `Vec` of rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.bits.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    /// Row operation `row[dst] ^= row[src]`.
    pub fn xor_row_into(&mut self, src: usize, dst: usize) {
        if src == dst {
            self.bits[dst * self.cols..(dst + 1) * self.cols].fill(0);
            return;
        }
        for c in 0..self.cols {
            let bit = self.bits[src * self.cols + c];
            self.bits[dst * self.cols + c] ^= bit;
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self.get(c, r))
    }

    /// Extracts the `rows × cols` submatrix starting at `(row0, col0)`.
    ///
    /// # Errors
    ///
    /// Returns `McElieceError::DimensionMismatch` if the window leaves the matrix.
    pub fn submatrix(
        &self,
        row0: usize,
        col0: usize,
        rows: usize,
        cols: usize,
    ) -> Result<BitMatrix, McElieceError> {
        if row0 + rows > self.rows || col0 + cols > self.cols {
            return Err(McElieceError::DimensionMismatch(format!(
                "{}x{} window at ({}, {}) exceeds {}x{} matrix",
                rows, cols, row0, col0, self.rows, self.cols
            )));
        }
        Ok(Self::from_fn(rows, cols, |r, c| self.get(row0 + r, col0 + c)))
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// True when the matrix is square with exactly one `1` in every row and every column.
    pub fn is_permutation(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let mut col_hits = vec![0usize; self.cols];
        for r in 0..self.rows {
            let mut row_hits = 0;
            for (c, &bit) in self.row(r).iter().enumerate() {
                if bit == 1 {
                    row_hits += 1;
                    col_hits[c] += 1;
                }
            }
            if row_hits != 1 {
                return false;
            }
        }
        col_hits.iter().all(|&hits| hits == 1)
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            writeln!(f, "{}", self.row(r).iter().join(" "))?;
        }
        Ok(())
    }
}

impl From<BitMatrix> for BitMatrixRepr {
    fn from(m: BitMatrix) -> Self {
        let data = (0..m.rows)
            .map(|r| m.row(r).iter().map(|&b| if b == 1 { '1' } else { '0' }).collect())
            .collect();
        BitMatrixRepr {
            rows: m.rows,
            cols: m.cols,
            data,
        }
    }
}

impl TryFrom<BitMatrixRepr> for BitMatrix {
    type Error = McElieceError;

    fn try_from(repr: BitMatrixRepr) -> Result<Self, Self::Error> {
        if repr.data.len() != repr.rows {
            return Err(McElieceError::DimensionMismatch(format!(
                "Declared {} rows but found {}",
                repr.rows,
                repr.data.len()
            )));
        }
        if let Some((i, row)) = repr.data.iter().enumerate().find(|(_, row)| row.len() != repr.cols) {
            return Err(McElieceError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                repr.cols
            )));
        }
        let capacity = repr.rows.checked_mul(repr.cols).ok_or_else(|| {
            McElieceError::DimensionMismatch(format!(
                "{}x{} matrix is too large",
                repr.rows, repr.cols
            ))
        })?;

        let mut bits = Vec::with_capacity(capacity);
        for (i, row) in repr.data.iter().enumerate() {
            for ch in row.chars() {
                match ch {
                    '0' => bits.push(0),
                    '1' => bits.push(1),
                    other => {
                        return Err(McElieceError::InvalidParameters(format!(
                            "Unexpected character {:?} in row {}",
                            other, i
                        )));
                    }
                }
            }
        }
        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            bits,
        })
    }
}
