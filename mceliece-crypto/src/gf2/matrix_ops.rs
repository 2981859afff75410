use crate::errors::McElieceError;
use crate::gf2::{BitMatrix, BitVector};

/// A·x where A is an m×n matrix and x is a length–n column vector.
/// Returns an m‐vector. This is the syndrome form `H·r`.
pub fn matrix_vector_mul(a: &BitMatrix, x: &[u8]) -> Result<BitVector, McElieceError> {
    if x.len() != a.cols() {
        return Err(McElieceError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            a.cols(),
            x.len()
        )));
    }

    let y = (0..a.rows())
        .map(|i| {
            a.row(i)
                .iter()
                .zip(x)
                .fold(0u8, |acc, (&aij, &xj)| acc ^ (aij & xj))
        })
        .collect();
    Ok(y)
}

/// x·A where x is a length–m row‐vector and A is m×n.
/// Returns a length–n row‐vector.
pub fn vector_matrix_mul(x: &[u8], a: &BitMatrix) -> Result<BitVector, McElieceError> {
    if x.len() != a.rows() {
        return Err(McElieceError::DimensionMismatch(format!(
            "Vector length ({}) must match matrix rows ({})",
            x.len(),
            a.rows()
        )));
    }

    let mut y = vec![0u8; a.cols()];
    for (i, &xi) in x.iter().enumerate() {
        if xi & 1 == 0 {
            continue;
        }
        for (yj, &aij) in y.iter_mut().zip(a.row(i)) {
            *yj ^= aij;
        }
    }
    Ok(y)
}

/// Computes the vector sum `c = a + b` over GF(2), i.e. the XOR of both vectors.
///
/// # Errors
///
/// Returns `McElieceError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_add(a: &[u8], b: &[u8]) -> Result<BitVector, McElieceError> {
    if a.len() != b.len() {
        return Err(McElieceError::DimensionMismatch(format!(
            "Vector lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| (x ^ y) & 1).collect())
}

/// Computes the matrix product `C = AB` modulo 2.
///
/// # Errors
///
/// Returns `McElieceError::DimensionMismatch` if the inner dimensions of the matrices do not match.
pub fn multiply(a: &BitMatrix, b: &BitMatrix) -> Result<BitMatrix, McElieceError> {
    if a.cols() != b.rows() {
        return Err(McElieceError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({}x{} · {}x{})",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }

    let mut c = BitMatrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        let row = vector_matrix_mul(a.row(i), b)?;
        for (j, bit) in row.into_iter().enumerate() {
            c.set(i, j, bit);
        }
    }
    Ok(c)
}

/// Computes the entry-wise sum `C = A + B` over GF(2).
///
/// # Errors
///
/// Returns `McElieceError::DimensionMismatch` if the shapes differ.
pub fn matrix_add(a: &BitMatrix, b: &BitMatrix) -> Result<BitMatrix, McElieceError> {
    if a.shape() != b.shape() {
        return Err(McElieceError::DimensionMismatch(format!(
            "Matrix shapes must match for addition ({:?} vs {:?})",
            a.shape(),
            b.shape()
        )));
    }
    Ok(BitMatrix::from_fn(a.rows(), a.cols(), |r, c| {
        a.get(r, c) ^ b.get(r, c)
    }))
}

/// Places `count` copies of `block` along the diagonal, zeros elsewhere.
pub fn block_diagonal(block: &BitMatrix, count: usize) -> BitMatrix {
    let (k, n) = block.shape();
    BitMatrix::from_fn(k * count, n * count, |r, c| {
        if r / k == c / n {
            block.get(r % k, c % n)
        } else {
            0
        }
    })
}

/// Calculates the rank of a matrix over GF(2).
///
/// The rank is the number of linearly independent rows (or columns).
/// This implementation uses Gaussian elimination.
pub fn matrix_rank(matrix: &BitMatrix) -> usize {
    let mut mat = matrix.clone();
    let n = mat.rows();
    let mut pivot_row = 0;

    for col in 0..mat.cols() {
        if pivot_row >= n {
            break;
        }

        // Find pivot row for this column
        let Some(pivot_idx) = (pivot_row..n).find(|&r| mat.get(r, col) == 1) else {
            continue;
        };
        mat.swap_rows(pivot_row, pivot_idx);

        for i in (pivot_row + 1)..n {
            if mat.get(i, col) == 1 {
                mat.xor_row_into(pivot_row, i);
            }
        }
        pivot_row += 1;
    }

    pivot_row
}

/// True for square matrices of full rank.
pub fn is_invertible(matrix: &BitMatrix) -> bool {
    matrix.is_square() && matrix_rank(matrix) == matrix.rows()
}

/// Inverts a square matrix over GF(2) by row-reducing `[A | I]` to `[I | A⁻¹]`.
///
/// # Errors
///
/// Returns `McElieceError::DimensionMismatch` if the matrix is not square and
/// `McElieceError::Singular` if some column has no pivot.
pub fn matrix_inverse(matrix: &BitMatrix) -> Result<BitMatrix, McElieceError> {
    if !matrix.is_square() {
        return Err(McElieceError::DimensionMismatch(format!(
            "matrix_inverse: matrix must be square, got {}x{}",
            matrix.rows(),
            matrix.cols()
        )));
    }

    let n = matrix.rows();
    let mut a = matrix.clone();
    let mut inv = BitMatrix::identity(n);

    for col in 0..n {
        let Some(pivot) = (col..n).find(|&r| a.get(r, col) == 1) else {
            return Err(McElieceError::Singular(format!(
                "no pivot in column {} of {}x{} matrix",
                col, n, n
            )));
        };
        a.swap_rows(col, pivot);
        inv.swap_rows(col, pivot);

        // eliminate all other rows
        for r in 0..n {
            if r != col && a.get(r, col) == 1 {
                a.xor_row_into(col, r);
                inv.xor_row_into(col, r);
            }
        }
    }

    Ok(inv)
}

/// Inverse of a permutation matrix, which is its transpose.
///
/// # Errors
///
/// Returns `McElieceError::InvalidKey` if `p` is not a permutation matrix.
pub fn permutation_inverse(p: &BitMatrix) -> Result<BitMatrix, McElieceError> {
    if !p.is_permutation() {
        return Err(McElieceError::InvalidKey(format!(
            "{}x{} matrix is not a permutation matrix",
            p.rows(),
            p.cols()
        )));
    }
    Ok(p.transpose())
}
