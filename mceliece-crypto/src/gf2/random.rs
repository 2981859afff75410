//! Sampling of random GF(2) matrices from an injected generator.

use crate::errors::McElieceError;
use crate::gf2::BitMatrix;
use crate::gf2::matrix_ops::is_invertible;

use rand::Rng;
use rand::seq::SliceRandom;

/// Default cap for [`random_invertible`]. A uniform square matrix over GF(2)
/// is invertible with probability ≈ 0.289, so hitting this means the RNG is broken.
pub const MAX_INVERTIBLE_ATTEMPTS: usize = 1000;

/// Uniformly random `rows × cols` bit matrix.
pub fn random_bits<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> BitMatrix {
    BitMatrix::from_fn(rows, cols, |_, _| rng.random::<bool>() as u8)
}

/// Uniformly random invertible `n × n` matrix, by rejection sampling.
///
/// # Errors
///
/// Returns `McElieceError::RetryLimitExceeded` after [`MAX_INVERTIBLE_ATTEMPTS`] singular draws.
pub fn random_invertible<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<BitMatrix, McElieceError> {
    random_invertible_with_limit(n, MAX_INVERTIBLE_ATTEMPTS, rng)
}

/// Same as [`random_invertible`] with an explicit attempt cap.
pub fn random_invertible_with_limit<R: Rng + ?Sized>(
    n: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<BitMatrix, McElieceError> {
    for attempt in 1..=max_attempts {
        let candidate = random_bits(n, n, rng);
        if is_invertible(&candidate) {
            tracing::debug!(n, attempt, "sampled invertible matrix");
            return Ok(candidate);
        }
    }

    tracing::warn!(n, max_attempts, "gave up sampling an invertible matrix");
    Err(McElieceError::RetryLimitExceeded {
        size: n,
        attempts: max_attempts,
    })
}

/// Uniformly random permutation of `0..n` (Fisher–Yates).
pub fn random_permutation_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Uniformly random `n × n` permutation matrix: row `i` is the unit vector `e_{π(i)}`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> BitMatrix {
    let perm = random_permutation_indices(n, rng);
    let mut p = BitMatrix::zeros(n, n);
    for (row, &col) in perm.iter().enumerate() {
        p.set(row, col, 1);
    }
    p
}
