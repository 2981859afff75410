use crate::code::{Code, ErrorCorrectingCode};
use crate::errors::McElieceError;
use crate::gf2::matrix_ops::{matrix_inverse, permutation_inverse, vector_matrix_mul};
use crate::gf2::{BitMatrix, BitVector};
use crate::keypair::keys::PrivateKey;

/// Recovers the message from a ciphertext.
///
/// 1. `c' = c · P⁻¹`, with `P⁻¹ = Pᵀ`
/// 2. decode each of the L blocks of `n` bits independently and concatenate into `m'`
/// 3. `m = m' · S⁻¹`
///
/// Exact whenever every block carries at most `code.t` errors; beyond that a
/// block may silently miscorrect.
///
/// # Errors
///
/// * `McElieceError::DimensionMismatch` if the ciphertext or key shapes disagree with the code.
/// * `McElieceError::InvalidKey` if `P` is not a permutation matrix.
/// * `McElieceError::Singular` if `S` is not invertible, i.e. the key is corrupted.
pub fn decrypt(
    ciphertext: &[u8],
    S: &BitMatrix,
    P: &BitMatrix,
    G_total: &BitMatrix,
    code: &Code,
) -> Result<BitVector, McElieceError> {
    let (n, k) = (code.n(), code.k());
    if ciphertext.len() != P.rows() {
        return Err(McElieceError::DimensionMismatch(format!(
            "Ciphertext length ({}) must match P ({}x{})",
            ciphertext.len(),
            P.rows(),
            P.cols()
        )));
    }
    if ciphertext.len() % n != 0 {
        return Err(McElieceError::DimensionMismatch(format!(
            "Ciphertext length ({}) is not a multiple of the code length n ({})",
            ciphertext.len(),
            n
        )));
    }

    let block_count = ciphertext.len() / n;
    if G_total.shape() != (k * block_count, n * block_count) {
        return Err(McElieceError::DimensionMismatch(format!(
            "G_total is {}x{}, expected {}x{} for {} blocks",
            G_total.rows(),
            G_total.cols(),
            k * block_count,
            n * block_count,
            block_count
        )));
    }
    if S.shape() != (k * block_count, k * block_count) {
        return Err(McElieceError::DimensionMismatch(format!(
            "S is {}x{}, expected {}x{}",
            S.rows(),
            S.cols(),
            k * block_count,
            k * block_count
        )));
    }

    let P_inv = permutation_inverse(P)?;
    let unpermuted = vector_matrix_mul(ciphertext, &P_inv)?;

    let mut m_prime = Vec::with_capacity(k * block_count);
    for block in unpermuted.chunks(n) {
        m_prime.extend(code.decode(block)?);
    }

    let S_inv = matrix_inverse(S)?;
    let msg = vector_matrix_mul(&m_prime, &S_inv)?;

    tracing::debug!(blocks = block_count, code = %code.kind(), "decrypted ciphertext");
    Ok(msg)
}

impl PrivateKey {
    /// Decrypts a ciphertext produced with this key pair.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<BitVector, McElieceError> {
        decrypt(ciphertext, &self.S, &self.P, &self.G_total, &self.code)
    }
}
