//! Encryption in the two error-injection modes.
//!
//! * Public mode only knows `G_pub` and `t`, so its `t` errors land anywhere
//!   in the ciphertext and a single block may receive more than it can correct.
//! * Controlled mode also uses `S`, `G_total` and `P` and places
//!   `errors_per_block` errors inside every block before permuting.

use crate::code::ErrorCorrectingCode;
use crate::errors::McElieceError;
use crate::gf2::BitVector;
use crate::gf2::matrix_ops::{vector_add, vector_matrix_mul};
use crate::keypair::keys::{PrivateKey, PublicKey};

use rand::Rng;
use rand::seq::index;

/// Key material selecting the encryption mode.
#[derive(Debug, Clone, Copy)]
pub enum EncryptionKey<'a> {
    /// Public mode: `t` errors spread over the whole ciphertext.
    Public(&'a PublicKey),
    /// Controlled mode: errors placed block by block before the permutation.
    Private(&'a PrivateKey),
}

impl EncryptionKey<'_> {
    /// Message length the key accepts.
    pub fn k_total(&self) -> usize {
        match self {
            EncryptionKey::Public(public_key) => public_key.k_total(),
            EncryptionKey::Private(private_key) => private_key.S.rows(),
        }
    }

    /// Ciphertext length the key produces.
    pub fn n_total(&self) -> usize {
        match self {
            EncryptionKey::Public(public_key) => public_key.n_total(),
            EncryptionKey::Private(private_key) => private_key.P.rows(),
        }
    }
}

/// Encrypts `msg` in the mode implied by `key`.
pub fn encrypt<R: Rng + ?Sized>(
    key: EncryptionKey<'_>,
    msg: &[u8],
    rng: &mut R,
) -> Result<BitVector, McElieceError> {
    match key {
        EncryptionKey::Public(public_key) => public_key.encrypt(msg, rng),
        EncryptionKey::Private(private_key) => private_key.encrypt(msg, rng),
    }
}

/// Vector of length `len` with exactly `weight` ones at distinct uniform positions.
///
/// # Errors
///
/// Returns `McElieceError::InvalidParameters` if `weight > len`.
pub fn random_error_vector<R: Rng + ?Sized>(
    len: usize,
    weight: usize,
    rng: &mut R,
) -> Result<BitVector, McElieceError> {
    if weight > len {
        return Err(McElieceError::InvalidParameters(format!(
            "Cannot place {} errors in {} bits",
            weight, len
        )));
    }
    let mut error = vec![0u8; len];
    for pos in index::sample(rng, len, weight) {
        error[pos] = 1;
    }
    Ok(error)
}

/// Error vector of `block_count` consecutive blocks of `block_len` bits,
/// each holding exactly `per_block` ones at distinct uniform positions.
pub fn block_error_vector<R: Rng + ?Sized>(
    block_count: usize,
    block_len: usize,
    per_block: usize,
    rng: &mut R,
) -> Result<BitVector, McElieceError> {
    let mut error = Vec::with_capacity(block_count * block_len);
    for _ in 0..block_count {
        error.extend(random_error_vector(block_len, per_block, rng)?);
    }
    Ok(error)
}

fn check_message_len(msg: &[u8], expected: usize) -> Result<(), McElieceError> {
    if msg.len() != expected {
        return Err(McElieceError::DimensionMismatch(format!(
            "Message length ({}) must match k_total ({})",
            msg.len(),
            expected
        )));
    }
    Ok(())
}

impl PublicKey {
    /// Public-mode encryption: `c = m · G_pub + e` with `t` random errors.
    ///
    /// Errors are not block-aware, so decryption may miscorrect.
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<BitVector, McElieceError> {
        check_message_len(msg, self.k_total())?;

        let codeword = vector_matrix_mul(msg, &self.G_pub)?;
        let error = random_error_vector(codeword.len(), self.t, rng)?;
        vector_add(&codeword, &error)
    }
}

impl PrivateKey {
    /// Controlled-mode encryption: `c = ((m · S) · G_total + e) · P` where `e`
    /// holds `errors_per_block` errors in each block of `n` bits.
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<BitVector, McElieceError> {
        let error = block_error_vector(
            self.block_count(),
            self.code.n(),
            self.params.errors_per_block,
            rng,
        )?;
        self.encrypt_with_error(msg, &error)
    }

    /// Controlled-mode encryption with a caller-chosen error vector, given
    /// before the permutation is applied.
    pub fn encrypt_with_error(&self, msg: &[u8], error: &[u8]) -> Result<BitVector, McElieceError> {
        check_message_len(msg, self.S.rows())?;
        if error.len() != self.G_total.cols() {
            return Err(McElieceError::DimensionMismatch(format!(
                "Error vector length ({}) must match n_total ({})",
                error.len(),
                self.G_total.cols()
            )));
        }

        let scrambled = vector_matrix_mul(msg, &self.S)?;
        let codeword = vector_matrix_mul(&scrambled, &self.G_total)?;
        let noisy = vector_add(&codeword, error)?;
        vector_matrix_mul(&noisy, &self.P)
    }
}
