//! Hamming (15, 11) code with parity bits at the power-of-two positions.

use crate::code::{ErrorCorrectingCode, check_received_len};
use crate::errors::McElieceError;
use crate::gf2::matrix_ops::matrix_vector_mul;
use crate::gf2::{BitMatrix, BitVector};

const N: usize = 15;
const K: usize = 11;
const T: usize = 1;
/// Number of parity bits.
const R: usize = 4;

/// 0-indexed codeword slots of the parity bits (1-indexed 1, 2, 4, 8).
pub const PARITY_POSITIONS: [usize; R] = [0, 1, 3, 7];
/// 0-indexed codeword slots of the data bits, in message order.
pub const DATA_POSITIONS: [usize; K] = [2, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14];

/// Single-error-correcting Hamming (15, 11) code.
///
/// Column `i` of the parity-check matrix is the binary representation of
/// `i + 1`, so a non-zero syndrome read as an integer is the 1-indexed
/// position of the flipped bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingCode {
    generator: BitMatrix,
    parity_check: BitMatrix,
}

impl Default for HammingCode {
    fn default() -> Self {
        Self::new()
    }
}

impl HammingCode {
    pub fn new() -> Self {
        let mut generator = BitMatrix::zeros(K, N);
        for (msg_bit, &pos) in DATA_POSITIONS.iter().enumerate() {
            generator.set(msg_bit, pos, 1);
            // parity slot 2^j covers every position whose 1-indexed number has bit j set
            let one_indexed = pos + 1;
            for (j, &parity_pos) in PARITY_POSITIONS.iter().enumerate() {
                if one_indexed & (1 << j) != 0 {
                    generator.set(msg_bit, parity_pos, 1);
                }
            }
        }

        let parity_check = BitMatrix::from_fn(R, N, |j, i| (((i + 1) >> j) & 1) as u8);

        Self {
            generator,
            parity_check,
        }
    }

    /// The `4 × 15` parity-check matrix `H`.
    pub fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// Syndrome `H · r` packed into an integer, bit `j` weighing `2^j`.
    pub fn syndrome(&self, received: &[u8]) -> Result<usize, McElieceError> {
        check_received_len(received, N)?;
        let s = matrix_vector_mul(&self.parity_check, received)?;
        Ok(s.iter()
            .enumerate()
            .fold(0usize, |acc, (j, &bit)| acc | ((bit as usize) << j)))
    }
}

impl ErrorCorrectingCode for HammingCode {
    fn n(&self) -> usize {
        N
    }

    fn k(&self) -> usize {
        K
    }

    fn t(&self) -> usize {
        T
    }

    fn generator(&self) -> &BitMatrix {
        &self.generator
    }

    fn decode(&self, received: &[u8]) -> Result<BitVector, McElieceError> {
        let syndrome = self.syndrome(received)?;
        let mut word = received.to_vec();

        if (1..=N).contains(&syndrome) {
            tracing::trace!(position = syndrome - 1, "hamming: correcting bit");
            word[syndrome - 1] ^= 1;
        }

        Ok(DATA_POSITIONS.iter().map(|&pos| word[pos] & 1).collect())
    }
}
