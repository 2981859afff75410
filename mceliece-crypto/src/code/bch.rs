//! Binary BCH (15, 7) code with designed distance 5.
//!
//! Field: GF(16) = GF(2)[x]/(x⁴ + x + 1) with primitive element α.
//! Generator polynomial: g(x) = m₁(x)·m₃(x) = x⁸ + x⁷ + x⁶ + x⁴ + 1.
//! Encoding is systematic, `[message | parity]`, and bit position `p`
//! carries the coefficient of `x^(14 - p)`.

use crate::code::{ErrorCorrectingCode, check_received_len};
use crate::errors::McElieceError;
use crate::gf2::{BitMatrix, BitVector};
use crate::preset::field_tables::{GF16_EXP, GF16_LOG, GF16_ORDER};

const N: usize = 15;
const K: usize = 7;
const T: usize = 2;

/// g(x) = x⁸ + x⁷ + x⁶ + x⁴ + 1, bit `i` holding the coefficient of `xⁱ`.
pub const GENERATOR_POLY: u16 = 0b1_1101_0001;
const GENERATOR_DEGREE: usize = N - K;

/// Double-error-correcting BCH (15, 7) code with a Peterson-style decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BchCode {
    generator: BitMatrix,
}

impl Default for BchCode {
    fn default() -> Self {
        Self::new()
    }
}

fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    GF16_EXP[GF16_LOG[a as usize] as usize + GF16_LOG[b as usize] as usize]
}

/// `a / b` for `b != 0`.
fn gf_div(a: u8, b: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let exponent = GF16_LOG[a as usize] as usize + GF16_ORDER - GF16_LOG[b as usize] as usize;
    GF16_EXP[exponent]
}

/// Bit position holding the coefficient of `x^degree`.
fn position_of_degree(degree: usize) -> usize {
    N - 1 - degree
}

impl BchCode {
    pub fn new() -> Self {
        let mut generator = BitMatrix::zeros(K, N);
        for i in 0..K {
            let mut unit = [0u8; K];
            unit[i] = 1;
            for (j, bit) in Self::systematic_codeword(&unit).into_iter().enumerate() {
                generator.set(i, j, bit);
            }
        }
        Self { generator }
    }

    /// `[m | (m(x)·x⁸ mod g(x))]` by polynomial long division.
    fn systematic_codeword(msg: &[u8; K]) -> BitVector {
        let mut remainder = vec![0u8; N];
        remainder[..K].copy_from_slice(msg);
        for i in 0..K {
            if remainder[i] == 1 {
                for j in 0..=GENERATOR_DEGREE {
                    remainder[i + j] ^= ((GENERATOR_POLY >> (GENERATOR_DEGREE - j)) & 1) as u8;
                }
            }
        }

        let mut codeword = msg.to_vec();
        codeword.extend_from_slice(&remainder[K..]);
        codeword
    }

    /// Evaluates the received polynomial at `α^power`.
    pub fn syndrome(&self, received: &[u8], power: usize) -> u8 {
        received
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit & 1 == 1)
            .fold(0u8, |acc, (pos, _)| {
                let degree = N - 1 - pos;
                acc ^ GF16_EXP[(power * degree) % GF16_ORDER]
            })
    }

    /// Error positions for syndromes `S₁`, `S₃`, or `None` if more than two bits are wrong.
    fn locate_errors(s1: u8, s3: u8) -> Option<Vec<usize>> {
        if s1 == 0 {
            return if s3 == 0 { Some(Vec::new()) } else { None };
        }

        let s1_cubed = gf_mul(gf_mul(s1, s1), s1);
        if s3 == s1_cubed {
            return Some(vec![position_of_degree(GF16_LOG[s1 as usize] as usize)]);
        }

        // locator z² + σ₁z + σ₂ has the two error locators α^d as roots
        let sigma1 = s1;
        let sigma2 = gf_div(s3 ^ s1_cubed, s1);
        let positions: Vec<usize> = (0..GF16_ORDER)
            .filter(|&d| {
                let z = GF16_EXP[d];
                gf_mul(z, z) ^ gf_mul(sigma1, z) ^ sigma2 == 0
            })
            .map(position_of_degree)
            .collect();

        (positions.len() == T).then_some(positions)
    }
}

impl ErrorCorrectingCode for BchCode {
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
        check_received_len(received, N)?;
        let mut word: BitVector = received.iter().map(|&b| b & 1).collect();

        let s1 = self.syndrome(&word, 1);
        let s3 = self.syndrome(&word, 3);
        match Self::locate_errors(s1, s3) {
            Some(positions) => {
                for &pos in &positions {
                    word[pos] ^= 1;
                }
                if !positions.is_empty() {
                    tracing::trace!(?positions, "bch: corrected bits");
                }
            }
            None => tracing::trace!(s1, s3, "bch: more than two errors, leaving word as is"),
        }

        Ok(word[..K].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::Itertools;

    fn all_messages() -> impl Iterator<Item = Vec<u8>> {
        (0u32..1 << K).map(|v| (0..K).map(|i| ((v >> i) & 1) as u8).collect())
    }

    #[test]
    fn test_field_tables() {
        assert_eq!(GF16_EXP[4], 0b0011); // α⁴ = α + 1
        assert_eq!(GF16_EXP[15], 1);
        assert_eq!(gf_mul(GF16_EXP[7], GF16_EXP[10]), GF16_EXP[2]);
        assert_eq!(gf_div(GF16_EXP[3], GF16_EXP[5]), GF16_EXP[13]);
    }

    #[test]
    fn test_generator_is_systematic() {
        let code = BchCode::new();
        let g = code.generator();
        assert_eq!(g.submatrix(0, 0, K, K).unwrap(), BitMatrix::identity(K));
        assert_eq!(g.row(0), &[1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0]);
        assert_eq!(g.row(6), &[0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_codewords_have_zero_syndromes_and_distance_five() {
        let code = BchCode::new();
        let mut min_weight = N;
        for msg in all_messages() {
            let word = code.encode(&msg).unwrap();
            assert_eq!(code.syndrome(&word, 1), 0);
            assert_eq!(code.syndrome(&word, 3), 0);
            let weight = crate::gf2::weight(&word);
            if weight > 0 {
                min_weight = min_weight.min(weight);
            }
        }
        assert_eq!(min_weight, 5);
    }

    #[test]
    fn test_decode_corrects_single_errors() {
        let code = BchCode::new();
        for msg in all_messages() {
            let word = code.encode(&msg).unwrap();
            assert_eq!(code.decode(&word).unwrap(), msg);
            for pos in 0..N {
                let mut received = word.clone();
                received[pos] ^= 1;
                assert_eq!(code.decode(&received).unwrap(), msg);
            }
        }
    }

    #[test]
    fn test_decode_corrects_every_pair_of_errors() {
        let code = BchCode::new();
        for msg in all_messages() {
            let word = code.encode(&msg).unwrap();
            for (a, b) in (0..N).tuple_combinations() {
                let mut received = word.clone();
                received[a] ^= 1;
                received[b] ^= 1;
                assert_eq!(code.decode(&received).unwrap(), msg, "errors at {} and {}", a, b);
            }
        }
    }

    #[test]
    fn test_triple_errors_do_not_crash() {
        let code = BchCode::new();
        let msg = vec![1, 1, 0, 1, 0, 0, 1];
        let word = code.encode(&msg).unwrap();
        for (a, b, c) in (0..N).tuple_combinations() {
            let mut received = word.clone();
            received[a] ^= 1;
            received[b] ^= 1;
            received[c] ^= 1;
            assert_eq!(code.decode(&received).unwrap().len(), K);
        }
    }
}
