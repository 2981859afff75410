//! # Code Module
//!
//! Linear error-correcting codes over GF(2) behind the [`ErrorCorrectingCode`]
//! capability trait, and the closed [`Code`] enum the key material carries.

pub mod bch;
pub mod hamming;

use crate::errors::McElieceError;
use crate::gf2::matrix_ops::vector_matrix_mul;
use crate::gf2::{BitMatrix, BitVector, hamming_distance};

pub use bch::BchCode;
pub use hamming::HammingCode;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A binary linear `(n, k)` code correcting up to `t` errors per codeword.
pub trait ErrorCorrectingCode {
    /// Codeword length.
    fn n(&self) -> usize;
    /// Message length.
    fn k(&self) -> usize;
    /// Number of errors per codeword the decoder is guaranteed to correct.
    fn t(&self) -> usize;
    /// The `k × n` generator matrix.
    fn generator(&self) -> &BitMatrix;

    /// Encodes a `k`-bit message as `msg · G`.
    ///
    /// # Errors
    ///
    /// Returns `McElieceError::DimensionMismatch` if `msg.len() != k`.
    fn encode(&self, msg: &[u8]) -> Result<BitVector, McElieceError> {
        if msg.len() != self.k() {
            return Err(McElieceError::DimensionMismatch(format!(
                "Message length ({}) must match code dimension k ({})",
                msg.len(),
                self.k()
            )));
        }
        vector_matrix_mul(msg, self.generator())
    }

    /// Decodes an `n`-bit received word into a `k`-bit message.
    ///
    /// Returns the original message whenever at most `t` bits were flipped.
    /// With more errors the result is unspecified (bounded-distance decoding
    /// may silently miscorrect) but it always has `k` bits.
    ///
    /// # Errors
    ///
    /// Returns `McElieceError::DimensionMismatch` if `received.len() != n`.
    fn decode(&self, received: &[u8]) -> Result<BitVector, McElieceError>;
}

/// Which of the supported codes a key is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeKind {
    /// Hamming (15, 11), corrects one error.
    Hamming,
    /// Binary BCH (15, 7), corrects two errors.
    Bch,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Hamming => write!(f, "Hamming(15, 11)"),
            CodeKind::Bch => write!(f, "BCH(15, 7)"),
        }
    }
}

/// One of the two supported codes. Immutable once built.
///
/// Serializes as its [`CodeKind`] and is rebuilt on deserialization, so the
/// decoder tables never travel with a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CodeKind", into = "CodeKind")]
pub enum Code {
    Hamming(HammingCode),
    Bch(BchCode),
}

impl Code {
    pub fn new(kind: CodeKind) -> Self {
        match kind {
            CodeKind::Hamming => Code::Hamming(HammingCode::new()),
            CodeKind::Bch => Code::Bch(BchCode::new()),
        }
    }

    pub fn kind(&self) -> CodeKind {
        match self {
            Code::Hamming(_) => CodeKind::Hamming,
            Code::Bch(_) => CodeKind::Bch,
        }
    }

    /// Distance between `received` and the re-encoding of its decoded message.
    ///
    /// Decoding never signals miscorrection by itself; a result above `t`
    /// proves the word was not within reach of any codeword.
    pub fn residual_distance(&self, received: &[u8]) -> Result<usize, McElieceError> {
        let decoded = self.decode(received)?;
        let reencoded = self.encode(&decoded)?;
        Ok(hamming_distance(&reencoded, received))
    }
}

impl ErrorCorrectingCode for Code {
    fn n(&self) -> usize {
        match self {
            Code::Hamming(code) => code.n(),
            Code::Bch(code) => code.n(),
        }
    }

    fn k(&self) -> usize {
        match self {
            Code::Hamming(code) => code.k(),
            Code::Bch(code) => code.k(),
        }
    }

    fn t(&self) -> usize {
        match self {
            Code::Hamming(code) => code.t(),
            Code::Bch(code) => code.t(),
        }
    }

    fn generator(&self) -> &BitMatrix {
        match self {
            Code::Hamming(code) => code.generator(),
            Code::Bch(code) => code.generator(),
        }
    }

    fn decode(&self, received: &[u8]) -> Result<BitVector, McElieceError> {
        match self {
            Code::Hamming(code) => code.decode(received),
            Code::Bch(code) => code.decode(received),
        }
    }
}

impl From<CodeKind> for Code {
    fn from(kind: CodeKind) -> Self {
        Code::new(kind)
    }
}

impl From<Code> for CodeKind {
    fn from(code: Code) -> Self {
        code.kind()
    }
}

/// Checks the received word length shared by every decoder.
pub(crate) fn check_received_len(received: &[u8], n: usize) -> Result<(), McElieceError> {
    if received.len() != n {
        return Err(McElieceError::DimensionMismatch(format!(
            "Received word length ({}) must match code length n ({})",
            received.len(),
            n
        )));
    }
    Ok(())
}
