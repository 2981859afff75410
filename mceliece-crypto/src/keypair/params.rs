use crate::code::{Code, CodeKind, ErrorCorrectingCode};
use crate::errors::McElieceError;

use serde::{Deserialize, Serialize};

/// Largest accepted block count L. Key matrices grow as L², so this keeps
/// `P` (n·L × n·L) within a few hundred megabytes and every size product far
/// from overflow.
pub const MAX_BLOCK_COUNT: usize = 1024;

/// Parameters shared by key generation, encryption and decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct McElieceParams {
    /// Code replicated along the diagonal of `G_total`.
    pub code: CodeKind,
    /// Number of diagonal blocks L.
    pub block_count: usize,
    /// Errors injected into every block by controlled-mode encryption.
    /// Defaults to one and may be raised up to the code's `t`.
    pub errors_per_block: usize,
}

impl McElieceParams {
    /// Creates parameters with one injected error per block.
    pub fn try_with(code: CodeKind, block_count: usize) -> Result<Self, McElieceError> {
        if block_count == 0 {
            return Err(McElieceError::InvalidParameters(
                "Block count L must be > 0".to_string(),
            ));
        }
        if block_count > MAX_BLOCK_COUNT {
            return Err(McElieceError::InvalidParameters(format!(
                "Block count L must be <= {}, got {}",
                MAX_BLOCK_COUNT, block_count
            )));
        }

        Ok(Self {
            code,
            block_count,
            errors_per_block: 1,
        })
    }

    /// Sets the controlled-mode error count per block.
    ///
    /// # Errors
    ///
    /// Returns `McElieceError::InvalidParameters` unless `1 <= errors <= t`.
    pub fn with_errors_per_block(mut self, errors: usize) -> Result<Self, McElieceError> {
        let t = Code::new(self.code).t();
        if errors == 0 || errors > t {
            return Err(McElieceError::InvalidParameters(format!(
                "Errors per block must be in 1..={} for {}, got {}",
                t, self.code, errors
            )));
        }
        self.errors_per_block = errors;
        Ok(self)
    }

    /// Re-checks the invariants, for parameters that arrived through deserialization.
    pub fn validate(&self) -> Result<(), McElieceError> {
        Self::try_with(self.code, self.block_count)?.with_errors_per_block(self.errors_per_block)?;
        Ok(())
    }

    /// Message length k·L.
    pub fn k_total(&self) -> usize {
        Code::new(self.code).k() * self.block_count
    }

    /// Ciphertext length n·L.
    pub fn n_total(&self) -> usize {
        Code::new(self.code).n() * self.block_count
    }

    /// Error budget published with the public key: t·L.
    pub fn public_error_budget(&self) -> usize {
        Code::new(self.code).t() * self.block_count
    }

    /// Ciphertext length over message length.
    pub fn expansion_rate(&self) -> f64 {
        self.n_total() as f64 / self.k_total() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_sizes() {
        let params = McElieceParams::try_with(CodeKind::Hamming, 3).unwrap();
        assert_eq!(params.k_total(), 33);
        assert_eq!(params.n_total(), 45);
        assert_eq!(params.public_error_budget(), 3);
        assert_eq!(params.errors_per_block, 1);

        let params = McElieceParams::try_with(CodeKind::Bch, 5).unwrap();
        assert_eq!(params.k_total(), 35);
        assert_eq!(params.n_total(), 75);
        assert_eq!(params.public_error_budget(), 10);
        assert!((params.expansion_rate() - 75.0 / 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_blocks_rejected() {
        assert!(McElieceParams::try_with(CodeKind::Bch, 0).is_err());
    }

    #[test]
    fn test_block_count_cap() {
        let params = McElieceParams::try_with(CodeKind::Hamming, MAX_BLOCK_COUNT).unwrap();
        assert_eq!(params.n_total(), 15 * MAX_BLOCK_COUNT);

        for blocks in [MAX_BLOCK_COUNT + 1, usize::MAX] {
            assert!(matches!(
                McElieceParams::try_with(CodeKind::Hamming, blocks),
                Err(McElieceError::InvalidParameters(_))
            ));
        }

        let mut params = McElieceParams::try_with(CodeKind::Bch, 2).unwrap();
        params.block_count = usize::MAX;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_errors_per_block_bounds() {
        let hamming = McElieceParams::try_with(CodeKind::Hamming, 2).unwrap();
        assert!(hamming.with_errors_per_block(2).is_err());
        assert!(hamming.with_errors_per_block(0).is_err());

        let bch = McElieceParams::try_with(CodeKind::Bch, 2).unwrap();
        assert_eq!(bch.with_errors_per_block(2).unwrap().errors_per_block, 2);
        assert!(bch.with_errors_per_block(3).is_err());
    }

    #[test]
    fn test_validate_catches_tampered_params() {
        let mut params = McElieceParams::try_with(CodeKind::Hamming, 2).unwrap();
        params.validate().unwrap();
        params.errors_per_block = 5;
        assert!(params.validate().is_err());
    }
}
