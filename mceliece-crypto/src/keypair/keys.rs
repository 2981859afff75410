use crate::code::{Code, ErrorCorrectingCode};
use crate::errors::McElieceError;
use crate::gf2::matrix_ops::{block_diagonal, multiply};
use crate::gf2::{BitMatrix, random_invertible, random_permutation};
use crate::keypair::params::McElieceParams;

use rand::Rng;

use serde::{Deserialize, Serialize};

/// Public key: the masked generator matrix and the total error budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// `G_pub = S · G_total · P`, k_total × n_total.
    pub G_pub: BitMatrix,
    /// Errors a sender injects in public mode: `L · t`.
    pub t: usize,
}

/// Private key: the masking matrices plus the block structure they hide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    pub params: McElieceParams,
    /// Invertible scrambling matrix, k_total × k_total.
    pub S: BitMatrix,
    /// Permutation matrix, n_total × n_total.
    pub P: BitMatrix,
    /// Block-diagonal generator with L copies of the code's generator.
    pub G_total: BitMatrix,
    pub code: Code,
}

impl PrivateKey {
    /// Samples a fresh private key.
    ///
    /// 1. `G_total` = L copies of the code's generator along the diagonal
    /// 2. `S` = random invertible k_total × k_total matrix
    /// 3. `P` = random n_total × n_total permutation matrix
    ///
    /// Deterministic for a seeded `rng`.
    pub fn try_with<R: Rng + ?Sized>(
        params: McElieceParams,
        rng: &mut R,
    ) -> Result<Self, McElieceError> {
        params.validate()?;

        let code = Code::new(params.code);
        let G_total = block_diagonal(code.generator(), params.block_count);
        let S = random_invertible(params.k_total(), rng)?;
        let P = random_permutation(params.n_total(), rng);

        tracing::debug!(
            code = %params.code,
            blocks = params.block_count,
            k_total = params.k_total(),
            n_total = params.n_total(),
            "generated private key"
        );

        Ok(Self {
            params,
            S,
            P,
            G_total,
            code,
        })
    }

    /// Derives the public key `G_pub = S · G_total · P` with budget `L · t`.
    pub fn get_public_key(&self) -> Result<PublicKey, McElieceError> {
        let SG = multiply(&self.S, &self.G_total)?;
        let G_pub = multiply(&SG, &self.P)?;

        Ok(PublicKey {
            G_pub,
            t: self.params.public_error_budget(),
        })
    }

    pub fn block_count(&self) -> usize {
        self.params.block_count
    }

    /// Checks that the stored matrices agree with the parameters and the code.
    ///
    /// Invertibility of `S` is not checked here; decryption reports it as `Singular`.
    pub fn validate(&self) -> Result<(), McElieceError> {
        self.params.validate()?;
        if self.code.kind() != self.params.code {
            return Err(McElieceError::InvalidKey(format!(
                "Key code {} does not match parameters code {}",
                self.code.kind(),
                self.params.code
            )));
        }

        let k_total = self.params.k_total();
        let n_total = self.params.n_total();
        if self.S.shape() != (k_total, k_total) {
            return Err(McElieceError::InvalidKey(format!(
                "S is {}x{}, expected {}x{}",
                self.S.rows(),
                self.S.cols(),
                k_total,
                k_total
            )));
        }
        if self.P.shape() != (n_total, n_total) || !self.P.is_permutation() {
            return Err(McElieceError::InvalidKey(format!(
                "P must be a {}x{} permutation matrix",
                n_total, n_total
            )));
        }
        if self.G_total != block_diagonal(self.code.generator(), self.params.block_count) {
            return Err(McElieceError::InvalidKey(
                "G_total is not the block-diagonal generator of the key's code".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, McElieceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates a private key.
    pub fn from_json(json: &str) -> Result<Self, McElieceError> {
        let key: Self = serde_json::from_str(json)?;
        key.validate()?;
        Ok(key)
    }
}

impl PublicKey {
    /// Message length accepted by `PublicKey::encrypt`.
    pub fn k_total(&self) -> usize {
        self.G_pub.rows()
    }

    /// Ciphertext length produced by this key.
    pub fn n_total(&self) -> usize {
        self.G_pub.cols()
    }

    /// Size of `G_pub` packed one bit per entry.
    pub fn size_bytes(&self) -> usize {
        (self.G_pub.rows() * self.G_pub.cols()).div_ceil(8)
    }

    pub fn to_json(&self) -> Result<String, McElieceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, McElieceError> {
        let key: Self = serde_json::from_str(json)?;
        if key.k_total() == 0 || key.n_total() == 0 {
            return Err(McElieceError::InvalidKey(format!(
                "G_pub must be non-empty, got {}x{}",
                key.k_total(),
                key.n_total()
            )));
        }
        if key.t > key.n_total() {
            return Err(McElieceError::InvalidKey(format!(
                "Error budget {} exceeds ciphertext length {}",
                key.t,
                key.n_total()
            )));
        }
        Ok(key)
    }
}

/// Generates a key pair for `params`.
///
/// No side effects beyond consuming randomness from `rng`.
pub fn generate_keys<R: Rng + ?Sized>(
    params: McElieceParams,
    rng: &mut R,
) -> Result<(PublicKey, PrivateKey), McElieceError> {
    let private_key = PrivateKey::try_with(params, rng)?;
    let public_key = private_key.get_public_key()?;
    Ok((public_key, private_key))
}
