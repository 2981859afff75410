//! Text ⇄ bit-vector conversion and a string-level wrapper around the cipher.
//!
//! Plaintext bytes become MSB-first bits, zero-padded to whole messages.
//! Each ciphertext chunk is packed into bytes and base64-encoded; the list of
//! chunks travels as a JSON array.

use crate::errors::McElieceError;
use crate::gf2::BitVector;
use crate::keypair::{EncryptionKey, PrivateKey, encrypt};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use rand::Rng;

/// Expands bytes into bits, most significant bit first.
///
/// # Example
///
/// ```
/// # use mceliece_crypto::codec::bytes_to_bits;
/// assert_eq!(bytes_to_bits(b"A"), vec![0, 1, 0, 0, 0, 0, 0, 1]);
/// ```
pub fn bytes_to_bits(bytes: &[u8]) -> BitVector {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// Packs bits MSB-first into bytes, zero-padding the last byte.
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | ((bit & 1) << (7 - i)))
        })
        .collect()
}

/// Inverse of [`pack_bits`] for a known bit length.
///
/// # Errors
///
/// Returns `McElieceError::EncodingError` if `bytes` does not hold exactly `len` bits.
pub fn unpack_bits(bytes: &[u8], len: usize) -> Result<BitVector, McElieceError> {
    if bytes.len() != len.div_ceil(8) {
        return Err(McElieceError::EncodingError(format!(
            "Expected {} bytes for {} bits, got {}",
            len.div_ceil(8),
            len,
            bytes.len()
        )));
    }
    let mut bits = bytes_to_bits(bytes);
    bits.truncate(len);
    Ok(bits)
}

/// Packs bits into bytes and drops every zero byte.
///
/// Padding disappears this way, but so do genuine null bytes.
///
/// # Example
///
/// ```
/// # use mceliece_crypto::codec::bits_to_bytes;
/// assert_eq!(bits_to_bytes(&[0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0]), b"A".to_vec());
/// ```
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    pack_bits(bits).into_iter().filter(|&b| b != 0).collect()
}

/// Encrypts UTF-8 text chunk by chunk and serializes the ciphertext.
pub fn encrypt_string<R: Rng + ?Sized>(
    key: EncryptionKey<'_>,
    data: &str,
    rng: &mut R,
) -> Result<String, McElieceError> {
    let k_total = key.k_total();
    if k_total == 0 {
        return Err(McElieceError::InvalidKey(
            "Key accepts zero-length messages".to_string(),
        ));
    }
    let mut bits = bytes_to_bits(data.as_bytes());
    let padded_len = bits.len().div_ceil(k_total).max(1) * k_total;
    bits.resize(padded_len, 0);

    let mut blocks = Vec::with_capacity(padded_len / k_total);
    for chunk in bits.chunks_exact(k_total) {
        let ciphertext = encrypt(key, chunk, rng)?;
        blocks.push(STANDARD.encode(pack_bits(&ciphertext)));
    }

    tracing::debug!(chunks = blocks.len(), n_total = key.n_total(), "encrypted text");
    Ok(serde_json::to_string(&blocks)?)
}

/// Inverse of [`encrypt_string`]. Trailing and embedded null bytes are dropped.
pub fn decrypt_string(private_key: &PrivateKey, payload: &str) -> Result<String, McElieceError> {
    let blocks: Vec<String> = serde_json::from_str(payload)?;
    let n_total = private_key.P.rows();

    let mut bits = Vec::with_capacity(blocks.len() * private_key.S.rows());
    for block in blocks {
        let bytes = STANDARD
            .decode(&block)
            .map_err(|e| McElieceError::EncodingError(format!("Base64 decoding failed: {}", e)))?;
        let ciphertext = unpack_bits(&bytes, n_total)?;
        bits.extend(private_key.decrypt(&ciphertext)?);
    }

    String::from_utf8(bits_to_bytes(&bits)).map_err(|e| {
        McElieceError::EncodingError(format!(
            "Failed to convert decoded bytes to UTF-8: {}",
            e
        ))
    })
}
