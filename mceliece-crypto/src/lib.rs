#![allow(non_snake_case)]

//! # McEliece Crypto
//!
//! A McEliece public-key cryptosystem over block-diagonal Hamming (15, 11) and
//! BCH (15, 7) codes: exact GF(2) linear algebra, key generation that masks
//! the block structure behind a scrambler `S` and a permutation `P`, and the
//! encrypt/decrypt protocols on top of them.
//!
//! Randomness is always passed in explicitly, so a seeded generator reproduces
//! every matrix, permutation and error position.
//!
//! ```
//! use mceliece_crypto::code::CodeKind;
//! use mceliece_crypto::keypair::{McElieceParams, generate_keys};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let params = McElieceParams::try_with(CodeKind::Hamming, 3).unwrap();
//! let (_public_key, private_key) = generate_keys(params, &mut rng).unwrap();
//!
//! let msg = vec![1u8; params.k_total()];
//! let ciphertext = private_key.encrypt(&msg, &mut rng).unwrap();
//! assert_eq!(private_key.decrypt(&ciphertext).unwrap(), msg);
//! ```

pub mod code;
pub mod codec;
pub mod errors;
pub mod gf2;
pub mod keypair;
pub mod preset;

pub use code::{Code, CodeKind, ErrorCorrectingCode};
pub use errors::McElieceError;
pub use gf2::{BitMatrix, BitVector};
pub use keypair::{McElieceParams, PrivateKey, PublicKey, decrypt, encrypt, generate_keys};
