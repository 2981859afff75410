//! Key generation, encryption and decryption.

pub mod decrypt;
pub mod encrypt;
pub mod keys;
pub mod params;

pub use decrypt::decrypt;
pub use encrypt::{EncryptionKey, encrypt};
pub use keys::{PrivateKey, PublicKey, generate_keys};
pub use params::McElieceParams;
