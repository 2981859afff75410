use mceliece_crypto::codec::{decrypt_string, encrypt_string};
use mceliece_crypto::code::CodeKind;
use mceliece_crypto::errors::McElieceError;
use mceliece_crypto::keypair::{EncryptionKey, McElieceParams, generate_keys};

use rand::SeedableRng;
use rand::rngs::StdRng;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

#[test]
fn showcase_cipher_decipher_ukrainian_text() -> Result<(), McElieceError> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(12345);
    let params = McElieceParams::try_with(CodeKind::Hamming, 10)?;
    let (_public_key, private_key) = generate_keys(params, &mut rng)?;

    let original = "Вітання від крипто системи 1 учасникам семінару на його першому засіданні";

    let cipher = encrypt_string(EncryptionKey::Private(&private_key), original, &mut rng)?;

    dbg!(&cipher);

    let decoded = decrypt_string(&private_key, &cipher)?;

    assert_eq!(original, decoded);

    Ok(())
}

#[test]
fn showcase_bch_with_two_errors_per_block() -> Result<(), McElieceError> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(777);
    let params = McElieceParams::try_with(CodeKind::Bch, 8)?.with_errors_per_block(2)?;
    let (_public_key, private_key) = generate_keys(params, &mut rng)?;

    let original = "Heh safasdkjfhkjas fha sdf asda";

    let cipher = encrypt_string(EncryptionKey::Private(&private_key), original, &mut rng)?;
    let decoded = decrypt_string(&private_key, &cipher)?;

    assert_eq!(original, decoded);

    Ok(())
}

#[test]
fn tampered_payload_is_rejected() -> Result<(), McElieceError> {
    let mut rng = StdRng::seed_from_u64(5);
    let params = McElieceParams::try_with(CodeKind::Hamming, 2)?;
    let (_public_key, private_key) = generate_keys(params, &mut rng)?;

    assert!(matches!(
        decrypt_string(&private_key, "[\"@@@\"]"),
        Err(McElieceError::EncodingError(_))
    ));
    assert!(matches!(
        decrypt_string(&private_key, "not json"),
        Err(McElieceError::SerializationError(_))
    ));
    // valid base64, wrong length for a 30-bit ciphertext
    assert!(decrypt_string(&private_key, "[\"AAAA\"]").is_err());

    Ok(())
}
