use mceliece_crypto::code::CodeKind;
use mceliece_crypto::errors::McElieceError;
use mceliece_crypto::keypair::{McElieceParams, generate_keys};

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn happy_flow() -> Result<(), McElieceError> {
    let mut rng = StdRng::seed_from_u64(12345);
    let params = McElieceParams::try_with(CodeKind::Bch, 5)?;

    let (_public_key, private_key) = generate_keys(params, &mut rng)?;

    let original: Vec<u8> = (0..params.k_total()).map(|i| ((i * 7) % 3 == 1) as u8).collect();

    let cipher = private_key.encrypt(&original, &mut rng)?;
    assert_eq!(cipher.len(), params.n_total());

    let decoded = private_key.decrypt(&cipher)?;

    assert_eq!(original, decoded);

    Ok(())
}
