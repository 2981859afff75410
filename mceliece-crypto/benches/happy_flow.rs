use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mceliece_crypto::code::CodeKind;
use mceliece_crypto::codec::{decrypt_string, encrypt_string};
use mceliece_crypto::keypair::{EncryptionKey, McElieceParams, generate_keys};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_happy_flow(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let original_data = "Heh safasdkjfhkjas fha sdf asda".to_string();

    for kind in [CodeKind::Hamming, CodeKind::Bch] {
        let params = McElieceParams::try_with(kind, 10).expect("build params");
        let (_, private_key) = generate_keys(params, &mut rng).expect("generate keys");

        c.bench_function(&format!("happy_flow {}", kind), |b| {
            b.iter(|| {
                let cipher = encrypt_string(
                    EncryptionKey::Private(&private_key),
                    black_box(&original_data),
                    &mut rng,
                )
                .expect("encrypt");
                let decoded = decrypt_string(&private_key, &cipher).expect("decrypt");
                black_box(decoded);
            })
        });
    }

    c.bench_function("keygen BCH L=10", |b| {
        let params = McElieceParams::try_with(CodeKind::Bch, 10).expect("build params");
        b.iter(|| black_box(generate_keys(params, &mut rng).expect("generate keys")))
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
