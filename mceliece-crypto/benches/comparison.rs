use aes_gcm::Aes256Gcm;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::ChaCha20Poly1305;
use criterion::{Bencher, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mceliece_crypto::code::CodeKind;
use mceliece_crypto::codec::{decrypt_string, encrypt_string};
use mceliece_crypto::keypair::{
    EncryptionKey, McElieceParams, PrivateKey, PublicKey, encrypt, generate_keys,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BLOCKS: usize = 10;
const TEXT_LEN: usize = 1024;

fn setup(kind: CodeKind, rng: &mut StdRng) -> (PublicKey, PrivateKey) {
    let params = McElieceParams::try_with(kind, BLOCKS).expect("Failed to create params");
    generate_keys(params, rng).expect("Failed to generate keys")
}

fn random_message(len: usize, rng: &mut StdRng) -> Vec<u8> {
    (0..len).map(|_| rng.random::<bool>() as u8).collect()
}

/// Same L for both codes: Hamming carries more bits per block, BCH corrects more.
fn bench_codes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut group = c.benchmark_group(format!("Codes at L={}", BLOCKS));

    for kind in [CodeKind::Hamming, CodeKind::Bch] {
        let (_, private_key) = setup(kind, &mut rng);
        let msg = random_message(private_key.params.k_total(), &mut rng);
        let ciphertext = private_key.encrypt(&msg, &mut rng).expect("encrypt");

        group.bench_with_input(BenchmarkId::new("encrypt", kind), &msg, |b, m| {
            b.iter(|| private_key.encrypt(black_box(m), &mut rng).expect("encrypt"))
        });
        group.bench_with_input(BenchmarkId::new("decrypt", kind), &ciphertext, |b, ct| {
            b.iter(|| private_key.decrypt(black_box(ct)).expect("decrypt"))
        });
    }
    group.finish();
}

/// Public mode touches only `G_pub`; controlled mode runs three products.
fn bench_modes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(54321);
    let (public_key, private_key) = setup(CodeKind::Bch, &mut rng);
    let msg = random_message(public_key.k_total(), &mut rng);

    let mut group = c.benchmark_group("Encryption modes BCH");
    for (label, key) in [
        ("public", EncryptionKey::Public(&public_key)),
        ("controlled", EncryptionKey::Private(&private_key)),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| encrypt(key, black_box(&msg), &mut rng).expect("encrypt"))
        });
    }
    group.finish();
}

fn aead_round_trip<C: Aead + AeadCore>(b: &mut Bencher, cipher: &C, data: &[u8]) {
    b.iter(|| {
        let nonce = C::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, black_box(data))
            .expect("AEAD encryption failed");
        cipher
            .decrypt(&nonce, ciphertext.as_slice())
            .expect("AEAD decryption failed")
    });
}

/// Text round trip against symmetric baselines.
fn bench_text_baseline(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(777);
    let (_, private_key) = setup(CodeKind::Bch, &mut rng);

    // printable ASCII, so no null bytes get dropped on decode
    let text: String = (0..TEXT_LEN)
        .map(|_| rng.random_range(b' '..=b'~') as char)
        .collect();

    let mut group = c.benchmark_group("Text round trip 1 KiB");
    group.bench_function("McEliece BCH", |b| {
        b.iter(|| {
            let payload =
                encrypt_string(EncryptionKey::Private(&private_key), black_box(&text), &mut rng)
                    .expect("McEliece encryption failed");
            decrypt_string(&private_key, &payload).expect("McEliece decryption failed")
        })
    });

    let aes = Aes256Gcm::new(&Aes256Gcm::generate_key(&mut OsRng));
    group.bench_function("AES-256-GCM", |b| aead_round_trip(b, &aes, text.as_bytes()));

    let chacha = ChaCha20Poly1305::new(&ChaCha20Poly1305::generate_key(&mut OsRng));
    group.bench_function("ChaCha20Poly1305", |b| {
        aead_round_trip(b, &chacha, text.as_bytes())
    });
    group.finish();
}

criterion_group!(benches, bench_codes, bench_modes, bench_text_baseline);
criterion_main!(benches);
