use nebula_ecdsa::primitives::U256;
use nebula_ecdsa::rng::Csprng;
use nebula_ecdsa::{p256, secp256k1};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const D: U256 =
    U256::from_be_hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
const Z: U256 =
    U256::from_be_hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

pub fn bench_secp256k1(c: &mut Criterion) {
    let key = secp256k1::generate_public_key_from_private_key_data(&D).unwrap();
    let sig = secp256k1::ecsign(&D, &Z).unwrap();
    let mut rng = Csprng::from_seed([7u8; 32]);

    c.bench_function("secp256k1 keygen", |b| {
        b.iter(|| secp256k1::generate_public_key_from_private_key_data(black_box(&D)))
    });

    c.bench_function("secp256k1 sign", |b| {
        b.iter(|| secp256k1::ecsign_with_rng(black_box(&D), black_box(&Z), &mut rng))
    });

    c.bench_function("secp256k1 verify", |b| {
        b.iter(|| secp256k1::ecverify(&key.x, &key.y, &sig.r, &sig.s, black_box(&Z)))
    });

    c.bench_function("secp256k1 recover", |b| {
        b.iter(|| secp256k1::ecrecover(sig.v, &sig.r, &sig.s, black_box(&Z)))
    });

    c.bench_function("secp256k1 decompress", |b| {
        b.iter(|| secp256k1::decompress_key(black_box(&key.x), key.y_parity()))
    });
}

pub fn bench_p256(c: &mut Criterion) {
    let key = p256::generate_public_key_from_private_key_data(&D).unwrap();
    let sig = p256::ecsign(&D, &Z).unwrap();
    let mut rng = Csprng::from_seed([7u8; 32]);

    c.bench_function("p256 keygen", |b| {
        b.iter(|| p256::generate_public_key_from_private_key_data(black_box(&D)))
    });

    c.bench_function("p256 sign", |b| {
        b.iter(|| p256::ecsign_with_rng(black_box(&D), black_box(&Z), &mut rng))
    });

    c.bench_function("p256 verify", |b| {
        b.iter(|| p256::ecverify(&key.x, &key.y, &sig.r, &sig.s, black_box(&Z)))
    });

    c.bench_function("p256 recover", |b| {
        b.iter(|| p256::ecrecover(sig.v, &sig.r, &sig.s, black_box(&Z)))
    });
}

criterion_group!(benches, bench_secp256k1, bench_p256);
criterion_main!(benches);
