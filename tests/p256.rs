use nebula_ecdsa::Error;
use nebula_ecdsa::p256;
use nebula_ecdsa::primitives::U256;
use nebula_ecdsa::rng::Csprng;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_core::{CryptoRng, RngCore};

const D: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const Z: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";
const PUB_X: &str = "95cee273a6c921945fc720370411dc52a037e9b8dbc661804d71201fa2a6e7c0";
const PUB_Y: &str = "6ce2abb965ffdae1adf2d9bc9d369e58f87b5c6aa1a67fa95871ffaf5ca9117a";

// Signature of Z under D with nonce k = 2.
const SIG_R: &str = "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978";
const SIG_S: &str = "508cdcb12770b7131c8dfa97f2abb47381bd193458ffb6d1459b3083e4551876";
const SIG_V: u8 = 1;

fn hex(s: &str) -> U256 {
    p256::uint256(s, 16).unwrap()
}

/// Replays a single nonce for every draw.
struct FixedNonce([u8; 32]);

impl RngCore for FixedNonce {
    fn next_u32(&mut self) -> u32 {
        unimplemented!()
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.copy_from_slice(&self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedNonce {}

#[test]
fn curve_constants() {
    let curve = p256::CURVE;

    assert_eq!(curve.name, "P-256");
    assert_eq!(curve.a.add_mod(&U256::from(3u8), &curve.p), U256::ZERO);
    assert!(curve.p > curve.n);
}

#[test]
fn valid_point() {
    assert!(p256::is_valid_point(&hex(PUB_X), &hex(PUB_Y)));
    assert!(!p256::is_valid_point(&hex(PUB_Y), &hex(PUB_X)));
}

#[test]
fn decompress() {
    assert_eq!(p256::decompress_key(&hex(PUB_X), 0).unwrap().to_hex(), PUB_Y);

    let odd = p256::decompress_key(&hex(PUB_X), 1).unwrap();
    assert!(odd.is_odd());
    assert!(p256::is_valid_point(&hex(PUB_X), &odd));

    // 1 - 3 + b is not a square modulo p.
    assert_eq!(p256::decompress_key(&U256::ONE, 0), Err(Error::NonResidue));
}

#[test]
fn can_gen_pubkey() {
    let key = p256::generate_public_key_from_private_key_data(&hex(D)).unwrap();

    assert_eq!(key.x_hex(), PUB_X);
    assert_eq!(key.y_hex(), PUB_Y);
}

#[test]
fn can_verify_known_sig() {
    assert!(p256::ecverify(&hex(PUB_X), &hex(PUB_Y), &hex(SIG_R), &hex(SIG_S), &hex(Z)));
}

#[test]
fn can_recover_known_sig() {
    let key = p256::ecrecover(SIG_V, &hex(SIG_R), &hex(SIG_S), &hex(Z)).unwrap();

    assert_eq!(key.x_hex(), PUB_X);
    assert_eq!(key.y_hex(), PUB_Y);
}

#[test]
fn sign_with_fixed_nonce_is_deterministic() {
    let mut rng = FixedNonce(U256::from(2u8).to_be_bytes());
    let sig = p256::ecsign_with_rng(&hex(D), &hex(Z), &mut rng).unwrap();

    assert_eq!(sig.r_hex(), SIG_R);
    assert_eq!(sig.s_hex(), SIG_S);
    assert_eq!(sig.v, SIG_V);
}

#[test]
fn can_sign_verify_and_recover_self() {
    let sig = p256::ecsign(&hex(D), &hex(Z)).unwrap();

    assert_eq!(sig.r_hex().len(), 64);
    assert_eq!(sig.s_hex().len(), 64);
    assert!(p256::ecverify(&hex(PUB_X), &hex(PUB_Y), &sig.r, &sig.s, &hex(Z)));

    let key = p256::ecrecover(sig.v, &sig.r, &sig.s, &hex(Z)).unwrap();
    assert_eq!(key.x_hex(), PUB_X);
    assert_eq!(key.y_hex(), PUB_Y);
}

#[test]
fn can_verify_fff() {
    let z = hex(&"f".repeat(64));
    let sig = p256::ecsign(&hex(D), &z).unwrap();

    assert!(p256::ecverify(&hex(PUB_X), &hex(PUB_Y), &sig.r, &sig.s, &z));
}

#[test]
fn seeded_generator_gives_reproducible_signatures() {
    let a = p256::ecsign_with_rng(&hex(D), &hex(Z), &mut Csprng::from_seed([3u8; 32])).unwrap();
    let b = p256::ecsign_with_rng(&hex(D), &hex(Z), &mut Csprng::from_seed([3u8; 32])).unwrap();

    assert_eq!(a, b);
    assert!(p256::ecverify(&hex(PUB_X), &hex(PUB_Y), &a.r, &a.s, &hex(Z)));
}

#[test]
fn signatures_do_not_cross_curves() {
    use nebula_ecdsa::secp256k1;

    let sig = p256::ecsign(&hex(D), &hex(Z)).unwrap();
    let k1 = secp256k1::generate_public_key_from_private_key_data(&hex(D)).unwrap();

    assert!(!secp256k1::is_valid_point(&hex(PUB_X), &hex(PUB_Y)));
    assert!(!secp256k1::ecverify(&k1.x, &k1.y, &sig.r, &sig.s, &hex(Z)));
}

#[test]
fn normalize_s_keeps_signature_valid() {
    let sig = p256::ecsign(&hex(D), &hex(Z)).unwrap();
    let low = sig.normalize_s(p256::CURVE);

    assert!(low.is_low_s(p256::CURVE));
    assert!(p256::ecverify(&hex(PUB_X), &hex(PUB_Y), &low.r, &low.s, &hex(Z)));
    assert_eq!(
        p256::ecrecover(low.v, &low.r, &low.s, &hex(Z)).unwrap(),
        p256::ecrecover(sig.v, &sig.r, &sig.s, &hex(Z)).unwrap()
    );
}

#[test]
fn verify_rejects_invalid_input() {
    let (x, y, r, s, z) = (hex(PUB_X), hex(PUB_Y), hex(SIG_R), hex(SIG_S), hex(Z));
    let n = p256::CURVE.n;

    assert!(!p256::ecverify(&x, &y, &n, &s, &z));
    assert!(!p256::ecverify(&x, &y, &r, &U256::ZERO, &z));
    assert!(!p256::ecverify(&p256::CURVE.p, &y, &r, &s, &z));
    assert!(!p256::ecverify(&x, &y, &r, &s, &z.add_mod(&U256::ONE, &n)));
}

#[test]
fn rejects_invalid_private_key() {
    assert_eq!(
        p256::generate_public_key_from_private_key_data(&U256::ZERO),
        Err(Error::InvalidScalar)
    );
    assert_eq!(p256::ecsign(&U256::MAX, &hex(Z)), Err(Error::InvalidScalar));
}

#[test]
fn sign_verify_recover_random_keys() {
    let mut rng = StdRng::seed_from_u64(256);
    let n = p256::CURVE.n;

    for _ in 0..3 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let d = U256::from_be_bytes(bytes).reduce(&n);
        rng.fill_bytes(&mut bytes);
        let z = U256::from_be_bytes(bytes);

        let key = p256::generate_public_key_from_private_key_data(&d).unwrap();
        let sig = p256::ecsign(&d, &z).unwrap();

        assert!(p256::ecverify(&key.x, &key.y, &sig.r, &sig.s, &z));
        assert_eq!(p256::ecrecover(sig.v, &sig.r, &sig.s, &z).unwrap(), key);
    }
}
