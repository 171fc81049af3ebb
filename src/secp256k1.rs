//! ECDSA over secp256k1.
//!
//! `p > n` on this curve, so a nonce point whose x-coordinate falls in
//! `[n, p)` sets bit 1 of the recovery id. This happens with probability
//! around 2⁻¹²⁸.

ecdsa_curve_api!(crate::curves::SECP256K1);
