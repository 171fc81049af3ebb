//! ECDSA over NIST P-256 (secp256r1).
//!
//! As on secp256k1, `p > n`, so recovery ids 2 and 3 are possible but occur
//! with probability around 2⁻¹³⁰.

ecdsa_curve_api!(crate::curves::P256);
