//! ECDSA over short Weierstrass curves.
//!
//! The engine is written once against [`CurveParams`](crate::curves::CurveParams)
//! and instantiated per curve by the `secp256k1` and `p256` modules.
//!
//! - `core`: the [`Ecdsa`] engine (key generation, signing, verification,
//!   public-key recovery, point validation and decompression)
//! - `signature`: the [`Signature`] and [`PublicKey`] value types
//! - `nonce`: per-signature secret nonce sampling

mod core;
mod nonce;
mod signature;

pub use self::core::Ecdsa;
pub use signature::{PublicKey, Signature};
