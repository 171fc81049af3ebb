//! Elliptic-curve signatures for Nebula
//!
//! This crate implements ECDSA from first principles over two named
//! curves, secp256k1 and NIST P-256: fixed-width modular arithmetic,
//! affine Weierstrass point operations, and signing, verification and
//! public-key recovery on top of them.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! layer is explicit about which modulus it works in and how it handles
//! the point at infinity, and no operation holds shared mutable state.
//!
//! # Module overview
//!
//! - `primitives`  
//!   `U256` and `U512`: fixed-size integers with non-truncating addition,
//!   widening multiplication, modular reduction, inversion and
//!   exponentiation, and radix 2–16 text encoding.
//!
//! - `curves`  
//!   Curve domain parameters (`SECP256K1`, `P256`) and the affine `Point`
//!   algebra parameterized by them.
//!
//! - `signatures`  
//!   The curve-generic ECDSA engine and its `Signature` / `PublicKey`
//!   value types.
//!
//! - `secp256k1`, `p256`  
//!   One flat API per curve: `uint256`, `is_valid_point`,
//!   `decompress_key`, `generate_public_key_from_private_key_data`,
//!   `ecsign`, `ecverify`, `ecrecover`. Both are generated from the same
//!   macro and share all algorithmic code.
//!
//! - `rng`  
//!   The OS-seeded ChaCha20 CSPRNG used by default for signing nonces.
//!
//! # Example
//!
//! ```
//! use nebula_ecdsa::secp256k1;
//!
//! let d = secp256k1::uint256("1", 16).unwrap();
//! let z = secp256k1::uint256("2a", 16).unwrap();
//!
//! let key = secp256k1::generate_public_key_from_private_key_data(&d).unwrap();
//! let sig = secp256k1::ecsign(&d, &z).unwrap();
//!
//! assert!(secp256k1::ecverify(&key.x, &key.y, &sig.r, &sig.s, &z));
//! assert_eq!(secp256k1::ecrecover(sig.v, &sig.r, &sig.s, &z).unwrap(), key);
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Minimal and explicit APIs
//! - Explicit errors for malformed input, plain `false` for signatures
//!   that do not verify
//!
//! No constant-time guarantees are made. This crate is not a replacement
//! for externally audited libraries.

#[macro_use]
mod macros;

mod os;

pub mod curves;
pub mod error;
pub mod p256;
pub mod primitives;
pub mod rng;
pub mod secp256k1;
pub mod signatures;

pub use error::{Error, ParseError, Result};
