//! Digital signature schemes.
//!
//! This module groups signature algorithms built on the crate's
//! primitives. It currently holds ECDSA, implemented once over generic
//! curve parameters.
//!
//! Most callers should use the per-curve modules
//! [`secp256k1`](crate::secp256k1) and [`p256`](crate::p256), which fix the
//! curve and expose a flat function API.

pub mod ecdsa;

pub use ecdsa::{Ecdsa, PublicKey, Signature};
