//! Short Weierstrass curves.
//!
//! This module holds the domain parameters of the supported curves and the
//! affine point algebra shared by both of them.
//!
//! Curves have the form `y² = x³ + a·x + b (mod p)` with a generator `G` of
//! prime order `n` and cofactor one. Nothing here is specific to a single
//! curve: every operation takes a [`CurveParams`] reference, so the same
//! code serves secp256k1 and P-256.
//!
//! ## Provided items
//!
//! - [`CurveParams`], [`SECP256K1`], [`P256`]  
//!   Immutable parameter tables, built at compile time.
//!
//! - [`Point`]  
//!   Affine points plus the point at infinity, with addition, doubling,
//!   negation and scalar multiplication.

mod params;
mod point;

pub use params::{CurveParams, P256, SECP256K1};
pub use point::Point;
