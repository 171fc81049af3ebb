//! Primitive types
//!
//! This module defines the low-level integer types used by the curve and
//! signature code.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate a full-featured
//! big-integer library.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer with modular arithmetic
//! - `U512`: a fixed-size 512-bit unsigned integer holding full products of
//!   two `U256` values before reduction

mod u256;
mod u512;

/// Fixed-size unsigned integer primitives.
pub use u256::U256;
pub use u512::U512;
