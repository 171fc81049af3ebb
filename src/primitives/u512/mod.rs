//! 512-bit unsigned integer primitive
//!
//! This module defines the `U512` type, a fixed-size 512-bit unsigned
//! integer holding the exact product of two `U256` values.
//!
//! `U512` exists so modular multiplication never loses precision: the full
//! product is formed first and only then reduced back into a `U256`. It is
//! not a general-purpose big-integer type.

mod conv;
mod core;
mod ops;

/// Fixed-size 512-bit unsigned integer.
pub use self::core::U512;
