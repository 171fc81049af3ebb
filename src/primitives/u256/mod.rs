//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, the fixed-size integer every curve
//! and signature operation in the crate is built on.
//!
//! The implementation is split by concern:
//! - `core`: the type, constants and bit queries
//! - `conv`: conversions to and from bytes and native integers
//! - `ops`: non-truncating addition and subtraction, widening
//!   multiplication, shifts and bitwise operators
//! - `modular`: reduction, inversion and exponentiation modulo an
//!   explicit modulus
//! - `radix`: parsing and formatting in bases 2 through 16

mod conv;
mod core;
mod modular;
mod ops;
mod radix;

pub use self::core::U256;
