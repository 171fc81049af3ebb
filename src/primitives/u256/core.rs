//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used throughout the Nebula ecosystem.
//!
//! It is designed as a **simple, explicit value type** carrying exactly the
//! arithmetic an elliptic-curve engine needs:
//! - field elements modulo a curve prime `p`
//! - scalars modulo a group order `n`
//! - private keys, nonces and signature components
//!
//! The type itself is modulus-agnostic. Every modular operation takes the
//! modulus explicitly, so the caller decides whether a value lives in the
//! base field or in the scalar field.
//!
//! The internal representation is four 64-bit limbs in **big-endian**
//! order (most significant limb first), which aligns with cryptographic
//! conventions and lets the derived ordering match numeric ordering.

use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as four 64-bit limbs, most significant first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; 4]);

    /// The value one.
    pub const ONE: Self = Self([0, 0, 0, 1]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Number of bits in the representation.
    pub const BITS: u32 = 256;

    /// Builds a value from a `u64`, usable in constant contexts.
    pub const fn from_u64(value: u64) -> Self {
        Self([0, 0, 0, value])
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Returns `true` if the lowest bit is clear.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.0[3] & 1 == 0
    }

    /// Returns `true` if the lowest bit is set.
    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns bit `index`, counting from the least significant bit.
    ///
    /// Indices at or above 256 read as zero.
    #[inline]
    pub fn bit(&self, index: u32) -> bool {
        if index >= Self::BITS {
            return false;
        }

        let limb = self.0[3 - (index / 64) as usize];

        (limb >> (index % 64)) & 1 == 1
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter() {
            if limb == 0 {
                count += 64;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Minimal number of bits needed to represent the value.
    ///
    /// Zero needs zero bits.
    #[inline]
    pub fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

impl Display for U256 {
    /// Formats the value as canonical lowercase hexadecimal.
    ///
    /// This is the same text produced by [`U256::to_hex`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.to_hex())
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        f.write_str(&self.to_hex())
    }
}
