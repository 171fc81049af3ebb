//! 512-bit unsigned integer primitive
//!
//! The value is stored as eight 64-bit limbs in **big-endian** order, the
//! same layout as `U256`, so the two types convert by plain limb copies.

use crate::primitives::U256;

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 512-bit unsigned integer.
///
/// The value is stored as eight 64-bit limbs, most significant first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U512(pub(crate) [u64; 8]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; 8]);

    /// The value one.
    pub const ONE: Self = Self([0, 0, 0, 0, 0, 0, 0, 1]);

    /// The maximum representable value (2⁵¹² − 1).
    pub const MAX: Self = Self([u64::MAX; 8]);

    /// Number of bits in the representation.
    pub const BITS: u32 = 512;

    /// Returns bit `index`, counting from the least significant bit.
    #[inline]
    pub fn bit(&self, index: u32) -> bool {
        if index >= Self::BITS {
            return false;
        }

        let limb = self.0[7 - (index / 64) as usize];

        (limb >> (index % 64)) & 1 == 1
    }

    /// Splits the value into its high and low 256-bit halves.
    pub fn split(&self) -> (U256, U256) {
        let mut hi = [0u64; 4];
        let mut lo = [0u64; 4];

        hi.copy_from_slice(&self.0[..4]);
        lo.copy_from_slice(&self.0[4..]);

        (U256(hi), U256(lo))
    }

    /// Counts the number of leading zero bits, in the range `0..=512`.
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
}

impl Display for U512 {
    /// Formats the value as 128 lowercase hexadecimal digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for limb in self.0.iter() {
            write!(f, "{:016x}", limb)?;
        }

        Ok(())
    }
}
