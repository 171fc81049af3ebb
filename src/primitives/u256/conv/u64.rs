//! Conversions between `U256` and 64-bit integer representations
//!
//! The limb conversions expose the internal layout directly: four words
//! ordered from most significant to least significant.

use crate::primitives::U256;

/// Converts a `U256` into four 64-bit words, most significant first.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts four 64-bit words, most significant first, into a `U256`.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        U256(value)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..3].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.0[3])
    }
}

/// Converts a `u64` into a `U256`.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from_u64(value)
    }
}
