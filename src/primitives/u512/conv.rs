//! Conversions between `U512` and narrower representations
//!
//! Widening from `U256` is lossless. Narrowing back succeeds only when the
//! upper half is zero.

use crate::primitives::{U256, U512};

/// Places a `U256` in the low half of a `U512`.
impl From<U256> for U512 {
    fn from(value: U256) -> Self {
        let mut out = [0u64; 8];
        out[4..].copy_from_slice(&value.0);
        U512(out)
    }
}

/// Attempts to convert a `U512` into a `U256`.
///
/// The conversion fails if any of the upper 256 bits is set.
impl TryFrom<U512> for U256 {
    type Error = ();

    fn try_from(value: U512) -> Result<Self, Self::Error> {
        let (hi, lo) = value.split();

        if !hi.is_zero() {
            return Err(());
        }

        Ok(lo)
    }
}

/// Converts eight 64-bit words, most significant first, into a `U512`.
impl From<[u64; 8]> for U512 {
    fn from(value: [u64; 8]) -> Self {
        U512(value)
    }
}

/// Converts a `U512` into eight 64-bit words, most significant first.
impl From<U512> for [u64; 8] {
    fn from(value: U512) -> Self {
        value.0
    }
}

/// Converts a `u64` into a `U512`.
impl From<u64> for U512 {
    fn from(value: u64) -> Self {
        U512::from(U256::from(value))
    }
}
