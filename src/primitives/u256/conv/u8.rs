//! Conversions between `U256` and byte representations
//!
//! These conversions are used to:
//! - build values from hash digests and raw entropy
//! - serialize coordinates and signature components
//!
//! All conversions use the 32-byte big-endian encoding.

use crate::primitives::U256;

impl U256 {
    /// Interprets 32 bytes as a big-endian 256-bit value.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *o = u64::from_be_bytes(word);
        }

        U256(out)
    }

    /// Returns the 32-byte big-endian encoding of the value.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }
}

/// Converts a `U256` into its 32-byte big-endian encoding.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_be_bytes()
    }
}

/// Converts a 32-byte big-endian array into a `U256`.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256::from_be_bytes(value)
    }
}

/// Attempts to convert a `U256` into a `u8`.
///
/// The conversion succeeds only if the upper 248 bits of the value are zero.
impl TryFrom<U256> for u8 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let low = u64::try_from(value)?;

        u8::try_from(low).map_err(|_| ())
    }
}

/// Converts a `u8` into a `U256`.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256::from_u64(value as u64)
    }
}
