//! Secret nonce sampling.
//!
//! Reusing a nonce, or letting it be predicted, across two signatures by
//! the same key reveals that key. Nonces therefore come only from a
//! `CryptoRng` and never leave this crate.

use crate::primitives::U256;

use rand_core::{CryptoRng, RngCore};

/// Draws a uniform scalar in `[1, n-1]` by rejection sampling.
///
/// Candidates are masked to the bit length of `n` first, so at least half
/// of all draws are accepted for any `n`.
pub(crate) fn draw<R: RngCore + CryptoRng>(rng: &mut R, n: &U256) -> U256 {
    let mask = U256::MAX >> (U256::BITS - n.bits());
    let mut buf = [0u8; 32];

    loop {
        rng.fill_bytes(&mut buf);
        let k = U256::from_be_bytes(buf) & mask;

        if !k.is_zero() && k < *n {
            buf.fill(0);
            return k;
        }
    }
}
