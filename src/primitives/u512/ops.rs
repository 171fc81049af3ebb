//! Reduction of `U512` values
//!
//! The only arithmetic `U512` needs is reduction modulo a 256-bit modulus,
//! which turns a widened product back into a residue.

use crate::primitives::{U256, U512};

impl U512 {
    /// Computes `self mod m` exactly.
    ///
    /// Classic shift-and-subtract long division, one bit at a time. When the
    /// high half is already below `m`, which holds for any product of two
    /// reduced residues, the high half seeds the remainder and only the low
    /// 256 bits are processed.
    ///
    /// # Panics
    /// Panics if `m` is zero.
    pub fn rem(&self, m: &U256) -> U256 {
        assert!(!m.is_zero(), "modulus must be non-zero");

        let (hi, _) = self.split();

        let (mut rem, top) = if hi < *m {
            (hi, U256::BITS)
        } else {
            (U256::ZERO, U512::BITS)
        };

        for i in (0..top).rev() {
            let (shifted, carry) = rem.shl1();
            let incoming = U256::from(self.bit(i) as u64);
            rem = shifted | incoming;

            // rem < m held before the shift, so 2·rem + 1 < 2m and a single
            // subtraction restores the bound. A carried-out bit means the
            // true value exceeds 2²⁵⁶ > m and the wrapped difference is exact.
            if carry || rem >= *m {
                rem = rem.overflowing_sub(m).0;
            }
        }

        rem
    }
}
