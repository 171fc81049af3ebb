//! Modular arithmetic for `U256`
//!
//! Every function here takes the modulus explicitly. Operands are expected
//! to be already reduced (`< m`) unless stated otherwise; [`U256::reduce`]
//! brings an arbitrary value into range first.
//!
//! All moduli used by the curve code are odd primes close to 2²⁵⁶, so sums
//! of two residues can carry past the top limb. The carry is always taken
//! into account rather than wrapped away.

use crate::primitives::{U256, U512};

impl U256 {
    /// Reduces the value modulo `m`.
    ///
    /// # Panics
    /// Panics if `m` is zero.
    pub fn reduce(&self, m: &U256) -> U256 {
        assert!(!m.is_zero(), "modulus must be non-zero");

        if self < m {
            return *self;
        }

        U512::from(*self).rem(m)
    }

    /// Computes `(self + rhs) mod m` for operands in `[0, m)`.
    pub fn add_mod(&self, rhs: &U256, m: &U256) -> U256 {
        let (sum, carry) = self.overflowing_add(rhs);

        // The true sum is below 2m, so one subtraction is enough. When the
        // addition carried, the wrapped subtraction restores the exact value.
        if carry || sum >= *m {
            sum.overflowing_sub(m).0
        } else {
            sum
        }
    }

    /// Computes `(self - rhs) mod m` for operands in `[0, m)`.
    pub fn sub_mod(&self, rhs: &U256, m: &U256) -> U256 {
        let (diff, borrow) = self.overflowing_sub(rhs);

        if borrow {
            diff.overflowing_add(m).0
        } else {
            diff
        }
    }

    /// Computes `-self mod m` for an operand in `[0, m)`.
    pub fn neg_mod(&self, m: &U256) -> U256 {
        if self.is_zero() {
            return U256::ZERO;
        }

        m.overflowing_sub(self).0
    }

    /// Computes `(self * rhs) mod m`.
    ///
    /// The full 512-bit product is formed before reduction, so any operands
    /// are accepted.
    pub fn mul_mod(&self, rhs: &U256, m: &U256) -> U256 {
        self.widening_mul(rhs).rem(m)
    }

    /// Computes `self² mod m`.
    #[inline]
    pub fn square_mod(&self, m: &U256) -> U256 {
        self.mul_mod(self, m)
    }

    /// Computes `self^exp mod m` by left-to-right square-and-multiply.
    pub fn pow_mod(&self, exp: &U256, m: &U256) -> U256 {
        let base = self.reduce(m);
        let mut acc = U256::ONE.reduce(m);

        for i in (0..exp.bits()).rev() {
            acc = acc.square_mod(m);

            if exp.bit(i) {
                acc = acc.mul_mod(&base, m);
            }
        }

        acc
    }

    /// Computes the inverse of `self` modulo an odd modulus `m`.
    ///
    /// Uses the binary extended Euclidean algorithm. Returns `None` when the
    /// inverse does not exist: `self ≡ 0 (mod m)`, `gcd(self, m) ≠ 1`, or an
    /// even modulus.
    pub fn inv_mod(&self, m: &U256) -> Option<U256> {
        if m.is_even() || *m == U256::ONE {
            return None;
        }

        let a = self.reduce(m);
        if a.is_zero() {
            return None;
        }

        // Invariants: x1 * a ≡ u and x2 * a ≡ v (mod m).
        let mut u = a;
        let mut v = *m;
        let mut x1 = U256::ONE;
        let mut x2 = U256::ZERO;

        while u != U256::ONE && v != U256::ONE {
            if u.is_zero() || v.is_zero() {
                return None;
            }

            while u.is_even() {
                u = u.shr1(false);
                x1 = x1.half_mod(m);
            }

            while v.is_even() {
                v = v.shr1(false);
                x2 = x2.half_mod(m);
            }

            if u >= v {
                u = u.overflowing_sub(&v).0;
                x1 = x1.sub_mod(&x2, m);
            } else {
                v = v.overflowing_sub(&u).0;
                x2 = x2.sub_mod(&x1, m);
            }
        }

        if u == U256::ONE { Some(x1) } else { Some(x2) }
    }

    /// Computes `self / 2 mod m` for an odd modulus and an operand in
    /// `[0, m)`.
    fn half_mod(&self, m: &U256) -> U256 {
        if self.is_even() {
            return self.shr1(false);
        }

        let (sum, carry) = self.overflowing_add(m);
        sum.shr1(carry)
    }
}
