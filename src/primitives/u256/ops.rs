//! Arithmetic and bitwise operations for `U256`
//!
//! Addition and subtraction never truncate silently: they report the carry
//! or borrow, and callers decide whether it is an error or feeds a modular
//! correction. Multiplication widens into a `U512` so no product bits are
//! lost before reduction.
//!
//! The bitwise and shift operators follow native integer semantics. Shifts
//! by 256 or more yield zero.

use crate::primitives::{U256, U512};

use std::ops::{BitAnd, BitOr, BitXor, Shl, Shr};

impl U256 {
    /// Adds `rhs`, returning the low 256 bits and whether a carry left the
    /// top limb.
    pub fn overflowing_add(&self, rhs: &U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut carry = false;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let (sum, c1) = a.overflowing_add(b);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            *o = sum;
            carry = c1 || c2;
        }

        (U256(out), carry)
    }

    /// Subtracts `rhs`, returning the result modulo 2²⁵⁶ and whether a borrow
    /// occurred (i.e. `rhs > self`).
    pub fn overflowing_sub(&self, rhs: &U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut borrow = false;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let (diff, b1) = a.overflowing_sub(b);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            *o = diff;
            borrow = b1 || b2;
        }

        (U256(out), borrow)
    }

    /// Exact addition, `None` if the sum does not fit in 256 bits.
    pub fn checked_add(&self, rhs: &U256) -> Option<U256> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Exact subtraction, `None` if `rhs > self`.
    pub fn checked_sub(&self, rhs: &U256) -> Option<U256> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Full 512-bit product of two 256-bit values.
    pub fn widening_mul(&self, rhs: &U256) -> U512 {
        // Little-endian views keep the index arithmetic readable.
        let mut lhs = self.0;
        let mut rhs = rhs.0;
        lhs.reverse();
        rhs.reverse();

        let mut acc = [0u64; 8];

        for (i, &a) in lhs.iter().enumerate() {
            let mut carry = 0u128;

            for (j, &b) in rhs.iter().enumerate() {
                let t = a as u128 * b as u128 + acc[i + j] as u128 + carry;
                acc[i + j] = t as u64;
                carry = t >> 64;
            }

            acc[i + 4] = carry as u64;
        }

        acc.reverse();

        U512::from(acc)
    }

    /// Shifts left by one bit, returning the bit shifted out of the top.
    pub fn shl1(&self) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()).rev() {
            *o = (limb << 1) | carry;
            carry = limb >> 63;
        }

        (U256(out), carry == 1)
    }

    /// Shifts right by one bit, inserting `top` as the new most significant
    /// bit.
    pub fn shr1(&self, top: bool) -> U256 {
        let mut out = [0u64; 4];
        let mut carry = top as u64;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()) {
            *o = (limb >> 1) | (carry << 63);
            carry = limb & 1;
        }

        U256(out)
    }
}

impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

impl BitOr for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l | r);

        U256(out)
    }
}

/// Logical left shift. Bits shifted past the top are discarded.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        if shift >= U256::BITS {
            return U256::ZERO;
        }

        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;

        let mut out = [0u64; 4];
        out[..4 - limb_shift].copy_from_slice(&self.0[limb_shift..]);

        if bit_shift == 0 {
            return U256(out);
        }

        let mut carry = 0u64;

        for limb in out.iter_mut().rev() {
            let val = *limb;
            *limb = (val << bit_shift) | carry;
            carry = val >> (64 - bit_shift);
        }

        U256(out)
    }
}

/// Logical right shift.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift >= U256::BITS {
            return U256::ZERO;
        }

        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;

        let mut out = [0u64; 4];
        out[limb_shift..].copy_from_slice(&self.0[..4 - limb_shift]);

        if bit_shift == 0 {
            return U256(out);
        }

        let mut carry = 0u64;

        for limb in out.iter_mut() {
            let val = *limb;
            *limb = (val >> bit_shift) | carry;
            carry = val << (64 - bit_shift);
        }

        U256(out)
    }
}
