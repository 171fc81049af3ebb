//! Text encoding for `U256`
//!
//! Parsing accepts digits in any base from 2 to 16, case-insensitive, with
//! no prefix, sign or separators. Formatting produces the canonical form:
//! lowercase digits and no leading zeros, except for the value zero which
//! is written as `"0"`.

use crate::error::ParseError;
use crate::primitives::U256;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

impl U256 {
    /// Parses a big-endian hexadecimal literal in a constant context.
    ///
    /// Intended for curve tables and other compile-time constants: an
    /// invalid digit or a literal longer than 64 digits aborts compilation.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() <= 64, "hex literal exceeds 256 bits");

        let mut limbs = [0u64; 4];
        let mut i = 0;

        while i < bytes.len() {
            // Position counted from the least significant digit.
            let pos = bytes.len() - 1 - i;
            let nibble = match bytes[i] {
                b'0'..=b'9' => bytes[i] - b'0',
                b'a'..=b'f' => bytes[i] - b'a' + 10,
                b'A'..=b'F' => bytes[i] - b'A' + 10,
                _ => panic!("invalid hex digit"),
            };

            limbs[3 - pos / 16] |= (nibble as u64) << ((pos % 16) * 4);
            i += 1;
        }

        U256(limbs)
    }

    /// Parses `s` as an unsigned integer in the given radix.
    ///
    /// # Errors
    /// - [`ParseError::UnsupportedRadix`] if `radix` is outside `2..=16`
    /// - [`ParseError::Empty`] for an empty string
    /// - [`ParseError::InvalidDigit`] for any character that is not a digit
    ///   of `radix`
    /// - [`ParseError::Overflow`] if the value needs more than 256 bits
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseError> {
        if !(2..=16).contains(&radix) {
            return Err(ParseError::UnsupportedRadix(radix));
        }

        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut acc = U256::ZERO;

        for (index, ch) in s.chars().enumerate() {
            let digit = ch
                .to_digit(radix)
                .ok_or(ParseError::InvalidDigit { ch, index })?;

            acc = acc
                .mul_small_add(radix as u64, digit as u64)
                .ok_or(ParseError::Overflow)?;
        }

        Ok(acc)
    }

    /// Parses a hexadecimal string. Shorthand for `from_str_radix(s, 16)`.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        Self::from_str_radix(s, 16)
    }

    /// Formats the value in the given radix using canonical lowercase
    /// digits without leading zeros.
    ///
    /// # Panics
    /// Panics if `radix` is outside `2..=16`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!((2..=16).contains(&radix), "radix must be in 2..=16");

        if self.is_zero() {
            return "0".to_owned();
        }

        let mut digits = Vec::with_capacity(256);
        let mut value = *self;

        while !value.is_zero() {
            let (quotient, rem) = value.div_rem_small(radix as u64);
            digits.push(DIGITS[rem as usize]);
            value = quotient;
        }

        digits.iter().rev().map(|&d| d as char).collect()
    }

    /// Canonical lowercase hexadecimal, no leading zeros.
    pub fn to_hex(&self) -> String {
        self.to_str_radix(16)
    }

    /// Lowercase hexadecimal zero-padded to exactly 64 digits.
    pub fn to_hex_padded(&self) -> String {
        self.0.iter().map(|limb| format!("{limb:016x}")).collect()
    }

    /// Computes `self * mul + add`, or `None` on overflow.
    fn mul_small_add(&self, mul: u64, add: u64) -> Option<U256> {
        let mut out = [0u64; 4];
        let mut carry = add as u128;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()).rev() {
            let t = limb as u128 * mul as u128 + carry;
            *o = t as u64;
            carry = t >> 64;
        }

        if carry != 0 { None } else { Some(U256(out)) }
    }

    /// Divides by a non-zero word, returning quotient and remainder.
    fn div_rem_small(&self, div: u64) -> (U256, u64) {
        let mut out = [0u64; 4];
        let mut rem = 0u128;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()) {
            let cur = (rem << 64) | limb as u128;
            *o = (cur / div as u128) as u64;
            rem = cur % div as u128;
        }

        (U256(out), rem as u64)
    }
}

impl std::str::FromStr for U256 {
    type Err = ParseError;

    /// Parses hexadecimal text, matching the output of `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
