//! Signature and public key value types.

use crate::curves::CurveParams;
use crate::primitives::U256;

/// An ECDSA signature with its recovery id.
///
/// `r` and `s` are in `[1, n-1]`. `v` is the recovery id: bit 0 is the
/// parity of `R.y`, bit 1 is set when `R.x` was at least `n` and had to be
/// reduced to obtain `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub r: U256,
    pub s: U256,
    pub v: u8,
}

impl Signature {
    /// `r` as 64 lowercase hex digits.
    pub fn r_hex(&self) -> String {
        self.r.to_hex_padded()
    }

    /// `s` as 64 lowercase hex digits.
    pub fn s_hex(&self) -> String {
        self.s.to_hex_padded()
    }

    /// Returns `true` if `s` lies in the lower half of `[1, n-1]`.
    pub fn is_low_s(&self, curve: &CurveParams) -> bool {
        self.s <= curve.n >> 1
    }

    /// Returns the equivalent signature with `s` in the lower half.
    ///
    /// Replacing `s` by `n - s` corresponds to negating the nonce point, so
    /// the parity bit of `v` flips. Signing never applies this on its own;
    /// both forms verify.
    pub fn normalize_s(&self, curve: &CurveParams) -> Signature {
        if self.is_low_s(curve) {
            return *self;
        }

        Signature {
            r: self.r,
            s: self.s.neg_mod(&curve.n),
            v: self.v ^ 1,
        }
    }
}

/// An uncompressed public key, as raw affine coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    pub x: U256,
    pub y: U256,
}

impl PublicKey {
    /// `x` as canonical lowercase hex without padding.
    pub fn x_hex(&self) -> String {
        self.x.to_hex()
    }

    /// `y` as canonical lowercase hex without padding.
    pub fn y_hex(&self) -> String {
        self.y.to_hex()
    }

    /// Parity of `y`, the bit carried by a compressed encoding.
    pub fn y_parity(&self) -> u8 {
        self.y.is_odd() as u8
    }
}
