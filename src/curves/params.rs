//! Curve domain parameters.
//!
//! The tables are `static` values parsed from hex at compile time. They are
//! trusted: `G` lying on the curve and `n` being its order are properties
//! of the published constants, not checked at runtime.

use crate::primitives::U256;

/// Domain parameters of a short Weierstrass curve over a prime field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Human-readable curve name.
    pub name: &'static str,

    /// Field prime.
    pub p: U256,

    /// Coefficient `a`, reduced modulo `p`.
    pub a: U256,

    /// Coefficient `b`.
    pub b: U256,

    /// Generator x-coordinate.
    pub gx: U256,

    /// Generator y-coordinate.
    pub gy: U256,

    /// Order of the generator.
    pub n: U256,
}

/// The Koblitz curve secp256k1 (SEC 2).
pub static SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    p: U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
    a: U256::ZERO,
    b: U256::from_u64(7),
    gx: U256::from_be_hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
    gy: U256::from_be_hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    n: U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
};

/// The NIST curve P-256, also known as secp256r1.
///
/// `a` is `-3 mod p`.
pub static P256: CurveParams = CurveParams {
    name: "P-256",
    p: U256::from_be_hex("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
    a: U256::from_be_hex("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"),
    b: U256::from_be_hex("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
    gx: U256::from_be_hex("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
    gy: U256::from_be_hex("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
    n: U256::from_be_hex("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
};

impl CurveParams {
    /// Evaluates the right-hand side `x³ + a·x + b mod p`.
    pub fn rhs(&self, x: &U256) -> U256 {
        let x2 = x.square_mod(&self.p);
        let x3 = x2.mul_mod(x, &self.p);
        let ax = self.a.mul_mod(x, &self.p);

        x3.add_mod(&ax, &self.p).add_mod(&self.b, &self.p)
    }

    /// Returns `true` if `(x, y)` has both coordinates in `[0, p)` and
    /// satisfies the curve equation.
    pub fn contains(&self, x: &U256, y: &U256) -> bool {
        if *x >= self.p || *y >= self.p {
            return false;
        }

        y.square_mod(&self.p) == self.rhs(x)
    }

    /// Returns `true` if a scalar lies in `[1, n-1]`.
    #[inline]
    pub fn is_valid_scalar(&self, k: &U256) -> bool {
        !k.is_zero() && *k < self.n
    }
}
