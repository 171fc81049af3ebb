//! ECDSA engine.
//!
//! [`Ecdsa`] binds the signature algorithm to one set of curve parameters.
//! It holds nothing but a reference to a static table, so it is `Copy`,
//! `Send` and `Sync`, and every method is a pure function of its arguments
//! apart from the nonce draw in signing.
//!
//! Message hashing is out of scope: `z` is always the already-hashed
//! message as an integer, reduced modulo `n` internally.

use crate::curves::{CurveParams, Point};
use crate::error::{Error, Result};
use crate::primitives::U256;
use crate::rng::Csprng;
use crate::signatures::ecdsa::nonce;
use crate::signatures::ecdsa::signature::{PublicKey, Signature};

use rand_core::{CryptoRng, RngCore};
use tracing::{debug, trace};

/// Nonce produced `R = ∞`, `r = 0` or `s = 0`. Signing draws a new nonce.
struct DegenerateSignature;

/// ECDSA over a fixed curve.
#[derive(Debug, Clone, Copy)]
pub struct Ecdsa {
    curve: &'static CurveParams,
}

impl Ecdsa {
    /// Creates an engine for `curve`.
    pub const fn new(curve: &'static CurveParams) -> Self {
        Self { curve }
    }

    /// The curve this engine operates on.
    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    /// Returns `true` if `(x, y)` is a finite point on the curve.
    ///
    /// Coordinates outside `[0, p)` are rejected even when they would
    /// satisfy the equation after reduction.
    pub fn is_valid_point(&self, x: &U256, y: &U256) -> bool {
        self.curve.contains(x, y)
    }

    /// Recovers the y-coordinate matching `x` whose low bit equals
    /// `y_parity & 1`.
    ///
    /// The square root is `rhs^((p+1)/4)`, which is only correct because
    /// both supported primes satisfy `p ≡ 3 (mod 4)`.
    ///
    /// # Errors
    /// - [`Error::PointNotOnCurve`] if `x >= p`
    /// - [`Error::NonResidue`] if `x³ + ax + b` has no square root
    pub fn decompress_key(&self, x: &U256, y_parity: u8) -> Result<U256> {
        let p = &self.curve.p;

        if x >= p {
            return Err(Error::PointNotOnCurve);
        }

        let rhs = self.curve.rhs(x);

        // (p + 1) / 4 == p / 4 + 1 for p ≡ 3 (mod 4), without overflowing.
        let (exp, _) = (*p >> 2).overflowing_add(&U256::ONE);
        let y = rhs.pow_mod(&exp, p);

        if y.square_mod(p) != rhs {
            return Err(Error::NonResidue);
        }

        if y.is_odd() as u8 == y_parity & 1 {
            Ok(y)
        } else {
            Ok(y.neg_mod(p))
        }
    }

    /// Computes the public key `Q = d·G`.
    ///
    /// # Errors
    /// [`Error::InvalidScalar`] unless `1 <= d < n`.
    pub fn generate_public_key(&self, d: &U256) -> Result<PublicKey> {
        if !self.curve.is_valid_scalar(d) {
            return Err(Error::InvalidScalar);
        }

        let (x, y) = self
            .curve
            .generator()
            .mul(d, self.curve)
            .coordinates()
            .ok_or(Error::PointAtInfinity)?;

        Ok(PublicKey { x, y })
    }

    /// Signs the message hash `z` with private key `d`, drawing the nonce
    /// from a freshly seeded [`Csprng`].
    ///
    /// # Errors
    /// [`Error::InvalidScalar`] unless `1 <= d < n`.
    pub fn sign(&self, d: &U256, z: &U256) -> Result<Signature> {
        self.sign_with_rng(d, z, &mut Csprng::new())
    }

    /// Signs the message hash `z` with private key `d`, drawing the nonce
    /// from `rng`.
    ///
    /// Signing is randomized: repeated calls give different signatures that
    /// all verify. `s` is not normalized; see [`Signature::normalize_s`].
    ///
    /// # Errors
    /// [`Error::InvalidScalar`] unless `1 <= d < n`.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        &self,
        d: &U256,
        z: &U256,
        rng: &mut R,
    ) -> Result<Signature> {
        if !self.curve.is_valid_scalar(d) {
            return Err(Error::InvalidScalar);
        }

        let z = z.reduce(&self.curve.n);

        loop {
            let k = nonce::draw(rng, &self.curve.n);

            match self.sign_with_nonce(d, &z, &k) {
                Ok(sig) => return Ok(sig),
                Err(DegenerateSignature) => {
                    debug!(curve = self.curve.name, "degenerate signature, drawing a new nonce");
                }
            }
        }
    }

    /// One signing attempt with nonce `k`; `z` is already reduced.
    fn sign_with_nonce(
        &self,
        d: &U256,
        z: &U256,
        k: &U256,
    ) -> std::result::Result<Signature, DegenerateSignature> {
        let n = &self.curve.n;

        let (rx, ry) = self
            .curve
            .generator()
            .mul(k, self.curve)
            .coordinates()
            .ok_or(DegenerateSignature)?;

        let r = rx.reduce(n);
        if r.is_zero() {
            return Err(DegenerateSignature);
        }

        let k_inv = k.inv_mod(n).ok_or(DegenerateSignature)?;
        let s = k_inv.mul_mod(&z.add_mod(&r.mul_mod(d, n), n), n);
        if s.is_zero() {
            return Err(DegenerateSignature);
        }

        let mut v = ry.is_odd() as u8;
        if rx >= *n {
            v += 2;
        }

        Ok(Signature { r, s, v })
    }

    /// Verifies `(r, s)` over message hash `z` against public key
    /// `(qx, qy)`.
    ///
    /// Returns `false` for out-of-range `r` or `s`, an invalid public key,
    /// or a signature that does not match. Never fails otherwise.
    pub fn verify(&self, qx: &U256, qy: &U256, r: &U256, s: &U256, z: &U256) -> bool {
        let curve = self.curve;

        if !curve.is_valid_scalar(r) || !curve.is_valid_scalar(s) {
            trace!(curve = curve.name, "rejecting signature: r or s out of range");
            return false;
        }

        let q = match Point::from_affine(curve, *qx, *qy) {
            Ok(q) => q,
            Err(_) => {
                trace!(curve = curve.name, "rejecting signature: public key not on curve");
                return false;
            }
        };

        let Some(w) = s.inv_mod(&curve.n) else {
            return false;
        };

        let z = z.reduce(&curve.n);
        let u1 = z.mul_mod(&w, &curve.n);
        let u2 = r.mul_mod(&w, &curve.n);

        match Point::mul_add(&u1, &curve.generator(), &u2, &q, curve).coordinates() {
            Some((x, _)) => x.reduce(&curve.n) == *r,
            None => {
                trace!(curve = curve.name, "rejecting signature: u1·G + u2·Q is infinity");
                false
            }
        }
    }

    /// Recovers the signer's public key from `(v, r, s)` and the message
    /// hash `z`.
    ///
    /// # Errors
    /// - [`Error::InvalidRecoveryId`] if `v > 3`
    /// - [`Error::InvalidScalar`] unless `r` and `s` are in `[1, n-1]`
    /// - [`Error::PointNotOnCurve`] if `r + n` (for `v >= 2`) is not below
    ///   `p`
    /// - [`Error::NonResidue`] if no curve point has x-coordinate `R.x`
    /// - [`Error::PointAtInfinity`] if the recovered key is the identity
    pub fn recover(&self, v: u8, r: &U256, s: &U256, z: &U256) -> Result<PublicKey> {
        let curve = self.curve;
        let n = &curve.n;

        if v > 3 {
            return Err(Error::InvalidRecoveryId(v));
        }

        if !curve.is_valid_scalar(r) || !curve.is_valid_scalar(s) {
            return Err(Error::InvalidScalar);
        }

        // Undo the reduction of R.x into r.
        let rx = if v >= 2 {
            trace!(curve = curve.name, "recovery id marks an overflowed R.x");
            r.checked_add(n).ok_or(Error::PointNotOnCurve)?
        } else {
            *r
        };

        let ry = self.decompress_key(&rx, v & 1)?;
        let big_r = Point::Affine { x: rx, y: ry };

        let r_inv = r.inv_mod(n).ok_or(Error::InvalidScalar)?;
        let z = z.reduce(n);
        let u1 = z.mul_mod(&r_inv, n).neg_mod(n);
        let u2 = s.mul_mod(&r_inv, n);

        let (x, y) = Point::mul_add(&u1, &curve.generator(), &u2, &big_r, curve)
            .coordinates()
            .ok_or(Error::PointAtInfinity)?;

        Ok(PublicKey { x, y })
    }

    /// Checks a signature against an already-parsed public key.
    pub fn verify_key(&self, key: &PublicKey, sig: &Signature, z: &U256) -> bool {
        self.verify(&key.x, &key.y, &sig.r, &sig.s, z)
    }
}
