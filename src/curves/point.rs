//! Affine point arithmetic.
//!
//! Points are immutable values: every operation returns a new point. The
//! formulas are the textbook affine ones, with one field inversion per
//! addition or doubling.

use crate::curves::CurveParams;
use crate::error::{Error, Result};
use crate::primitives::U256;

/// A point on a short Weierstrass curve.
///
/// `Infinity` is the group identity. `Affine` coordinates are always
/// reduced into `[0, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity.
    Infinity,

    /// A finite point `(x, y)`.
    Affine { x: U256, y: U256 },
}

impl CurveParams {
    /// Returns the generator `G`.
    pub fn generator(&self) -> Point {
        Point::Affine {
            x: self.gx,
            y: self.gy,
        }
    }
}

impl Point {
    /// Builds a finite point after checking range and curve equation.
    ///
    /// # Errors
    /// [`Error::PointNotOnCurve`] if a coordinate is `>= p` or the equation
    /// does not hold.
    pub fn from_affine(curve: &CurveParams, x: U256, y: U256) -> Result<Self> {
        if !curve.contains(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Point::Affine { x, y })
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Returns the affine coordinates, or `None` at infinity.
    #[inline]
    pub fn coordinates(&self) -> Option<(U256, U256)> {
        match *self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Returns `-P = (x, p - y)`.
    pub fn negate(&self, curve: &CurveParams) -> Point {
        match *self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x,
                y: y.neg_mod(&curve.p),
            },
        }
    }

    /// Computes `P + Q`.
    pub fn add(&self, other: &Point, curve: &CurveParams) -> Point {
        let (px, py, qx, qy) = match (*self, *other) {
            (Point::Infinity, _) => return *other,
            (_, Point::Infinity) => return *self,
            (Point::Affine { x: px, y: py }, Point::Affine { x: qx, y: qy }) => (px, py, qx, qy),
        };

        let p = &curve.p;

        if px == qx {
            // Same x: either the same point or its negation.
            return if py == qy {
                self.double(curve)
            } else {
                Point::Infinity
            };
        }

        let Some(inv) = qx.sub_mod(&px, p).inv_mod(p) else {
            return Point::Infinity;
        };

        let lambda = qy.sub_mod(&py, p).mul_mod(&inv, p);

        Self::chord(lambda, px, py, qx, p)
    }

    /// Computes `2P`.
    pub fn double(&self, curve: &CurveParams) -> Point {
        let (x, y) = match *self {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };

        if y.is_zero() {
            return Point::Infinity;
        }

        let p = &curve.p;

        let x2 = x.square_mod(p);
        let numerator = x2.add_mod(&x2, p).add_mod(&x2, p).add_mod(&curve.a, p);

        let Some(inv) = y.add_mod(&y, p).inv_mod(p) else {
            return Point::Infinity;
        };

        let lambda = numerator.mul_mod(&inv, p);

        Self::chord(lambda, x, y, x, p)
    }

    /// Third intersection of the line with slope `lambda` through `(px, py)`,
    /// reflected: `Rx = λ² - Px - Qx`, `Ry = λ(Px - Rx) - Py`.
    fn chord(lambda: U256, px: U256, py: U256, qx: U256, p: &U256) -> Point {
        let rx = lambda.square_mod(p).sub_mod(&px, p).sub_mod(&qx, p);
        let ry = lambda.mul_mod(&px.sub_mod(&rx, p), p).sub_mod(&py, p);

        Point::Affine { x: rx, y: ry }
    }

    /// Computes `k·P` by double-and-add, most significant bit first.
    ///
    /// Any `k` is accepted, including zero and values at or above the group
    /// order.
    pub fn mul(&self, k: &U256, curve: &CurveParams) -> Point {
        let mut acc = Point::Infinity;

        for i in (0..k.bits()).rev() {
            acc = acc.double(curve);

            if k.bit(i) {
                acc = acc.add(self, curve);
            }
        }

        acc
    }

    /// Computes `k1·P + k2·Q` with a single shared doubling chain.
    pub fn mul_add(k1: &U256, p: &Point, k2: &U256, q: &Point, curve: &CurveParams) -> Point {
        let both = p.add(q, curve);
        let mut acc = Point::Infinity;

        for i in (0..k1.bits().max(k2.bits())).rev() {
            acc = acc.double(curve);

            match (k1.bit(i), k2.bit(i)) {
                (true, true) => acc = acc.add(&both, curve),
                (true, false) => acc = acc.add(p, curve),
                (false, true) => acc = acc.add(q, curve),
                (false, false) => {}
            }
        }

        acc
    }
}
