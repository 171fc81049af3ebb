//! Internal macros.

/// Generates the flat per-curve ECDSA API around a static
/// [`CurveParams`](crate::curves::CurveParams) table.
///
/// Every generated function forwards to one shared
/// [`Ecdsa`](crate::signatures::Ecdsa) engine, so the curves differ only in
/// their parameters.
macro_rules! ecdsa_curve_api {
    ($params:path) => {
        use rand_core::{CryptoRng, RngCore};

        use $crate::curves::CurveParams;
        use $crate::error::Result;
        use $crate::primitives::U256;
        use $crate::signatures::{Ecdsa, PublicKey, Signature};

        /// Domain parameters of this curve.
        pub static CURVE: &CurveParams = &$params;

        static ENGINE: Ecdsa = Ecdsa::new(&$params);

        /// Returns the ECDSA engine bound to this curve.
        pub fn engine() -> Ecdsa {
            ENGINE
        }

        /// Parses an integer in the given radix (2 to 16).
        pub fn uint256(s: &str, radix: u32) -> Result<U256> {
            Ok(U256::from_str_radix(s, radix)?)
        }

        /// Returns `true` if `(x, y)` is a point on the curve.
        pub fn is_valid_point(x: &U256, y: &U256) -> bool {
            ENGINE.is_valid_point(x, y)
        }

        /// Returns the y-coordinate for `x` with the given parity.
        pub fn decompress_key(x: &U256, y_parity: u8) -> Result<U256> {
            ENGINE.decompress_key(x, y_parity)
        }

        /// Computes the public key for private key `d`.
        pub fn generate_public_key_from_private_key_data(d: &U256) -> Result<PublicKey> {
            ENGINE.generate_public_key(d)
        }

        /// Signs message hash `z` with private key `d` using OS-seeded
        /// randomness.
        pub fn ecsign(d: &U256, z: &U256) -> Result<Signature> {
            ENGINE.sign(d, z)
        }

        /// Signs message hash `z` with private key `d`, drawing the nonce
        /// from `rng`.
        pub fn ecsign_with_rng<R: RngCore + CryptoRng>(
            d: &U256,
            z: &U256,
            rng: &mut R,
        ) -> Result<Signature> {
            ENGINE.sign_with_rng(d, z, rng)
        }

        /// Verifies signature `(r, s)` over `z` for public key `(qx, qy)`.
        pub fn ecverify(qx: &U256, qy: &U256, r: &U256, s: &U256, z: &U256) -> bool {
            ENGINE.verify(qx, qy, r, s, z)
        }

        /// Recovers the public key that produced `(v, r, s)` over `z`.
        pub fn ecrecover(v: u8, r: &U256, s: &U256, z: &U256) -> Result<PublicKey> {
            ENGINE.recover(v, r, s, z)
        }
    };
}
