//! Error types
//!
//! Every failure in the crate is local to the call that produced it. A
//! negative verification result is not an error: `verify` returns `false`.

use thiserror::Error;

/// Failure to parse an integer from text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input string was empty.
    #[error("empty integer literal")]
    Empty,

    /// The requested radix is not supported (only 2 through 16 are).
    #[error("unsupported radix {0}, expected 2..=16")]
    UnsupportedRadix(u32),

    /// A character is not a valid digit in the requested radix.
    #[error("invalid digit {ch:?} at position {index}")]
    InvalidDigit { ch: char, index: usize },

    /// The value does not fit in 256 bits.
    #[error("integer literal exceeds 256 bits")]
    Overflow,
}

/// Errors surfaced by curve and signature operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed numeric input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A private key, nonce or signature component outside `[1, n-1]`.
    #[error("scalar outside the range [1, n-1]")]
    InvalidScalar,

    /// Coordinates that do not satisfy the curve equation or lie outside
    /// `[0, p)`.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// The x-coordinate has no matching y: `x³ + ax + b` is a quadratic
    /// non-residue.
    #[error("x-coordinate is not a valid compressed key")]
    NonResidue,

    /// A recovery id other than 0, 1, 2 or 3.
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    /// An operation produced the point at infinity where an affine point
    /// was required.
    #[error("result is the point at infinity")]
    PointAtInfinity,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
