//! Random number generation module
//!
//! Signing needs one fresh secret nonce per signature. This module provides
//! the default source for it: a ChaCha20-based generator seeded from the
//! operating system.
//!
//! Signing functions accept any `rand_core::RngCore + CryptoRng`, so tests
//! and callers with their own entropy source can substitute it.

pub(crate) mod chacha20;
mod csprng;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::Csprng;
