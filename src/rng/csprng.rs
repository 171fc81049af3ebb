//! ChaCha20-based CSPRNG
//!
//! The generator is seeded once from operating system entropy and expands
//! it with the ChaCha20 block function. After every request it replaces its
//! key with fresh keystream, so a later compromise of the state does not
//! reveal nonces that were already drawn.

use crate::os::sys_random;
use crate::rng::chacha20;

use rand_core::{CryptoRng, RngCore};

/// Cryptographically secure pseudorandom number generator.
///
/// This is the default nonce source for signing. It implements
/// [`RngCore`] and [`CryptoRng`], so it can be passed anywhere the crate
/// accepts an injected generator.
pub struct Csprng {
    /// ChaCha20 key (256-bit).
    key: [u8; 32],

    /// Fixed all-zero nonce; uniqueness comes from rekeying.
    nonce: [u8; 12],

    /// Block counter.
    counter: u32,
}

impl Csprng {
    /// Creates a generator seeded from the operating system.
    ///
    /// Equivalent to [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a generator seeded with 32 bytes of OS entropy.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The output is fully determined by the seed. Only use this with a
    /// uniformly random, secret seed, or in tests. The seed buffer is
    /// wiped once copied into the key.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with random bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let block = chacha20::block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }

    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.key.copy_from_slice(&block[..32]);
        self.counter = 0;
    }
}

impl Default for Csprng {
    /// Creates a generator seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.key.fill(0);
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        Csprng::fill_bytes(self, &mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        Csprng::fill_bytes(self, &mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Csprng::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Csprng::fill_bytes(self, dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}

#[cfg(test)]
mod tests {
    use super::Csprng;

    #[test]
    fn from_seed_keys_with_the_seed_before_wiping_it() {
        let seed = [0x5au8; 32];
        let rng = Csprng::from_seed(seed);

        assert_eq!(rng.key, seed);
        assert_eq!(rng.counter, 0);
    }
}
