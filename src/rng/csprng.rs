//! ChaCha20-based CSPRNG.
//!
//! The generator expands a 32-byte seed with the ChaCha20 block function
//! under an all-zero nonce and an incrementing block counter. After every
//! request it replaces its key with fresh keystream, so a later compromise
//! of the state does not reveal earlier output.

use log::trace;
use rand_core::{CryptoRng, OsRng, RngCore, impls};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::chacha20;
use crate::error::Result;

/// Cryptographically secure pseudorandom number generator.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Csprng {
    key: [u8; 32],
    counter: u32,
}

const NONCE: [u8; 12] = [0u8; 12];

impl Csprng {
    /// Creates a generator seeded from the operating system.
    ///
    /// Fails with [`crate::Error::RandomnessUnavailable`] when the OS source
    /// cannot be read.
    pub fn from_os() -> Result<Self> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed)?;
        trace!("seeded generator from the operating system");

        Ok(Self::from_seed(seed))
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable; equal seeds give
    /// equal output streams. The local copy is wiped once consumed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.zeroize();

        Csprng { key, counter: 0 }
    }

    fn next_block(&mut self) -> [u8; 64] {
        let block = chacha20::block(&self.key, self.counter, &NONCE);
        self.counter = self.counter.wrapping_add(1);
        block
    }

    /// Replaces the key with the first half of a fresh block.
    fn rekey(&mut self) {
        let mut block = self.next_block();
        self.key.copy_from_slice(&block[..32]);
        block.zeroize();
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(64) {
            // The counter must not wrap under the same key.
            if self.counter == u32::MAX {
                self.rekey();
            }

            let mut block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
            block.zeroize();
        }

        self.rekey();
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_requests_rekey_before_the_counter_wraps() {
        let key = [0x5c; 32];
        let mut rng = Csprng {
            key,
            counter: u32::MAX - 1,
        };

        let mut out = [0u8; 192];
        rng.fill_bytes(&mut out);

        assert_eq!(out[..64], chacha20::block(&key, u32::MAX - 1, &NONCE));
        assert_ne!(out[128..], chacha20::block(&key, 0, &NONCE));
        assert_ne!(out[128..], chacha20::block(&key, 1, &NONCE));
    }

    #[test]
    fn test_first_output_is_the_first_keystream_block() {
        let mut rng = Csprng::from_seed([0u8; 32]);
        let mut out = [0u8; 16];
        rng.fill_bytes(&mut out);

        assert_eq!(hex::encode(out), "76b8e0ada0f13d90405d6ae55386bd28");
    }

    #[test]
    fn test_rekeying_changes_subsequent_output() {
        let mut rng = Csprng::from_seed([0xaa; 32]);

        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        rng.fill_bytes(&mut a);
        rng.fill_bytes(&mut b);

        assert_ne!(a, b);
    }
}
