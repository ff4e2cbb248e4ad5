//! Random number generation.
//!
//! Key generation draws its 32 bytes from any `rand_core` generator that is
//! marked [`rand_core::CryptoRng`]. This module provides the default one: a
//! ChaCha20-based deterministic random bit generator seeded from the
//! operating system.
//!
//! Design goals:
//! - deterministic expansion from a secure seed
//! - forward secrecy through rekeying after every request
//! - no heap allocation

/// ChaCha20 block function (RFC 8439).
pub(crate) mod chacha20;
mod csprng;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::Csprng;
