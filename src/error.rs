//! Error type shared by every public operation of the crate.
//!
//! Only structurally malformed input and missing entropy are errors. A
//! signature that simply does not verify is reported as `Ok(false)`, never
//! as an `Err`.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the public API.
pub type Result<T> = std::result::Result<T, Error>;

/// The fixed-width value whose length check failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    PrivateKey,
    PublicKey,
    Signature,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyKind::PrivateKey => "private key",
            KeyKind::PublicKey => "public key",
            KeyKind::Signature => "signature",
        })
    }
}

/// Errors returned by key generation, agreement and signing.
#[derive(Debug, Error)]
pub enum Error {
    /// A fixed-width input did not have its exact required length.
    ///
    /// Inputs are never truncated or padded.
    #[error("invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: KeyKind,
        expected: usize,
        actual: usize,
    },

    /// A public key carried a type tag other than the Montgomery tag.
    #[error("invalid public key prefix: 0x{found:02x}")]
    InvalidFormat { found: u8 },

    /// The randomness source could not supply bytes.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(#[from] rand_core::Error),

    /// The agreement produced the all-zero secret and the configuration
    /// asks for low-order peer keys to be rejected.
    #[error("peer public key is a low-order point")]
    LowOrderPoint,
}

impl Error {
    pub(crate) fn length(what: KeyKind, expected: usize, actual: usize) -> Self {
        Error::InvalidLength {
            what,
            expected,
            actual,
        }
    }
}
