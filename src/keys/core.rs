//! Curve25519 key, secret and signature containers.
//!
//! The types here are fixed-width byte wrappers with explicit constructors.
//! Each constructor checks the exact length of its input and never pads or
//! truncates; arithmetic lives in the `curve` and `signatures` modules.

use std::fmt;

use log::warn;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arithmetic::ct::ConstantTimeEq;
use crate::config::PublicKeyFormat;
use crate::curve::constants::X25519_BASEPOINT;
use crate::curve::montgomery;
use crate::error::{Error, KeyKind, Result};

/// Type tag prefixed to every serialized public key ("DJB" Montgomery
/// u-coordinate format).
pub const DJB_TYPE: u8 = 0x05;

/// Length of a private key in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of a serialized public key in bytes, tag included.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Length of a shared secret in bytes.
pub const SHARED_SECRET_LENGTH: usize = 32;

/// Length of a signature in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Clamps 32 bytes into a Curve25519 private scalar.
///
/// - the three lowest bits are cleared, making the scalar a multiple of the
///   cofactor 8;
/// - bit 255 is cleared and bit 254 is set, fixing the position of the top
///   bit for the ladder.
///
/// Clamping is idempotent.
#[inline]
pub fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
    bytes
}

/// Copies a slice into an array after checking its exact length.
fn fixed<const N: usize>(bytes: &[u8], what: KeyKind) -> Result<[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| Error::length(what, N, bytes.len()))
}

/// A Curve25519 private key: a 32-byte clamped scalar.
///
/// The same scalar is used for agreement and, through the Edwards map, for
/// signing. The bytes are wiped when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Wraps externally produced key bytes.
    ///
    /// The bytes are expected to be clamped already; they are stored as
    /// given. Fails with [`Error::InvalidLength`] unless exactly 32 bytes
    /// are supplied.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        fixed(bytes, KeyKind::PrivateKey).map(PrivateKey)
    }

    /// Builds a private key from fresh random bytes, clamping them.
    pub fn from_random_bytes(bytes: [u8; 32]) -> Self {
        PrivateKey(clamp(bytes))
    }

    /// Returns the raw scalar bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns a copy of the raw scalar bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Derives the public key: the ladder applied to the base point `u = 9`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(montgomery::scalar_mult(&self.0, &X25519_BASEPOINT))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A Curve25519 public key, held as its 32-byte Montgomery u-coordinate.
///
/// The serialized form is 33 bytes: [`DJB_TYPE`] followed by `u`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Parses a 33-byte serialized public key.
    ///
    /// Fails with [`Error::InvalidLength`] for any other length and with
    /// [`Error::InvalidFormat`] when the tag byte is not [`DJB_TYPE`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes, PublicKeyFormat::Strict)
    }

    /// Parses a public key under the given format policy.
    ///
    /// With [`PublicKeyFormat::AllowUnprefixed`], a bare 32-byte
    /// u-coordinate is also accepted, with a warning.
    pub fn parse(bytes: &[u8], format: PublicKeyFormat) -> Result<Self> {
        match (bytes.len(), format) {
            (PUBLIC_KEY_LENGTH, _) => {
                if bytes[0] != DJB_TYPE {
                    return Err(Error::InvalidFormat { found: bytes[0] });
                }

                fixed(&bytes[1..], KeyKind::PublicKey).map(PublicKey)
            }
            (32, PublicKeyFormat::AllowUnprefixed) => {
                warn!(
                    "accepting unprefixed 32-byte public key; expected {PUBLIC_KEY_LENGTH} bytes"
                );

                fixed(bytes, KeyKind::PublicKey).map(PublicKey)
            }
            (actual, _) => Err(Error::length(KeyKind::PublicKey, PUBLIC_KEY_LENGTH, actual)),
        }
    }

    /// Builds a public key from a bare u-coordinate.
    pub fn from_u_coordinate(u: [u8; 32]) -> Self {
        PublicKey(u)
    }

    /// Returns the Montgomery u-coordinate.
    #[inline]
    pub fn u_coordinate(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the 33-byte serialized form.
    pub fn serialize(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        let mut out = [0u8; PUBLIC_KEY_LENGTH];
        out[0] = DJB_TYPE;
        out[1..].copy_from_slice(&self.0);
        out
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(")?;
        for byte in self.serialize() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// A private key together with its public key.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generates a key pair from 32 bytes drawn from `rng`.
    ///
    /// Fails with [`Error::RandomnessUnavailable`] if the source cannot
    /// supply bytes.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut seed = [0u8; 32];
        rng.try_fill_bytes(&mut seed)?;

        let private_key = PrivateKey::from_random_bytes(seed);
        seed.zeroize();

        Ok(Self::from_private_key(private_key))
    }

    /// Completes a private key with its derived public key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();

        KeyPair {
            private_key,
            public_key,
        }
    }
}

/// The 32-byte result of a Diffie–Hellman agreement.
///
/// Compared in constant time and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    pub(crate) fn new(bytes: [u8; 32]) -> Self {
        SharedSecret(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0) == 1
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// A 64-byte signature `R ‖ s`.
///
/// Bit 7 of the last byte carries the sign of the signer's Edwards public
/// key, which the verifier cannot recover from the Montgomery key alone.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Parses a signature, failing with [`Error::InvalidLength`] unless
    /// exactly 64 bytes are supplied.
    ///
    /// No cryptographic validation happens here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        fixed(bytes, KeyKind::Signature).map(Signature)
    }

    pub(crate) fn from_array(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Signature(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
