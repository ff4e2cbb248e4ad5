//! The five public Curve25519 operations.
//!
//! Every operation takes and returns plain byte slices at the boundary,
//! checks exact lengths, and hands typed values to the curve and signature
//! modules. [`Curve25519`] carries a [`Config`]; the crate-level functions
//! of the same names use the default configuration.
//!
//! ```
//! use curve25519_signal::Curve25519;
//!
//! let engine = Curve25519::default();
//! let alice = engine.generate_key_pair()?;
//! let bob = engine.generate_key_pair()?;
//!
//! let ab = engine.calculate_agreement(&bob.public_key.serialize(), alice.private_key.as_bytes())?;
//! let ba = engine.calculate_agreement(&alice.public_key.serialize(), bob.private_key.as_bytes())?;
//! assert_eq!(ab, ba);
//!
//! let signature = engine.calculate_signature(alice.private_key.as_bytes(), b"hi")?;
//! assert!(engine.verify_signature(&alice.public_key.serialize(), b"hi", signature.as_bytes())?);
//! # Ok::<(), curve25519_signal::Error>(())
//! ```

use log::debug;
use rand_core::{CryptoRng, RngCore};
use sha2::Sha512;
use sha2::digest::{Digest, consts::U64};

use crate::arithmetic::ct;
use crate::config::{Config, LowOrderPolicy};
use crate::curve::montgomery;
use crate::error::{Error, Result};
use crate::keys::{KeyPair, PrivateKey, PublicKey, SharedSecret, Signature};
use crate::rng::Csprng;
use crate::signatures::xeddsa;

/// A configured Curve25519 engine.
///
/// The engine is stateless apart from its configuration, so it is `Copy`
/// and can be shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Curve25519 {
    config: Config,
}

impl Curve25519 {
    pub fn new(config: Config) -> Self {
        Curve25519 { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates a key pair from a freshly OS-seeded [`Csprng`].
    pub fn generate_key_pair(&self) -> Result<KeyPair> {
        let mut rng = Csprng::from_os()?;
        self.generate_key_pair_with(&mut rng)
    }

    /// Generates a key pair from a caller-supplied generator.
    pub fn generate_key_pair_with<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyPair> {
        KeyPair::generate(rng)
    }

    /// Derives the public key of a 32-byte private key.
    pub fn get_public_from_private_key(&self, private_key: &[u8]) -> Result<PublicKey> {
        Ok(PrivateKey::from_bytes(private_key)?.public_key())
    }

    /// Computes the X25519 shared secret between a peer public key and a
    /// local private key.
    ///
    /// The public key is parsed under the configured
    /// [`crate::PublicKeyFormat`]. A low-order peer key produces the
    /// all-zero secret, which is returned or rejected according to the
    /// configured [`LowOrderPolicy`].
    pub fn calculate_agreement(
        &self,
        public_key: &[u8],
        private_key: &[u8],
    ) -> Result<SharedSecret> {
        let public_key = PublicKey::parse(public_key, self.config.public_key_format)?;
        let private_key = PrivateKey::from_bytes(private_key)?;

        let shared = SharedSecret::new(montgomery::scalar_mult(
            private_key.as_bytes(),
            public_key.u_coordinate(),
        ));

        if self.config.low_order_policy == LowOrderPolicy::Reject
            && ct::is_zero(shared.as_bytes()) == 1
        {
            debug!("agreement rejected: peer key has low order");
            return Err(Error::LowOrderPoint);
        }

        Ok(shared)
    }

    /// Signs `message` with SHA-512.
    pub fn calculate_signature(&self, private_key: &[u8], message: &[u8]) -> Result<Signature> {
        self.calculate_signature_with::<Sha512>(private_key, message)
    }

    /// Signs `message` with the 64-byte digest `D`.
    pub fn calculate_signature_with<D>(
        &self,
        private_key: &[u8],
        message: &[u8],
    ) -> Result<Signature>
    where
        D: Digest<OutputSize = U64>,
    {
        let private_key = PrivateKey::from_bytes(private_key)?;
        Ok(xeddsa::sign::<D>(&private_key, message))
    }

    /// Verifies a SHA-512 signature.
    ///
    /// Malformed lengths or a wrong public key tag are errors. A
    /// well-formed signature that does not match is `Ok(false)`.
    pub fn verify_signature(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool> {
        self.verify_signature_with::<Sha512>(public_key, message, signature)
    }

    /// Verifies a signature produced with the 64-byte digest `D`.
    pub fn verify_signature_with<D>(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool>
    where
        D: Digest<OutputSize = U64>,
    {
        let public_key = PublicKey::parse(public_key, self.config.public_key_format)?;
        let signature = Signature::from_bytes(signature)?;

        Ok(xeddsa::verify::<D>(&public_key, message, &signature))
    }
}

/// [`Curve25519::generate_key_pair`] with the default configuration.
pub fn generate_key_pair() -> Result<KeyPair> {
    Curve25519::default().generate_key_pair()
}

/// [`Curve25519::get_public_from_private_key`] with the default configuration.
pub fn get_public_from_private_key(private_key: &[u8]) -> Result<PublicKey> {
    Curve25519::default().get_public_from_private_key(private_key)
}

/// [`Curve25519::calculate_agreement`] with the default configuration.
pub fn calculate_agreement(public_key: &[u8], private_key: &[u8]) -> Result<SharedSecret> {
    Curve25519::default().calculate_agreement(public_key, private_key)
}

/// [`Curve25519::calculate_signature`] with the default configuration.
pub fn calculate_signature(private_key: &[u8], message: &[u8]) -> Result<Signature> {
    Curve25519::default().calculate_signature(private_key, message)
}

/// [`Curve25519::verify_signature`] with the default configuration.
pub fn verify_signature(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    Curve25519::default().verify_signature(public_key, message, signature)
}
