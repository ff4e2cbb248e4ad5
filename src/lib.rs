//! Curve25519 key agreement and signatures with a single key pair.
//!
//! This crate provides the primitive set a messaging protocol needs from
//! Curve25519: key generation, public key derivation, X25519 agreement,
//! and signatures made directly with the agreement key.
//!
//! A private key is a clamped 32-byte scalar. Its public key is a
//! Montgomery u-coordinate, serialized with a one-byte type tag (`0x05`).
//! Signatures are computed by mapping the same scalar onto the
//! birationally equivalent Edwards curve, and carry one extra bit so the
//! verifier can recover the Edwards public key from the Montgomery one.
//!
//! # Module overview
//!
//! - `arithmetic`  
//!   Field elements modulo 2²⁵⁵ − 19, scalars modulo the group order and
//!   constant-time helpers. Internal.
//!
//! - `curve`  
//!   The Montgomery ladder and the Edwards group, including the map
//!   between the two models. Internal.
//!
//! - `keys`  
//!   Private keys, tagged public keys, key pairs, shared secrets and
//!   signatures as fixed-width byte containers, plus clamping.
//!
//! - `signatures`  
//!   Signing and verification over Montgomery keys, generic over the
//!   64-byte hash function.
//!
//! - `rng`  
//!   A ChaCha20 generator seeded from the operating system, used for key
//!   generation unless the caller supplies its own.
//!
//! - `config`  
//!   Policies for legacy public key encodings and low-order peer keys.
//!
//! # Quick start
//!
//! ```
//! let pair = curve25519_signal::generate_key_pair()?;
//! let public_key = pair.public_key.serialize();
//!
//! let signature = curve25519_signal::calculate_signature(pair.private_key.as_bytes(), b"msg")?;
//! assert!(curve25519_signal::verify_signature(&public_key, b"msg", signature.as_bytes())?);
//! # Ok::<(), curve25519_signal::Error>(())
//! ```
//!
//! # Design goals
//!
//! - Constant-time handling of every secret
//! - No heap allocations
//! - Exact-length inputs, never padded or truncated
//! - Secrets wiped on drop and redacted from `Debug`

mod api;
mod arithmetic;
mod curve;

pub mod config;
pub mod error;
pub mod keys;
pub mod rng;
pub mod signatures;

pub use api::{
    Curve25519, calculate_agreement, calculate_signature, generate_key_pair,
    get_public_from_private_key, verify_signature,
};
pub use config::{Config, LowOrderPolicy, PublicKeyFormat};
pub use error::{Error, KeyKind, Result};
pub use keys::{KeyPair, PrivateKey, PublicKey, SharedSecret, Signature};
