//! Digital signature schemes.
//!
//! Curve25519 keys are Montgomery keys. Signing with them requires moving
//! the private scalar to the birationally equivalent Edwards curve and
//! producing an Ed25519-shaped Schnorr signature there, carrying the one
//! bit of information the Montgomery public key loses.
//!
//! The hash function is a type parameter: any [`sha2::Digest`] with a
//! 64-byte output can be plugged in. [`sha2::Sha512`] is the standard
//! choice and the one used by the crate-level functions.

pub mod xeddsa;
