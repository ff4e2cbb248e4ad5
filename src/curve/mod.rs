//! The two models of Curve25519.
//!
//! A single private scalar is used on two birationally equivalent curves:
//!
//! - the **Montgomery** form, where key derivation and Diffie–Hellman
//!   agreement run on u-coordinates only (RFC 7748);
//! - the **twisted Edwards** form, where full points are needed to produce
//!   and check Schnorr-style signatures.
//!
//! Both are stateless: every function takes its inputs by value or
//! reference and returns a fresh result.

pub(crate) mod constants;

/// Edwards group arithmetic and the Montgomery → Edwards map.
pub(crate) mod edwards;

/// X25519 Montgomery ladder.
pub(crate) mod montgomery;
