//! Curve25519 key material.
//!
//! This module defines the fixed-width containers exchanged with callers:
//! private keys, tagged public keys, key pairs, shared secrets and
//! signatures, together with the scalar clamping rule.
//!
//! It provides a clear separation between **key material** and the
//! algorithms that operate on it. No agreement, signing or verification
//! logic lives here, only key structure, parsing and derivation of the
//! public key.
//!
//! ## Encodings
//!
//! | Value         | Length | Encoding                                |
//! |---------------|--------|-----------------------------------------|
//! | Private key   | 32     | raw clamped scalar                      |
//! | Public key    | 33     | `0x05` ‖ Montgomery u-coordinate        |
//! | Shared secret | 32     | raw field element                       |
//! | Signature     | 64     | `R ‖ s`, sign bit in bit 7 of byte 63   |
//!
//! ## Secrets
//!
//! [`PrivateKey`] and [`SharedSecret`] are wiped on drop and never print
//! their contents through `Debug`.

mod core;

pub use self::core::*;
