//! Low-level arithmetic shared by the Montgomery and Edwards layers.
//!
//! Nothing in this module knows about keys or curves: it provides the two
//! number systems every higher operation is built from, plus the
//! constant-time helpers they rely on.

/// Constant-time utilities.
///
/// Branch-free equality and mask helpers. Every comparison that touches
/// secret or attacker-controlled data goes through this module.
pub(crate) mod ct;

/// Finite field arithmetic.
///
/// Arithmetic over GF(2²⁵⁵ − 19) with five 51-bit limbs:
/// - addition, subtraction, multiplication, squaring,
/// - inversion and square roots through fixed exponentiation chains,
/// - canonical encoding and decoding.
pub(crate) mod field;

/// Scalar arithmetic.
///
/// Integers modulo the Ed25519 group order ℓ, used for the signature
/// nonce, challenge and response.
pub(crate) mod scalar;
