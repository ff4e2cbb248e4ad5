//! Signatures over Montgomery keys.
//!
//! A signing key pair is derived from a clamped Curve25519 private key:
//!
//! ```text
//! a = clamp(k) mod ℓ
//! A = a·B                        (compressed Edwards point)
//! ```
//!
//! Signing is deterministic:
//!
//! ```text
//! r = H(clamp(k) ‖ M) mod ℓ
//! R = r·B
//! h = H(R ‖ A ‖ M) mod ℓ
//! s = r + h·a mod ℓ
//! σ = R ‖ s,  σ[63] |= sign(A)
//! ```
//!
//! `s < ℓ < 2²⁵³`, so bit 255 of the signature is free. It carries the sign
//! of `A`'s x-coordinate, which a verifier holding only the Montgomery
//! `u` cannot recover on its own.
//!
//! Verification strips that bit, maps `u` to the Edwards point with the
//! given sign, and checks `R = s·B − h·A`.
//!
//! ## Security properties
//!
//! - The nonce is derived from the private key and the message, so the
//!   same pair always signs to the same bytes and no randomness is needed.
//! - The signing scalar and the nonce scalar never leave this module and
//!   are wiped after use.
//! - A public key whose `u` has no Edwards image (twist points, `u = −1`)
//!   never verifies.

use log::debug;
use sha2::digest::{Digest, consts::U64};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arithmetic::ct::ConstantTimeEq;
use crate::arithmetic::scalar::Scalar;
use crate::curve::edwards::EdwardsPoint;
use crate::keys::{PrivateKey, PublicKey, SIGNATURE_LENGTH, Signature, clamp};

/// The Edwards form of a Curve25519 private key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SigningKeyPair {
    clamped: [u8; 32],
    scalar: Scalar,
    public: [u8; 32],
}

impl SigningKeyPair {
    /// Derives the signing scalar and its compressed Edwards public key.
    pub fn derive(private_key: &PrivateKey) -> Self {
        let clamped = clamp(private_key.to_bytes());
        let scalar = Scalar::from_bytes_mod_order(&clamped);
        let public = EdwardsPoint::mul_base(&scalar.to_bytes()).compress();

        SigningKeyPair {
            clamped,
            scalar,
            public,
        }
    }

    /// Returns the compressed Edwards public key `A`.
    pub fn edwards_public_key(&self) -> &[u8; 32] {
        &self.public
    }

    /// Returns the sign of `A` as `0x00` or `0x80`, ready to be OR-ed into
    /// the last signature byte.
    pub fn sign_bit(&self) -> u8 {
        self.public[31] & 0x80
    }
}

/// Hashes the concatenation of `parts` into 64 bytes.
fn digest<D>(parts: &[&[u8]]) -> [u8; 64]
where
    D: Digest<OutputSize = U64>,
{
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }

    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Signs `message` with `private_key`, hashing with `D`.
pub fn sign<D>(private_key: &PrivateKey, message: &[u8]) -> Signature
where
    D: Digest<OutputSize = U64>,
{
    let keys = SigningKeyPair::derive(private_key);

    let mut nonce_digest = digest::<D>(&[&keys.clamped[..], message]);
    let mut r = Scalar::reduce(&nonce_digest);
    nonce_digest.zeroize();

    let r_bytes = EdwardsPoint::mul_base(&r.to_bytes()).compress();

    let h = Scalar::reduce(&digest::<D>(&[&r_bytes[..], &keys.public[..], message]));
    let s = r + h * keys.scalar;
    r.zeroize();

    let mut bytes = [0u8; SIGNATURE_LENGTH];
    bytes[..32].copy_from_slice(&r_bytes);
    bytes[32..].copy_from_slice(&s.to_bytes());
    bytes[63] |= keys.sign_bit();

    Signature::from_array(bytes)
}

/// Checks `signature` over `message` against `public_key`, hashing with `D`.
///
/// Returns `false` for any signature that does not verify, including when
/// the public key names no Edwards point.
pub fn verify<D>(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool
where
    D: Digest<OutputSize = U64>,
{
    let bytes = signature.as_bytes();
    let sign = bytes[63] >> 7;

    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&bytes[..32]);

    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&bytes[32..]);
    s_bytes[31] &= 0x7f;

    let Some(a) = EdwardsPoint::from_montgomery(public_key.u_coordinate(), sign) else {
        debug!("public key has no Edwards counterpart; signature rejected");
        return false;
    };
    let a_bytes = a.compress();

    let h = Scalar::reduce(&digest::<D>(&[&r_bytes[..], &a_bytes[..], message]));
    let check = EdwardsPoint::double_scalar_mul_basepoint(&h.to_bytes(), &-a, &s_bytes);

    check.compress().ct_eq(&r_bytes) == 1
}

#[cfg(test)]
mod tests {
    use sha2::Sha512;

    use super::*;

    fn key() -> PrivateKey {
        let seed: [u8; 32] = std::array::from_fn(|i| i as u8);
        PrivateKey::from_random_bytes(seed)
    }

    #[test]
    fn test_sign_bit_names_the_edwards_key() {
        let private_key = key();
        let keys = SigningKeyPair::derive(&private_key);
        let public_key = private_key.public_key();

        let a = EdwardsPoint::from_montgomery(public_key.u_coordinate(), keys.sign_bit() >> 7)
            .unwrap();

        assert_eq!(&a.compress(), keys.edwards_public_key());
    }

    #[test]
    fn test_known_signature() {
        let signature = sign::<Sha512>(&key(), b"hello world");

        assert_eq!(
            hex::encode(signature.as_bytes()),
            "bbc4678ef2a1a6d05b5375bab9e18a71eb432cdf7233ec73e531e3bc733b4fa9\
             8b51bf66de013c99b5bb1051c0fec3954ab8f31ab8c553e3eaefe1a5ea84f303"
        );
    }

    #[test]
    fn test_round_trip_and_tamper() {
        let private_key = key();
        let public_key = private_key.public_key();
        let signature = sign::<Sha512>(&private_key, b"message");

        assert!(verify::<Sha512>(&public_key, b"message", &signature));
        assert!(!verify::<Sha512>(&public_key, b"messagf", &signature));

        for index in [0, 31, 32, 62, 63] {
            let mut bytes = signature.to_bytes();
            bytes[index] ^= 0x01;
            let tampered = Signature::from_bytes(&bytes).unwrap();

            assert!(!verify::<Sha512>(&public_key, b"message", &tampered));
        }
    }

    #[test]
    fn test_flipped_sign_bit_fails() {
        let private_key = key();
        let signature = sign::<Sha512>(&private_key, b"message");

        let mut bytes = signature.to_bytes();
        bytes[63] ^= 0x80;
        let flipped = Signature::from_bytes(&bytes).unwrap();

        assert!(!verify::<Sha512>(&private_key.public_key(), b"message", &flipped));
    }

    #[test]
    fn test_twist_key_never_verifies() {
        let mut u = [0u8; 32];
        u[0] = 2;
        let public_key = PublicKey::from_u_coordinate(u);
        let signature = sign::<Sha512>(&key(), b"message");

        assert!(!verify::<Sha512>(&public_key, b"message", &signature));
    }
}
