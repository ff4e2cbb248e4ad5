//! Edwards25519 group operations.
//!
//! This module implements the group arithmetic needed to sign with a
//! Curve25519 key: the twisted Edwards curve
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²   over 𝔽ₚ, p = 2²⁵⁵ − 19
//! ```
//!
//! which is birationally equivalent to the Montgomery curve used for key
//! agreement. The map is
//!
//! ```text
//! y = (u − 1) / (u + 1)
//! ```
//!
//! and it determines `x` only up to sign, which is why a Montgomery public
//! key needs one extra bit to name a unique Edwards point.
//!
//! ## Coordinates
//!
//! Points are kept in extended coordinates `(X : Y : Z : T)` with
//! `x = X/Z`, `y = Y/Z` and `x·y = T/Z`. A single representation is used
//! everywhere; there are no cached or precomputed variants.
//!
//! ## Algorithms
//!
//! - Addition uses the unified `add-2008-hwcd-3` formula, which is complete
//!   on this curve (it also handles doubling and the identity).
//! - Doubling uses `dbl-2008-hwcd`.
//! - Scalar multiplication processes 4-bit windows from the top, and reads
//!   the window's multiple out of a 16-entry table by scanning every entry
//!   with a masked move.
//!
//! ## Security properties
//!
//! Scalar multiplication is constant-time with respect to the scalar.
//! Decompression and the Montgomery conversion operate on public data and
//! may return early.

use std::ops::{Add, Neg};

use super::constants::{ED25519_BASEPOINT, EDWARDS_D, EDWARDS_D2};
use crate::arithmetic::ct::ConstantTimeEq;
use crate::arithmetic::field::FieldElement;

/// A point on Edwards25519 in extended coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element `(0, 1)`.
    pub(crate) const IDENTITY: Self = EdwardsPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Computes `2·self`.
    pub(crate) fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let zz = self.z.square();
        let c = zz + zz;

        // With a = −1: D = −A, G = D + B, F = G − C, H = D − B.
        let e = (self.x + self.y).square() - a - b;
        let g = b - a;
        let f = g - c;
        let h = -(a + b);

        EdwardsPoint {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Constant-time conditional move of `other` into `self`.
    fn conditional_assign(&mut self, other: &Self, choice: u8) {
        self.x.conditional_assign(&other.x, choice);
        self.y.conditional_assign(&other.y, choice);
        self.z.conditional_assign(&other.z, choice);
        self.t.conditional_assign(&other.t, choice);
    }

    /// Compresses to the 32-byte encoding: `y` with the parity of `x` in
    /// bit 255.
    pub(crate) fn compress(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut bytes = y.to_bytes();
        bytes[31] ^= x.is_negative() << 7;

        bytes
    }

    /// Decompresses a 32-byte encoding.
    ///
    /// Recovers `x² = (y² − 1) / (d·y² + 1)` and picks the root whose parity
    /// matches bit 255. Returns `None` when the ratio is not a square, i.e.
    /// the encoding names no curve point.
    pub(crate) fn decompress(bytes: &[u8; 32]) -> Option<Self> {
        let y = FieldElement::from_bytes(bytes);
        let sign = bytes[31] >> 7;

        let yy = y.square();
        let u = yy - FieldElement::ONE;
        let v = yy * EDWARDS_D + FieldElement::ONE;

        let (is_square, mut x) = FieldElement::sqrt_ratio_i(&u, &v);
        if is_square == 0 {
            return None;
        }

        // sqrt_ratio_i returns the even root.
        x.conditional_negate(sign);

        Some(EdwardsPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x * y,
        })
    }

    /// Maps a Montgomery u-coordinate to the Edwards point with the given
    /// sign bit.
    ///
    /// Returns `None` for `u = −1`, where the map is undefined, and for any
    /// `u` whose image is not on the curve (points of the quadratic twist).
    pub(crate) fn from_montgomery(u: &[u8; 32], sign: u8) -> Option<Self> {
        let u = FieldElement::from_bytes(u);

        if u.ct_eq(&-FieldElement::ONE) == 1 {
            return None;
        }

        let y = (u - FieldElement::ONE) * (u + FieldElement::ONE).invert();

        let mut bytes = y.to_bytes();
        bytes[31] ^= (sign & 1) << 7;

        Self::decompress(&bytes)
    }

    /// Constant-time variable-base scalar multiplication.
    ///
    /// `scalar` is read as a 256-bit little-endian integer and need not be
    /// reduced modulo ℓ.
    pub(crate) fn mul(&self, scalar: &[u8; 32]) -> Self {
        let mut table = [EdwardsPoint::IDENTITY; 16];
        for index in 1..16 {
            table[index] = table[index - 1] + *self;
        }

        let mut acc = EdwardsPoint::IDENTITY;

        for window in (0..64).rev() {
            acc = acc.double().double().double().double();

            let digit = (scalar[window >> 1] >> ((window & 1) << 2)) & 0x0f;

            let mut selected = EdwardsPoint::IDENTITY;
            for (index, entry) in table.iter().enumerate() {
                selected.conditional_assign(entry, (index as u8).ct_eq(&digit));
            }

            acc = acc + selected;
        }

        acc
    }

    /// Computes `scalar·B` for the Ed25519 base point `B`.
    pub(crate) fn mul_base(scalar: &[u8; 32]) -> Self {
        ED25519_BASEPOINT.mul(scalar)
    }

    /// Computes `a·A + b·B` for the Ed25519 base point `B`.
    ///
    /// Only used by verification, where all inputs are public.
    pub(crate) fn double_scalar_mul_basepoint(a: &[u8; 32], point: &Self, b: &[u8; 32]) -> Self {
        point.mul(a) + Self::mul_base(b)
    }
}

impl Add for EdwardsPoint {
    type Output = EdwardsPoint;

    /// Unified addition (`add-2008-hwcd-3`, `k = 2d`).
    fn add(self, rhs: Self) -> Self::Output {
        let a = (self.y - self.x) * (rhs.y - rhs.x);
        let b = (self.y + self.x) * (rhs.y + rhs.x);
        let c = self.t * EDWARDS_D2 * rhs.t;
        let zz = self.z * rhs.z;
        let d = zz + zz;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        EdwardsPoint {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> Self::Output {
        EdwardsPoint {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }
}
