//! Arithmetic modulo the Ed25519 group order ℓ.
//!
//! ```text
//! ℓ = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! Scalars are the exponents of the Edwards base point. Signing needs three
//! things from this module:
//! - reduction of a 512-bit hash output modulo ℓ,
//! - reduction of a clamped 256-bit private key modulo ℓ,
//! - the response `s = r + h·a (mod ℓ)`.
//!
//! ## Representation
//!
//! Values are held as five 52-bit limbs and are always fully reduced
//! (`0 ≤ x < ℓ`) between operations. Multiplication and reduction use
//! Montgomery's method with `R = 2²⁶⁰`: a Montgomery step computes
//! `x·R⁻¹ mod ℓ` using only multiplications, shifts and a final masked
//! subtraction, so no step branches on the value being reduced.

use std::ops::{Add, Mul};

use zeroize::Zeroize;

use super::ct::mask;

const LOW_52_BITS: u64 = (1 << 52) - 1;

/// ℓ in radix `2⁵²`.
const L: [u64; 5] = [
    0x0002_631a_5cf5_d3ed,
    0x000d_ea2f_79cd_6581,
    0x0000_0000_0014_def9,
    0x0000_0000_0000_0000,
    0x0000_1000_0000_0000,
];

/// `−ℓ⁻¹ mod 2⁵²`.
const LFACTOR: u64 = 0x0005_1da3_1254_7e1b;

/// `R = 2²⁶⁰ mod ℓ`.
const R: [u64; 5] = [
    0x000f_48bd_6721_e6ed,
    0x0003_bab5_ac67_e45a,
    0x000f_ffff_eb35_e51b,
    0x000f_ffff_ffff_ffff,
    0x0000_0fff_ffff_ffff,
];

/// `R² = 2⁵²⁰ mod ℓ`.
const RR: [u64; 5] = [
    0x0009_d265_e952_d13b,
    0x000d_63c7_15be_a69f,
    0x0005_be65_cb68_7604,
    0x0003_dcee_c73d_217f,
    0x0000_0941_1b7c_309a,
];

/// Multiplies two limbs into a 128-bit accumulator.
#[inline(always)]
fn m(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Reads `N` little-endian 64-bit words from `bytes`.
fn load_words<const N: usize>(bytes: &[u8]) -> [u64; N] {
    let mut words = [0u64; N];

    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = u64::from_le_bytes(buf);
    }

    words
}

/// An integer modulo ℓ, always fully reduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub(crate) struct Scalar([u64; 5]);

impl Scalar {
    /// Splits 256 bits into limbs without reducing.
    fn unpack(bytes: &[u8; 32]) -> [u64; 5] {
        let w: [u64; 4] = load_words(bytes);

        [
            w[0] & LOW_52_BITS,
            ((w[0] >> 52) | (w[1] << 12)) & LOW_52_BITS,
            ((w[1] >> 40) | (w[2] << 24)) & LOW_52_BITS,
            ((w[2] >> 28) | (w[3] << 36)) & LOW_52_BITS,
            w[3] >> 16,
        ]
    }

    /// Reduces any 256-bit little-endian integer modulo ℓ.
    ///
    /// One Montgomery step on `x·R` yields `x` itself, now below ℓ.
    pub(crate) fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        Self::montgomery_reduce(&Self::mul_internal(&Self::unpack(bytes), &R))
    }

    /// Reduces a 512-bit little-endian integer (a SHA-512 digest) modulo ℓ.
    ///
    /// The input is split at bit 260 into `lo + hi·2²⁶⁰`; then
    /// `lo·R·R⁻¹ = lo` and `hi·R²·R⁻¹ = hi·R`, and the sum is the residue.
    pub(crate) fn reduce(wide: &[u8; 64]) -> Self {
        let w: [u64; 8] = load_words(wide);

        let lo = [
            w[0] & LOW_52_BITS,
            ((w[0] >> 52) | (w[1] << 12)) & LOW_52_BITS,
            ((w[1] >> 40) | (w[2] << 24)) & LOW_52_BITS,
            ((w[2] >> 28) | (w[3] << 36)) & LOW_52_BITS,
            ((w[3] >> 16) | (w[4] << 48)) & LOW_52_BITS,
        ];
        let hi = [
            (w[4] >> 4) & LOW_52_BITS,
            ((w[4] >> 56) | (w[5] << 8)) & LOW_52_BITS,
            ((w[5] >> 44) | (w[6] << 20)) & LOW_52_BITS,
            ((w[6] >> 32) | (w[7] << 32)) & LOW_52_BITS,
            w[7] >> 20,
        ];

        let lo = Self::montgomery_reduce(&Self::mul_internal(&lo, &R));
        let hi = Self::montgomery_reduce(&Self::mul_internal(&hi, &RR));

        hi + lo
    }

    /// Returns the canonical 32-byte little-endian encoding.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut output = [0u8; 32];
        let mut acc = 0u64;
        let mut bits = 0;
        let mut index = 0;

        // 5 × 52 = 260 bits: exactly 32 whole bytes are emitted.
        for limb in self.0 {
            acc |= limb << bits;
            bits += 52;

            while bits >= 8 {
                output[index] = acc as u8;
                acc >>= 8;
                bits -= 8;
                index += 1;
            }
        }

        output
    }

    /// Computes `a − b`, adding ℓ back when the difference is negative.
    ///
    /// Correct whenever `a < 2ℓ` and `b ≤ ℓ`.
    fn sub(a: &[u64; 5], b: &[u64; 5]) -> Self {
        let mut difference = [0u64; 5];
        let mut borrow = 0u64;

        for index in 0..5 {
            borrow = a[index].wrapping_sub(b[index] + (borrow >> 63));
            difference[index] = borrow & LOW_52_BITS;
        }

        let underflow = mask((borrow >> 63) as u8);
        let mut carry = 0u64;

        for index in 0..5 {
            carry = (carry >> 52) + difference[index] + (L[index] & underflow);
            difference[index] = carry & LOW_52_BITS;
        }

        Scalar(difference)
    }

    /// Full 5 × 5 limb product, column by column.
    fn mul_internal(a: &[u64; 5], b: &[u64; 5]) -> [u128; 9] {
        let mut columns = [0u128; 9];

        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                columns[i + j] += m(x, y);
            }
        }

        columns
    }

    /// Montgomery reduction: returns `t·R⁻¹ mod ℓ` for `t < ℓ·R`.
    ///
    /// Each of the five rounds picks `n` so that the lowest live column
    /// becomes divisible by `2⁵²`, adds `n·ℓ`, and shifts that column out.
    fn montgomery_reduce(t: &[u128; 9]) -> Self {
        let mut t = *t;
        let mut carry = 0u128;

        for i in 0..5 {
            let column = t[i] + carry;
            let n = (column as u64).wrapping_mul(LFACTOR) & LOW_52_BITS;

            carry = (column + m(n, L[0])) >> 52;
            for j in 1..5 {
                t[i + j] += m(n, L[j]);
            }
        }

        let mut r = [0u64; 5];
        for i in 0..4 {
            let column = t[5 + i] + carry;
            r[i] = (column as u64) & LOW_52_BITS;
            carry = column >> 52;
        }
        r[4] = carry as u64;

        // r < 2ℓ here.
        Self::sub(&r, &L)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = [0u64; 5];
        let mut carry = 0u64;

        for index in 0..5 {
            carry = self.0[index] + rhs.0[index] + (carry >> 52);
            sum[index] = carry & LOW_52_BITS;
        }

        Self::sub(&sum, &L)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    /// `(a·b·R⁻¹)·R²·R⁻¹ = a·b`.
    fn mul(self, rhs: Self) -> Self::Output {
        let ab = Self::montgomery_reduce(&Self::mul_internal(&self.0, &rhs.0));

        Self::montgomery_reduce(&Self::mul_internal(&ab.0, &RR))
    }
}
