//! Finite field arithmetic for Curve25519 / Edwards25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! shared by the Montgomery ladder and by the Edwards group.
//!
//! ## Representation
//!
//! Field elements are stored as five unsigned 51-bit limbs:
//!
//! ```text
//! x = x₀ + x₁·2⁵¹ + x₂·2¹⁰² + x₃·2¹⁵³ + x₄·2²⁰⁴
//! ```
//!
//! Limb products are accumulated in `u128`, and the wrap-around of the top
//! limb is folded back with the identity `2²⁵⁵ ≡ 19 (mod p)`.
//!
//! Every operation leaves its result *weakly reduced*: each limb is below
//! `2⁵²`, which keeps all products of two outputs well inside the 128-bit
//! accumulators. Only [`FieldElement::to_bytes`] produces the canonical
//! representative.
//!
//! ## Design goals
//!
//! - **Constant-time execution**: no secret-dependent branches or memory access.
//! - **Overflow safety**: every intermediate bound is stated next to the code
//!   that relies on it.
//! - **Fixed exponentiation chains**: inversion is `x^(p−2)` and square roots
//!   use `x^((p−5)/8)`, both through the same addition chain.

use std::ops::{Add, Mul, Neg, Sub};

use super::ct::{ConstantTimeEq, mask};

/// Multiplies two limbs into a 128-bit accumulator.
///
/// Used by [`FieldElement::mul`], whose cross products reach roughly
/// `2¹¹⁰` and would silently wrap in 64 bits.
macro_rules! mul {
    ($a:expr, $b:expr) => {
        ($a as u128) * ($b as u128)
    };
}

const LOW_51_BITS: u64 = (1 << 51) - 1;

/// `16·p` split into limbs.
///
/// Added to the minuend before a subtraction so no limb can underflow as long
/// as the subtrahend is weakly reduced.
const SIXTEEN_P: [u64; 5] = [
    36_028_797_018_963_664,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
];

/// A square root of −1 in 𝔽ₚ, namely `2^((p−1)/4)`.
pub(crate) const SQRT_M1: FieldElement = FieldElement([
    0x0006_1b27_4a0e_a0b0,
    0x0000_d5a5_fc8f_189d,
    0x0007_ef5e_9cbd_0c60,
    0x0007_8595_a680_4c9e,
    0x0002_b832_4804_fc1d,
]);

/// Reads eight little-endian bytes starting at `offset`.
#[inline(always)]
fn load_8(input: &[u8; 32], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&input[offset..offset + 8]);
    u64::from_le_bytes(word)
}

/// Field element modulo `2^255 - 19` in radix `2^51`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0, 0, 0, 0, 0]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0]);

    /// Carries every limb once, folding the top carry back times 19.
    ///
    /// Inputs may use the full 64 bits of each limb; outputs satisfy the
    /// weak-reduction bound (every limb below `2⁵¹ + 2¹⁸`).
    #[inline(always)]
    fn reduce(mut limbs: [u64; 5]) -> FieldElement {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        for limb in limbs.iter_mut() {
            *limb &= LOW_51_BITS;
        }

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    /// Carries five 128-bit column sums down to weakly reduced limbs.
    #[inline(always)]
    fn carry_wide(mut columns: [u128; 5]) -> FieldElement {
        let mut out = [0u64; 5];

        for index in 0..4 {
            columns[index + 1] += columns[index] >> 51;
            out[index] = (columns[index] as u64) & LOW_51_BITS;
        }
        out[4] = (columns[4] as u64) & LOW_51_BITS;

        // The final carry is below 2^60, so the product with 19 fits in u64.
        out[0] += ((columns[4] >> 51) as u64) * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BITS;

        FieldElement(out)
    }

    /// Decodes a field element from its 32-byte little-endian encoding.
    ///
    /// Bit 255 is ignored. Values in `[p, 2²⁵⁵)` are accepted and behave as
    /// their residue, as required for Curve25519 u-coordinates.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> FieldElement {
        FieldElement([
            load_8(input, 0) & LOW_51_BITS,
            (load_8(input, 6) >> 3) & LOW_51_BITS,
            (load_8(input, 12) >> 6) & LOW_51_BITS,
            (load_8(input, 19) >> 1) & LOW_51_BITS,
            (load_8(input, 24) >> 12) & LOW_51_BITS,
        ])
    }

    /// Encodes this field element into its canonical 32-byte form.
    ///
    /// The value is first weakly reduced, then `p` is subtracted exactly when
    /// the value is at least `p`. The quotient `q` is computed by propagating
    /// the carry of `x + 19` through all limbs, which avoids any comparison.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut limbs = Self::reduce(self.0).0;

        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;

        for index in 0..4 {
            limbs[index + 1] += limbs[index] >> 51;
            limbs[index] &= LOW_51_BITS;
        }
        // Dropping bit 255 here subtracts 2^255, completing the `- q·p`.
        limbs[4] &= LOW_51_BITS;

        let mut output = [0u8; 32];
        let mut acc = 0u64;
        let mut bits = 0;
        let mut index = 0;

        for limb in limbs {
            acc |= limb << bits;
            bits += 51;

            while bits >= 8 {
                output[index] = acc as u8;
                acc >>= 8;
                bits -= 8;
                index += 1;
            }
        }
        output[31] = acc as u8;

        output
    }

    /// Computes `self²`.
    #[inline(always)]
    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Computes `self^(2^k)` by `k` successive squarings.
    pub(crate) fn pow2k(self, k: u32) -> Self {
        let mut out = self;

        for _ in 0..k {
            out = out.square();
        }

        out
    }

    /// Multiplies by a small constant such as `a24 = 121665`.
    pub(crate) fn mul_small(self, k: u32) -> Self {
        let k = k as u64;

        Self::carry_wide([
            mul!(self.0[0], k),
            mul!(self.0[1], k),
            mul!(self.0[2], k),
            mul!(self.0[3], k),
            mul!(self.0[4], k),
        ])
    }

    /// Shared prefix of the inversion and square-root chains.
    ///
    /// Returns `(self^(2²⁵⁰ − 1), self^11)`.
    fn pow22501(self) -> (Self, Self) {
        let t0 = self.square(); // 2
        let t1 = t0.pow2k(2); // 8
        let t2 = self * t1; // 9
        let t3 = t0 * t2; // 11
        let t4 = t3.square(); // 22
        let t5 = t2 * t4; // 2^5 - 1
        let t7 = t5.pow2k(5) * t5; // 2^10 - 1
        let t9 = t7.pow2k(10) * t7; // 2^20 - 1
        let t11 = t9.pow2k(20) * t9; // 2^40 - 1
        let t13 = t11.pow2k(10) * t7; // 2^50 - 1
        let t15 = t13.pow2k(50) * t13; // 2^100 - 1
        let t17 = t15.pow2k(100) * t15; // 2^200 - 1
        let t19 = t17.pow2k(50) * t13; // 2^250 - 1

        (t19, t3)
    }

    /// Modular inversion by Fermat's little theorem: `self^(p−2)`.
    ///
    /// The inverse of zero is zero.
    pub(crate) fn invert(self) -> Self {
        let (t19, t3) = self.pow22501();

        // 2^255 - 2^5 + 11 = p - 2
        t19.pow2k(5) * t3
    }

    /// Computes `self^((p−5)/8) = self^(2²⁵² − 3)`.
    fn pow_p58(self) -> Self {
        let (t19, _) = self.pow22501();

        self * t19.pow2k(2)
    }

    /// Constant-time conditional swap.
    ///
    /// If `choice == 1`, swaps `self` and `other`; if `choice == 0`, does
    /// nothing.
    pub(crate) fn conditional_swap(&mut self, other: &mut Self, choice: u8) {
        let mask = mask(choice);

        for (a, b) in self.0.iter_mut().zip(other.0.iter_mut()) {
            let t = (*a ^ *b) & mask;
            *a ^= t;
            *b ^= t;
        }
    }

    /// Constant-time conditional move of `other` into `self`.
    pub(crate) fn conditional_assign(&mut self, other: &Self, choice: u8) {
        let mask = mask(choice);

        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a ^= (*a ^ *b) & mask;
        }
    }

    /// Negates `self` in place when `choice == 1`.
    pub(crate) fn conditional_negate(&mut self, choice: u8) {
        let negated = -*self;
        self.conditional_assign(&negated, choice);
    }

    /// Returns `1` if the canonical encoding is odd.
    ///
    /// Odd elements are the "negative" ones in the Ed25519 sign convention.
    pub(crate) fn is_negative(&self) -> u8 {
        self.to_bytes()[0] & 1
    }

    /// Square root of a ratio.
    ///
    /// Returns `(1, +√(u/v))` when `u/v` is a square, and `(0, r)` with an
    /// unspecified `r` otherwise. The root returned is the non-negative one.
    ///
    /// Uses the single-exponentiation candidate
    /// `r = u·v³·(u·v⁷)^((p−5)/8)`, then fixes it up by `√−1` when
    /// `v·r² = −u`.
    pub(crate) fn sqrt_ratio_i(u: &Self, v: &Self) -> (u8, Self) {
        let v3 = v.square() * *v;
        let v7 = v3.square() * *v;
        let mut r = (*u * v3) * (*u * v7).pow_p58();
        let check = *v * r.square();

        let neg_u = -*u;
        let correct_sign = check.ct_eq(u);
        let flipped_sign = check.ct_eq(&neg_u);
        let flipped_sign_i = check.ct_eq(&(neg_u * SQRT_M1));

        let r_prime = r * SQRT_M1;
        r.conditional_assign(&r_prime, flipped_sign | flipped_sign_i);

        let negative = r.is_negative();
        r.conditional_negate(negative);

        (correct_sign | flipped_sign, r)
    }
}

impl ConstantTimeEq for FieldElement {
    /// Compares canonical encodings, so different limb representations of
    /// the same residue are equal.
    fn ct_eq(&self, other: &Self) -> u8 {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other) == 1
    }
}

impl Eq for FieldElement {}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> Self::Output {
        let mut limbs = self.0;

        for (a, b) in limbs.iter_mut().zip(rhs.0.iter()) {
            *a += b;
        }

        Self::reduce(limbs)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut limbs = self.0;

        for ((a, b), bias) in limbs.iter_mut().zip(rhs.0.iter()).zip(SIXTEEN_P) {
            *a = (*a + bias) - b;
        }

        Self::reduce(limbs)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        FieldElement::ZERO - self
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    /// Schoolbook multiplication with the high half folded by 19.
    ///
    /// With weakly reduced inputs each column is below `2¹¹¹`.
    fn mul(self, rhs: Self) -> Self::Output {
        let a = &self.0;
        let b = &rhs.0;

        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = mul!(a[0], b[0])
            + mul!(a[4], b1_19)
            + mul!(a[3], b2_19)
            + mul!(a[2], b3_19)
            + mul!(a[1], b4_19);
        let c1 = mul!(a[1], b[0])
            + mul!(a[0], b[1])
            + mul!(a[4], b2_19)
            + mul!(a[3], b3_19)
            + mul!(a[2], b4_19);
        let c2 = mul!(a[2], b[0])
            + mul!(a[1], b[1])
            + mul!(a[0], b[2])
            + mul!(a[4], b3_19)
            + mul!(a[3], b4_19);
        let c3 = mul!(a[3], b[0])
            + mul!(a[2], b[1])
            + mul!(a[1], b[2])
            + mul!(a[0], b[3])
            + mul!(a[4], b4_19);
        let c4 = mul!(a[4], b[0])
            + mul!(a[3], b[1])
            + mul!(a[2], b[2])
            + mul!(a[1], b[3])
            + mul!(a[0], b[4]);

        Self::carry_wide([c0, c1, c2, c3, c4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(value: u64) -> FieldElement {
        FieldElement([value & LOW_51_BITS, value >> 51, 0, 0, 0])
    }

    #[test]
    fn test_canonical_encoding_of_p_is_zero() {
        let mut p = [0xffu8; 32];
        p[0] = 0xed;
        p[31] = 0x7f;

        assert_eq!(FieldElement::from_bytes(&p).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn test_high_bit_is_ignored_and_non_canonical_values_reduce() {
        // 2^255 - 1 with bit 255 masked off is p + 18.
        let all_ones = [0xffu8; 32];
        let mut expected = [0u8; 32];
        expected[0] = 18;

        assert_eq!(FieldElement::from_bytes(&all_ones).to_bytes(), expected);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        bytes[31] &= 0x3f;

        assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), bytes);
    }

    #[test]
    fn test_subtraction_wraps_around_the_modulus() {
        let minus_one = fe(0) - fe(1);

        assert_eq!(minus_one + fe(1), FieldElement::ZERO);
        assert_eq!(-fe(1), minus_one);
        assert_eq!(minus_one * minus_one, FieldElement::ONE);
    }

    #[test]
    fn test_inversion() {
        for value in [1u64, 2, 9, 121_665, 0xdead_beef] {
            let x = fe(value);
            assert_eq!(x * x.invert(), FieldElement::ONE);
        }

        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn test_small_multiplication_matches_full_multiplication() {
        let x = fe(0x1234_5678_9abc) * fe(0xfedc_ba98_7654);

        assert_eq!(x.mul_small(121_665), x * fe(121_665));
    }

    #[test]
    fn test_sqrt_minus_one_squares_to_minus_one() {
        assert_eq!(SQRT_M1.square(), -FieldElement::ONE);
    }

    #[test]
    fn test_square_roots_of_ratios() {
        let (ok, r) = FieldElement::sqrt_ratio_i(&fe(16), &fe(4));
        assert_eq!(ok, 1);
        assert_eq!(r, fe(2));

        // The odd root 3 is negative, so its negation is returned.
        let (ok, r) = FieldElement::sqrt_ratio_i(&fe(9), &FieldElement::ONE);
        assert_eq!(ok, 1);
        assert_eq!(r, -fe(3));

        // 2 is a non-residue because p ≡ 5 (mod 8).
        let (ok, _) = FieldElement::sqrt_ratio_i(&fe(2), &FieldElement::ONE);
        assert_eq!(ok, 0);

        let (ok, r) = FieldElement::sqrt_ratio_i(&-FieldElement::ONE, &FieldElement::ONE);
        assert_eq!(ok, 1);
        assert_eq!(r.square(), -FieldElement::ONE);
        assert_eq!(r.is_negative(), 0);
    }

    #[test]
    fn test_conditional_operations() {
        let mut a = fe(5);
        let mut b = fe(7);

        a.conditional_swap(&mut b, 0);
        assert_eq!((a, b), (fe(5), fe(7)));

        a.conditional_swap(&mut b, 1);
        assert_eq!((a, b), (fe(7), fe(5)));

        a.conditional_assign(&b, 1);
        assert_eq!(a, fe(5));

        a.conditional_negate(1);
        assert_eq!(a, -fe(5));
        assert_eq!(fe(5) - fe(5), fe(0));
    }
}
