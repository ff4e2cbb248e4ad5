use zeroize::Zeroize;

use super::constants::A24;
use crate::arithmetic::field::FieldElement;
use crate::keys::clamp;

/// Curve25519 scalar multiplication on u-coordinates (RFC 7748).
///
/// Computes the u-coordinate of `k·P` where `P` is any point whose
/// u-coordinate is `u`, on the Montgomery curve
///
/// ```text
/// v² = u³ + 486662·u² + u   over 𝔽ₚ, p = 2²⁵⁵ − 19
/// ```
///
/// ## Inputs
///
/// - `scalar`: 32-byte secret scalar. It is clamped before use, which is a
///   no-op for keys produced by this crate.
/// - `u`: 32-byte little-endian u-coordinate. Bit 255 is ignored and
///   non-canonical values are reduced, as RFC 7748 requires.
///
/// ## Algorithm
///
/// 1. Clamp the scalar.
/// 2. Decode `u` as a field element `x₁`.
/// 3. Run the Montgomery ladder over bits 254..0 with constant-time swaps.
/// 4. Return `x₂ / z₂` with a single inversion.
///
/// The ladder keeps `(x₂:z₂) = m·P` and `(x₃:z₃) = (m+1)·P`; the swap flag
/// is only ever consumed through masked swaps, so the scalar bits never
/// reach a branch or an address.
///
/// ## Return value
///
/// The 32-byte canonical u-coordinate of the result. Low-order inputs
/// produce all zeros; that value is returned as-is and callers decide what
/// to do with it.
pub(crate) fn scalar_mult(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let mut k = clamp(*scalar);

    let x1 = FieldElement::from_bytes(u);
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = 0u8;

    for pos in (0..=254).rev() {
        let bit = (k[pos >> 3] >> (pos & 7)) & 1;
        swap ^= bit;

        x2.conditional_swap(&mut x3, swap);
        z2.conditional_swap(&mut z3, swap);
        swap = bit;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;

        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = e * (aa + e.mul_small(A24));
    }

    x2.conditional_swap(&mut x3, swap);
    z2.conditional_swap(&mut z3, swap);

    k.zeroize();

    (x2 * z2.invert()).to_bytes()
}
