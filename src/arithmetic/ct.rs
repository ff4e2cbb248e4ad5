/// Constant-time comparison utilities.
///
/// This trait provides the equality primitive used wherever secret or
/// attacker-influenced data is compared. Implementations must ensure that
/// execution time does not depend on the compared values.
///
/// All operations are designed to compile down to branch-free code.
pub(crate) trait ConstantTimeEq {
    /// Returns `1` if `self == other`, `0` otherwise, in constant time.
    ///
    /// This method must not introduce data-dependent branches or early exits.
    fn ct_eq(&self, other: &Self) -> u8;
}

impl ConstantTimeEq for u8 {
    /// Constant-time equality test for single bytes.
    ///
    /// `(a ^ b) - 1` underflows to all ones exactly when the bytes are
    /// equal, so the top bit of the widened difference is the answer.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> u8 {
        (((*self ^ *other) as u64).wrapping_sub(1) >> 63) as u8
    }
}

impl ConstantTimeEq for [u8; 32] {
    /// Constant-time equality test for 32-byte arrays.
    ///
    /// All bytes are XORed and accumulated before comparison, ensuring that
    /// the execution time does not depend on where the first difference occurs.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> u8 {
        self.iter()
            .zip(other)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            .ct_eq(&0)
    }
}

/// Expands a `0`/`1` choice into an all-zeros/all-ones 64-bit mask.
#[inline(always)]
pub(crate) fn mask(choice: u8) -> u64 {
    0u64.wrapping_sub((choice & 1) as u64)
}

/// Returns `1` if every byte of `bytes` is zero, in constant time.
#[inline(always)]
pub(crate) fn is_zero(bytes: &[u8; 32]) -> u8 {
    bytes.ct_eq(&[0u8; 32])
}
