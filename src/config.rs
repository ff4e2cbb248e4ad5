//! Policy knobs for the public operations.
//!
//! The arithmetic itself has nothing to configure. What varies between
//! deployments is how strictly peer input is treated, and this module
//! gathers those decisions in one value.

/// How serialized public keys are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PublicKeyFormat {
    /// Exactly 33 bytes, starting with the `0x05` type tag.
    #[default]
    Strict,
    /// Also accept a bare 32-byte u-coordinate.
    ///
    /// Some older clients emit public keys without the tag. Every such key
    /// is logged at `warn` level so the producer can be tracked down.
    AllowUnprefixed,
}

/// What to do when an agreement yields the all-zero shared secret.
///
/// The all-zero output appears exactly when the peer's u-coordinate lies in
/// a small subgroup, so the secret carries no contribution from the local
/// private key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LowOrderPolicy {
    /// Return the all-zero secret unchanged, as RFC 7748 X25519 does.
    #[default]
    Allow,
    /// Fail with [`crate::Error::LowOrderPoint`].
    Reject,
}

/// Configuration of a [`crate::Curve25519`] engine.
///
/// # Defaults
///
/// - `public_key_format`: [`PublicKeyFormat::Strict`]
/// - `low_order_policy`: [`LowOrderPolicy::Allow`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Accepted public key encodings.
    pub public_key_format: PublicKeyFormat,
    /// Handling of all-zero agreement results.
    pub low_order_policy: LowOrderPolicy,
}

impl Config {
    /// Returns a copy with the given public key format.
    pub fn with_public_key_format(mut self, format: PublicKeyFormat) -> Self {
        self.public_key_format = format;
        self
    }

    /// Returns a copy with the given low-order policy.
    pub fn with_low_order_policy(mut self, policy: LowOrderPolicy) -> Self {
        self.low_order_policy = policy;
        self
    }
}
