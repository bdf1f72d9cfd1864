//! Revocation-check seam
//!
//! No revocation store exists yet; every token carries a `jti` so one can be
//! added without a wire change. The trait keeps the lookup injectable.

/// Checks whether a token identifier has been revoked.
///
/// Implementations must be cheap and non-blocking: [`super::TokenManager`]
/// calls this on every verification.
pub trait RevocationCheck: Send + Sync {
    /// Returns true if the token with this `jti` must be rejected.
    fn is_revoked(&self, jti: &str) -> bool;
}

/// Default check: nothing is ever revoked.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRevocation;

impl RevocationCheck for NoRevocation {
    fn is_revoked(&self, _jti: &str) -> bool {
        false
    }
}
