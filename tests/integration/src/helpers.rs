//! Shared constructors for integration tests

use cirrus_security::{CredentialHasher, PasswordPolicy, TokenManager, MIN_WORK_FACTOR};

/// Signing secret used across the integration suite (32+ bytes).
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Issuer used across the integration suite.
pub const TEST_ISSUER: &str = "cirrus-test";

/// Token manager with short but non-trivial lifetimes.
pub fn test_token_manager() -> TokenManager {
    TokenManager::new(TEST_SECRET, TEST_ISSUER, 900, 604_800)
        .expect("test secret meets the length requirement")
}

/// Hasher at the cheapest work factor so the suite stays fast.
pub fn fast_hasher() -> CredentialHasher {
    CredentialHasher::new(MIN_WORK_FACTOR)
}

/// The policy a production deployment would start from.
pub fn default_policy() -> PasswordPolicy {
    PasswordPolicy::default()
}
