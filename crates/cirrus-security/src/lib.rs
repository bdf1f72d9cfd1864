//! # cirrus-security
//!
//! The credential-security core of the cirrus storage backend: signed-token
//! lifecycle (issue, verify, rotate) and password security (hashing,
//! strength evaluation, policy enforcement, random generation).
//!
//! Everything here is synchronous and free of shared mutable state; the only
//! long-lived resource is the signing key inside [`TokenManager`], which is
//! read-only after construction. [`CredentialHasher::hash`] is CPU-heavy on
//! purpose and should run off latency-sensitive paths, see
//! [`CredentialHasher::hash_blocking`].

pub mod password;
pub mod token;

// Re-export commonly used types at crate root
pub use password::{
    evaluate_strength, generate_random_password, validate_password, CharClasses,
    CredentialHasher, NotYetEnforced, PasswordPolicy, StrengthResult, StrengthTier,
    DEFAULT_WORK_FACTOR, MAX_WORK_FACTOR, MIN_WORK_FACTOR,
};
pub use token::{Claims, NoRevocation, RevocationCheck, TokenManager, TokenPair, TokenType};
