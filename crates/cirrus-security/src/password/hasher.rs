//! Password hashing and verification
//!
//! Uses Argon2id (OWASP recommended) with a configurable time cost as the
//! work factor. Verification never reports *why* it failed: a malformed
//! digest and a wrong password are indistinguishable to the caller.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};

use cirrus_common::error::{AppError, AppResult};

/// Lowest accepted work factor (Argon2 iterations)
pub const MIN_WORK_FACTOR: u32 = 1;

/// Highest accepted work factor
pub const MAX_WORK_FACTOR: u32 = 16;

/// Work factor used when the requested one is out of range
pub const DEFAULT_WORK_FACTOR: u32 = 3;

/// Memory cost in KiB (19 MiB, OWASP baseline)
const MEMORY_COST_KIB: u32 = 19_456;

/// One-way credential hasher
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    work_factor: u32,
}

impl CredentialHasher {
    /// Create a hasher with the given work factor
    ///
    /// Out-of-range values silently fall back to [`DEFAULT_WORK_FACTOR`]
    /// so a bad config knob degrades to a safe cost instead of an outage.
    #[must_use]
    pub fn new(work_factor: u32) -> Self {
        let work_factor = if (MIN_WORK_FACTOR..=MAX_WORK_FACTOR).contains(&work_factor) {
            work_factor
        } else {
            DEFAULT_WORK_FACTOR
        };

        // Keep the reported work factor in lockstep with the effective one:
        // if the params are ever rejected, fall back to the library defaults
        // and report their cost instead of the requested value.
        let (argon2, work_factor) = match Params::new(MEMORY_COST_KIB, work_factor, 1, None) {
            Ok(params) => (
                Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
                work_factor,
            ),
            Err(_) => (Argon2::default(), Params::DEFAULT_T_COST),
        };

        Self { argon2, work_factor }
    }

    /// The effective work factor after range handling
    #[must_use]
    pub fn work_factor(&self) -> u32 {
        self.work_factor
    }

    /// Hash a password into a salted PHC string
    ///
    /// CPU-intensive by design; on a latency-sensitive path use
    /// [`Self::hash_blocking`].
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] for an empty password.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        if password.is_empty() {
            return Err(AppError::invalid_input("password must not be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(anyhow::anyhow!("password hashing failed: {e}")))
    }

    /// Hash on the blocking thread pool
    ///
    /// # Errors
    /// Same as [`Self::hash`], plus an internal error if the task is
    /// cancelled.
    pub async fn hash_blocking(&self, password: String) -> AppResult<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("hash task failed: {e}")))?
    }

    /// Verify a password against a digest
    ///
    /// Empty input and a malformed digest both return `false` rather than
    /// an error, so callers cannot be used as a format oracle.
    #[must_use]
    pub fn verify(&self, digest: &str, password: &str) -> bool {
        if password.is_empty() || digest.is_empty() {
            return false;
        }

        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Verify a password and return an error if it does not match
    ///
    /// # Errors
    /// Returns [`AppError::InvalidCredentials`] on mismatch.
    pub fn verify_or_reject(&self, digest: &str, password: &str) -> AppResult<()> {
        if self.verify(digest, password) {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_FACTOR)
    }
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("work_factor", &self.work_factor)
            .finish_non_exhaustive()
    }
}
