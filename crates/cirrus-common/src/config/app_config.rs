//! Security configuration structs
//!
//! Loads the credential-core configuration from environment variables. This
//! is the single construction surface consumed at process start; the core
//! types themselves never read the environment.

use serde::Deserialize;
use std::env;

/// Minimum accepted signing-secret length in bytes.
pub const MIN_SECRET_BYTES: usize = 32;

/// Top-level configuration for the credential-security subsystem
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub token: TokenConfig,
    pub password_rules: PasswordRulesConfig,
}

/// Signed-token configuration
#[derive(Clone, Deserialize)]
pub struct TokenConfig {
    /// HMAC signing secret, at least [`MIN_SECRET_BYTES`] bytes.
    pub secret: String,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,
}

// Manual Debug so the secret never reaches logs.
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish_non_exhaustive()
    }
}

/// Password hashing and acceptance-rule configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordRulesConfig {
    /// Slow-hash work factor. Out-of-range values fall back to the hasher's
    /// default instead of failing.
    #[serde(default = "default_work_factor")]
    pub work_factor: u32,
    /// When false, callers skip policy validation entirely.
    #[serde(default = "default_policy_enabled")]
    pub policy_enabled: bool,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_min_special")]
    pub min_special: usize,
    /// Minimum strength tier (1 = Weak, 2 = Medium, 3 = Strong).
    #[serde(default = "default_min_tier")]
    pub min_tier: u8,
}

// Default value functions
fn default_issuer() -> String {
    "cirrus".to_string()
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_refresh_token_expiry() -> i64 {
    604_800 // 7 days
}

fn default_work_factor() -> u32 {
    3
}

fn default_policy_enabled() -> bool {
    true
}

fn default_min_length() -> usize {
    8
}

fn default_max_length() -> usize {
    128
}

fn default_min_special() -> usize {
    0
}

fn default_min_tier() -> u8 {
    2
}

impl SecurityConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `JWT_SECRET` is missing or shorter than
    /// [`MIN_SECRET_BYTES`] bytes. This is the only configuration failure
    /// that should stop startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET",
                format!("must be at least {MIN_SECRET_BYTES} bytes"),
            ));
        }

        Ok(Self {
            token: TokenConfig {
                secret,
                issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| default_issuer()),
                access_token_expiry: env::var("JWT_ACCESS_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_access_token_expiry),
                refresh_token_expiry: env::var("JWT_REFRESH_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_refresh_token_expiry),
            },
            password_rules: PasswordRulesConfig {
                work_factor: env::var("HASH_WORK_FACTOR")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_work_factor),
                policy_enabled: env::var("PASSWORD_POLICY_ENABLED")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_policy_enabled),
                min_length: env::var("PASSWORD_MIN_LENGTH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_length),
                max_length: env::var("PASSWORD_MAX_LENGTH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_length),
                min_special: env::var("PASSWORD_MIN_SPECIAL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_special),
                min_tier: env::var("PASSWORD_MIN_TIER")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_tier),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_issuer(), "cirrus");
        assert_eq!(default_access_token_expiry(), 900);
        assert_eq!(default_refresh_token_expiry(), 604_800);
        assert_eq!(default_work_factor(), 3);
        assert_eq!(default_min_length(), 8);
        assert_eq!(default_min_tier(), 2);
        assert!(default_policy_enabled());
    }

    #[test]
    fn test_token_config_debug_hides_secret() {
        let config = TokenConfig {
            secret: "a-secret-that-must-never-be-printed-anywhere".to_string(),
            issuer: default_issuer(),
            access_token_expiry: 900,
            refresh_token_expiry: 604_800,
        };

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("never-be-printed"));
        assert!(rendered.contains("issuer"));
    }
}
