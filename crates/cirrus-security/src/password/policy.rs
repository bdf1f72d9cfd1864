//! Declarative password policy and its validator
//!
//! Checks run in a fixed order and short-circuit on the first failure, so
//! the reason a caller shows an end user is always the earliest violated
//! rule: length bounds, required classes, special-character count, runs,
//! forbidden words, forbidden patterns, minimum tier.

use serde::{Deserialize, Serialize};

use cirrus_common::config::PasswordRulesConfig;
use cirrus_common::error::{AppError, AppResult};

use super::strength::{classify_tier, identical_runs, sequential_runs, CharClasses, StrengthTier};

/// Marker for policy fields that are declared but not enforced by any
/// validation path yet. Wrapping them keeps the latent contract visible
/// instead of letting the fields look load-bearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotYetEnforced<T>(pub T);

/// Declarative password acceptance rules
///
/// A `None` policy (see [`validate_password`]) disables enforcement
/// entirely. Zero means "unlimited" for `max_length` and the run limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
    pub min_special_count: usize,
    /// Longest allowed run of identical characters
    pub max_identical_run: usize,
    /// Longest allowed ascending/descending run
    pub max_sequential_run: usize,
    /// Rejected as case-insensitive substrings
    pub forbidden_words: Vec<String>,
    /// Rejected as case-insensitive substrings
    pub forbidden_patterns: Vec<String>,
    pub min_tier: StrengthTier,
    /// Number of previous passwords a new one must differ from.
    pub history_depth: NotYetEnforced<u32>,
    /// Maximum password age before a change is required.
    pub max_age_days: NotYetEnforced<u32>,
    /// Interval at which rotation reminders would fire.
    pub rotation_interval_days: NotYetEnforced<u32>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_lowercase: true,
            require_uppercase: true,
            require_digit: true,
            require_special: false,
            min_special_count: 0,
            max_identical_run: 2,
            max_sequential_run: 2,
            forbidden_words: vec!["password".to_string(), "qwerty".to_string()],
            forbidden_patterns: Vec::new(),
            min_tier: StrengthTier::Medium,
            history_depth: NotYetEnforced(0),
            max_age_days: NotYetEnforced(0),
            rotation_interval_days: NotYetEnforced(0),
        }
    }
}

impl PasswordPolicy {
    /// Build a policy from loaded configuration
    ///
    /// Returns `None` when policy enforcement is disabled, which callers
    /// pass straight to [`validate_password`].
    #[must_use]
    pub fn from_config(config: &PasswordRulesConfig) -> Option<Self> {
        if !config.policy_enabled {
            return None;
        }

        Some(Self {
            min_length: config.min_length,
            max_length: config.max_length,
            min_special_count: config.min_special,
            require_special: config.min_special > 0,
            min_tier: StrengthTier::from_level(config.min_tier).unwrap_or(StrengthTier::Medium),
            ..Self::default()
        })
    }
}

/// Validate a password against a policy
///
/// A `None` policy is always satisfied.
///
/// # Errors
/// Returns [`AppError::PolicyViolation`] naming the first violated rule.
pub fn validate_password(password: &str, policy: Option<&PasswordPolicy>) -> AppResult<()> {
    let Some(policy) = policy else {
        return Ok(());
    };

    let chars: Vec<char> = password.chars().collect();
    let len = chars.len();

    if len < policy.min_length {
        return Err(AppError::policy(format!(
            "password must be at least {} characters",
            policy.min_length
        )));
    }
    if policy.max_length > 0 && len > policy.max_length {
        return Err(AppError::policy(format!(
            "password must be at most {} characters",
            policy.max_length
        )));
    }

    let classes = CharClasses::scan(password);
    if policy.require_lowercase && !classes.has_lower() {
        return Err(AppError::policy("password must contain a lowercase letter"));
    }
    if policy.require_uppercase && !classes.has_upper() {
        return Err(AppError::policy("password must contain an uppercase letter"));
    }
    if policy.require_digit && !classes.has_digit() {
        return Err(AppError::policy("password must contain a digit"));
    }
    if policy.require_special && !classes.has_special() {
        return Err(AppError::policy("password must contain a special character"));
    }
    if classes.special < policy.min_special_count {
        return Err(AppError::policy(format!(
            "password must contain at least {} special characters",
            policy.min_special_count
        )));
    }

    if policy.max_identical_run > 0 {
        let (_, longest) = identical_runs(&chars);
        if longest > policy.max_identical_run {
            return Err(AppError::policy(format!(
                "password must not repeat a character more than {} times in a row",
                policy.max_identical_run
            )));
        }
    }
    if policy.max_sequential_run > 0 {
        let (_, longest) = sequential_runs(&chars);
        if longest > policy.max_sequential_run {
            return Err(AppError::policy(format!(
                "password must not contain more than {} sequential characters",
                policy.max_sequential_run
            )));
        }
    }

    let lowered = password.to_lowercase();
    for word in &policy.forbidden_words {
        if lowered.contains(&word.to_lowercase()) {
            return Err(AppError::policy(format!(
                "password is too common: contains {word:?}"
            )));
        }
    }
    for pattern in &policy.forbidden_patterns {
        if lowered.contains(&pattern.to_lowercase()) {
            return Err(AppError::policy(format!(
                "password contains a forbidden pattern: {pattern:?}"
            )));
        }
    }

    let tier = classify_tier(password);
    if tier < policy.min_tier {
        return Err(AppError::policy(format!(
            "password strength is {tier}, minimum required is {}",
            policy.min_tier
        )));
    }

    Ok(())
}
