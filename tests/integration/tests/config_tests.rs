//! Configuration loading against a real process environment
//!
//! All env manipulation lives in a single test function; splitting the
//! scenarios across tests would race, since the harness runs them on
//! threads sharing one environment.

use std::env;

use cirrus_common::config::{ConfigError, SecurityConfig, MIN_SECRET_BYTES};
use cirrus_security::{CredentialHasher, PasswordPolicy, TokenManager};

const GOOD_SECRET: &str = "an-environment-secret-0123456789abcdef";

fn clear_security_env() {
    for var in [
        "JWT_SECRET",
        "JWT_ISSUER",
        "JWT_ACCESS_TOKEN_EXPIRY",
        "JWT_REFRESH_TOKEN_EXPIRY",
        "HASH_WORK_FACTOR",
        "PASSWORD_POLICY_ENABLED",
        "PASSWORD_MIN_LENGTH",
        "PASSWORD_MAX_LENGTH",
        "PASSWORD_MIN_SPECIAL",
        "PASSWORD_MIN_TIER",
    ] {
        env::remove_var(var);
    }
}

#[test]
fn config_loading_scenarios() {
    clear_security_env();

    // Missing secret stops startup.
    assert!(matches!(
        SecurityConfig::from_env(),
        Err(ConfigError::MissingVar("JWT_SECRET"))
    ));

    // A secret below the minimum stops startup too.
    env::set_var("JWT_SECRET", "way-too-short");
    assert!(matches!(
        SecurityConfig::from_env(),
        Err(ConfigError::InvalidValue("JWT_SECRET", _))
    ));

    // A valid secret with everything else defaulted.
    env::set_var("JWT_SECRET", GOOD_SECRET);
    let config = SecurityConfig::from_env().unwrap();
    assert!(config.token.secret.len() >= MIN_SECRET_BYTES);
    assert_eq!(config.token.issuer, "cirrus");
    assert_eq!(config.token.access_token_expiry, 900);
    assert_eq!(config.token.refresh_token_expiry, 604_800);
    assert!(config.password_rules.policy_enabled);

    // Overrides are honored; unparsable values fall back to defaults.
    env::set_var("JWT_ISSUER", "cirrus-staging");
    env::set_var("JWT_ACCESS_TOKEN_EXPIRY", "300");
    env::set_var("JWT_REFRESH_TOKEN_EXPIRY", "not-a-number");
    env::set_var("HASH_WORK_FACTOR", "4");
    env::set_var("PASSWORD_MIN_TIER", "3");
    let config = SecurityConfig::from_env().unwrap();
    assert_eq!(config.token.issuer, "cirrus-staging");
    assert_eq!(config.token.access_token_expiry, 300);
    assert_eq!(config.token.refresh_token_expiry, 604_800);
    assert_eq!(config.password_rules.work_factor, 4);

    // The loaded config is the single construction surface for the core.
    let manager = TokenManager::from_config(&config.token).unwrap();
    let hasher = CredentialHasher::new(config.password_rules.work_factor);
    let policy = PasswordPolicy::from_config(&config.password_rules).unwrap();

    let token = manager.issue_access_token(7, "ada", "ada@example.com", "member").unwrap();
    assert_eq!(manager.verify_access(&token).unwrap().iss, "cirrus-staging");
    assert_eq!(hasher.work_factor(), 4);
    assert_eq!(policy.min_tier, cirrus_security::StrengthTier::Strong);

    // Disabling the policy yields no policy at all.
    env::set_var("PASSWORD_POLICY_ENABLED", "false");
    let config = SecurityConfig::from_env().unwrap();
    assert!(PasswordPolicy::from_config(&config.password_rules).is_none());

    clear_security_env();
}
