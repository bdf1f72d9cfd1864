//! End-to-end credential flows
//!
//! Exercises the paths the HTTP layer drives: registration (policy ->
//! strength -> hash), login (verify -> issue), authenticated requests
//! (verify access), and refresh rotation. No network, no store.

use cirrus_common::error::AppError;
use cirrus_security::{
    evaluate_strength, generate_random_password, validate_password, CharClasses, PasswordPolicy,
    StrengthTier, TokenManager,
};
use integration_tests::{
    admin_user, default_policy, fast_hasher, sample_user, test_token_manager, TEST_SECRET,
};

#[test]
fn registration_flow_accepts_a_strong_password() {
    let user = sample_user();
    let policy = default_policy();
    let hasher = fast_hasher();

    validate_password(&user.password, Some(&policy)).expect("policy accepts the password");

    let result = evaluate_strength(&user.password);
    assert_eq!(result.tier, StrengthTier::Strong);

    let digest = hasher.hash(&user.password).expect("hashing succeeds");
    assert!(hasher.verify(&digest, &user.password));
    assert!(!hasher.verify(&digest, &format!("{}x", user.password)));
}

#[test]
fn registration_flow_rejects_a_common_password() {
    // Trim the earlier rules so the forbidden-word rule is the first one
    // violated and its reason is what the caller would surface.
    let policy = PasswordPolicy {
        require_lowercase: false,
        require_uppercase: false,
        require_digit: false,
        max_identical_run: 0,
        max_sequential_run: 0,
        min_tier: StrengthTier::Weak,
        ..default_policy()
    };

    let err = validate_password("password123", Some(&policy)).unwrap_err();
    let AppError::PolicyViolation(reason) = err else {
        panic!("expected a policy violation");
    };
    assert!(reason.contains("too common"), "reason was: {reason}");

    let result = evaluate_strength("password123");
    assert!(result.warnings.iter().any(|w| w.contains("commonly used")));
    assert_eq!(result.tier, StrengthTier::Weak);

    // The full default policy still rejects it, just on an earlier rule.
    assert!(validate_password("password123", Some(&default_policy())).is_err());
}

#[test]
fn login_flow_issues_verifiable_tokens() {
    let user = sample_user();
    let hasher = fast_hasher();
    let manager = test_token_manager();

    let digest = hasher.hash(&user.password).unwrap();
    hasher
        .verify_or_reject(&digest, &user.password)
        .expect("credentials match");

    let pair = manager
        .issue_pair(user.id, &user.name, &user.email, &user.role)
        .unwrap();
    assert_eq!(pair.token_type, "Bearer");

    let claims = manager.verify_access(&pair.access_token).unwrap();
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, user.role);
}

#[test]
fn login_flow_rejects_bad_credentials() {
    let user = sample_user();
    let hasher = fast_hasher();
    let digest = hasher.hash(&user.password).unwrap();

    assert!(matches!(
        hasher.verify_or_reject(&digest, "WrongPassword!1"),
        Err(AppError::InvalidCredentials)
    ));
}

#[test]
fn access_token_is_not_accepted_as_refresh() {
    let user = admin_user();
    let manager = test_token_manager();
    let pair = manager
        .issue_pair(user.id, &user.name, &user.email, &user.role)
        .unwrap();

    assert!(matches!(
        manager.refresh(&pair.access_token),
        Err(AppError::WrongTokenKind)
    ));
    assert!(matches!(
        manager.verify_access(&pair.refresh_token),
        Err(AppError::WrongTokenKind)
    ));
}

#[test]
fn refresh_flow_rotates_and_keeps_identity() {
    let user = admin_user();
    let manager = test_token_manager();

    let pair1 = manager
        .issue_pair(user.id, &user.name, &user.email, &user.role)
        .unwrap();
    let pair2 = manager.refresh(&pair1.refresh_token).unwrap();

    assert_ne!(pair1.refresh_token, pair2.refresh_token);

    let claims = manager.verify_access(&pair2.access_token).unwrap();
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.name, user.name);
    assert_eq!(claims.role, "admin");

    // Rotation chains: the new refresh token can be redeemed again.
    let pair3 = manager.refresh(&pair2.refresh_token).unwrap();
    assert!(manager.verify_access(&pair3.access_token).is_ok());
}

#[test]
fn tokens_do_not_cross_deployments() {
    let user = sample_user();
    let manager_a = test_token_manager();
    let manager_b =
        TokenManager::new("another-deployment-secret-0123456789ab", "cirrus-test", 900, 604_800)
            .unwrap();

    let pair = manager_a
        .issue_pair(user.id, &user.name, &user.email, &user.role)
        .unwrap();
    assert!(matches!(
        manager_b.verify(&pair.access_token),
        Err(AppError::InvalidToken)
    ));
}

#[test]
fn short_signing_secret_fails_construction() {
    assert!(matches!(
        TokenManager::new("short", "cirrus-test", 900, 604_800),
        Err(AppError::Config(_))
    ));
    // Boundary: exactly 32 bytes is accepted.
    assert!(TokenManager::new(&"s".repeat(32), "cirrus-test", 900, 604_800).is_ok());
    assert!(TEST_SECRET.len() >= 32);
}

#[test]
fn reset_flow_generated_password_is_always_acceptable() {
    let hasher = fast_hasher();

    for _ in 0..25 {
        let password = generate_random_password(16);
        assert_eq!(password.chars().count(), 16);
        assert_eq!(CharClasses::scan(&password).present(), 4);

        // All four classes at 16 chars is Strong by definition.
        assert_eq!(evaluate_strength(&password).tier, StrengthTier::Strong);
    }

    let password = generate_random_password(16);
    let digest = hasher.hash(&password).unwrap();
    assert!(hasher.verify(&digest, &password));
}

#[tokio::test]
async fn hashing_can_run_off_the_request_path() {
    let user = sample_user();
    let hasher = fast_hasher();

    let digest = hasher.hash_blocking(user.password.clone()).await.unwrap();
    assert!(hasher.verify(&digest, &user.password));
}
