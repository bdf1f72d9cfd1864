//! Token issuance, verification, and rotation
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken`
//! crate (HS256). All verification failures collapse to the opaque
//! [`AppError::InvalidToken`] so callers cannot distinguish a bad signature
//! from an expired token.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};
use uuid::Uuid;

use cirrus_common::config::{TokenConfig, MIN_SECRET_BYTES};
use cirrus_common::error::{AppError, AppResult};

use super::claims::{Claims, TokenPair, TokenType};
use super::revocation::{NoRevocation, RevocationCheck};

/// Default access-token lifetime in seconds (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;

/// Default refresh-token lifetime in seconds (7 days)
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 604_800;

/// Token manager for issuing and verifying signed claims tokens
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
    revocation: Arc<dyn RevocationCheck>,
}

impl TokenManager {
    /// Create a new token manager
    ///
    /// Non-positive lifetimes fall back to the defaults.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the secret is shorter than
    /// [`MIN_SECRET_BYTES`] bytes. This is the one misconfiguration that
    /// should stop startup.
    pub fn new(
        secret: &str,
        issuer: impl Into<String>,
        access_token_expiry: i64,
        refresh_token_expiry: i64,
    ) -> AppResult<Self> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::Config(format!(
                "signing secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            access_token_expiry: if access_token_expiry > 0 {
                access_token_expiry
            } else {
                DEFAULT_ACCESS_TOKEN_EXPIRY
            },
            refresh_token_expiry: if refresh_token_expiry > 0 {
                refresh_token_expiry
            } else {
                DEFAULT_REFRESH_TOKEN_EXPIRY
            },
            revocation: Arc::new(NoRevocation),
        })
    }

    /// Create a token manager from loaded configuration
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the configured secret is too short.
    pub fn from_config(config: &TokenConfig) -> AppResult<Self> {
        Self::new(
            &config.secret,
            config.issuer.clone(),
            config.access_token_expiry,
            config.refresh_token_expiry,
        )
    }

    /// Attach a revocation check consulted on every verification
    #[must_use]
    pub fn with_revocation_check(mut self, check: Arc<dyn RevocationCheck>) -> Self {
        self.revocation = check;
        self
    }

    /// Issue a short-lived access token
    ///
    /// # Errors
    /// Returns an error if token encoding fails.
    pub fn issue_access_token(
        &self,
        user_id: u64,
        name: &str,
        email: &str,
        role: &str,
    ) -> AppResult<String> {
        self.issue(user_id, name, email, role, TokenType::Access)
    }

    /// Issue a long-lived refresh token
    ///
    /// # Errors
    /// Returns an error if token encoding fails.
    pub fn issue_refresh_token(
        &self,
        user_id: u64,
        name: &str,
        email: &str,
        role: &str,
    ) -> AppResult<String> {
        self.issue(user_id, name, email, role, TokenType::Refresh)
    }

    /// Issue an access/refresh token pair
    ///
    /// # Errors
    /// Returns an error if token encoding fails.
    pub fn issue_pair(
        &self,
        user_id: u64,
        name: &str,
        email: &str,
        role: &str,
    ) -> AppResult<TokenPair> {
        let access_token = self.issue_access_token(user_id, name, email, role)?;
        let refresh_token = self.issue_refresh_token(user_id, name, email, role)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// One issuance routine for both kinds; they differ only in `token_type`
    /// and lifetime.
    fn issue(
        &self,
        user_id: u64,
        name: &str,
        email: &str,
        role: &str,
        token_type: TokenType,
    ) -> AppResult<String> {
        let now = Utc::now();
        let expiry = match token_type {
            TokenType::Access => self.access_token_expiry,
            TokenType::Refresh => self.refresh_token_expiry,
        };

        let claims = Claims {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            token_type,
            jti: Uuid::new_v4().to_string(),
            sub: user_id.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("failed to encode token: {e}")))
    }

    /// Verify a token and return its claims
    ///
    /// Checks signature, algorithm, issuer, expiry, and not-before, then
    /// consults the revocation check. Does NOT check the token kind; use
    /// [`Self::verify_access`] / [`Self::verify_refresh`] for that.
    ///
    /// # Errors
    /// Returns the opaque [`AppError::InvalidToken`] for every failure.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?;

        if self.revocation.is_revoked(&token_data.claims.jti) {
            warn!(jti = %token_data.claims.jti, "rejected revoked token");
            return Err(AppError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// Verify a token and require it to be an access token
    ///
    /// # Errors
    /// [`AppError::InvalidToken`] if verification fails,
    /// [`AppError::WrongTokenKind`] if the token is not an access token.
    pub fn verify_access(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify(token)?;
        if !claims.is_access_token() {
            return Err(AppError::WrongTokenKind);
        }
        Ok(claims)
    }

    /// Verify a token and require it to be a refresh token
    ///
    /// # Errors
    /// [`AppError::InvalidToken`] if verification fails,
    /// [`AppError::WrongTokenKind`] if the token is not a refresh token.
    pub fn verify_refresh(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify(token)?;
        if !claims.is_refresh_token() {
            return Err(AppError::WrongTokenKind);
        }
        Ok(claims)
    }

    /// Rotate tokens: redeem a refresh token for a fresh access/refresh pair
    ///
    /// The presented token is only superseded, not invalidated server-side;
    /// a revocation store would be needed for that.
    ///
    /// # Errors
    /// [`AppError::InvalidToken`] if verification fails,
    /// [`AppError::WrongTokenKind`] if the token is not a refresh token.
    pub fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.verify_refresh(refresh_token)?;
        debug!(user_id = claims.user_id, "rotating refresh token");
        self.issue_pair(claims.user_id, &claims.name, &claims.email, &claims.role)
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish_non_exhaustive()
    }
}
