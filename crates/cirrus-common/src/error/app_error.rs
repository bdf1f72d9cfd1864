//! Application error types
//!
//! Unified error handling for the credential-security core.
//!
//! Token failures deliberately collapse to a single opaque variant: a caller
//! (or an attacker probing the gateway) must not be able to tell a bad
//! signature from an expired token. Policy failures carry their reason since
//! that text is meant to be shown to end users.

use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Credential errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Any token failure: bad signature, wrong algorithm, expired,
    /// not yet valid, malformed, or revoked. Intentionally opaque.
    #[error("Invalid token")]
    InvalidToken,

    /// A structurally valid token presented with the wrong kind, e.g. a
    /// refresh token where an access token is required. Distinguishable
    /// because it signals a caller-contract bug, not a forgery.
    #[error("Wrong token kind")]
    WrongTokenKind,

    // Validation errors
    #[error("Password policy violation: {0}")]
    PolicyViolation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for this error
    ///
    /// The HTTP layer lives outside this workspace; it consumes this
    /// classification when mapping results to responses.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::PolicyViolation(_) | Self::InvalidInput(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials | Self::InvalidToken | Self::WrongTokenKind => 401,

            // 500 Internal Server Error
            Self::Internal(_) | Self::Config(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::WrongTokenKind => "WRONG_TOKEN_KIND",
            Self::PolicyViolation(_) => "POLICY_VIOLATION",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(msg: impl fmt::Display) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Create a policy-violation error
    #[must_use]
    pub fn policy(msg: impl fmt::Display) -> Self {
        Self::PolicyViolation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
