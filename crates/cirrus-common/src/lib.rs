//! # cirrus-common
//!
//! Shared utilities for the cirrus credential-security subsystem:
//! configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ConfigError, PasswordRulesConfig, SecurityConfig, TokenConfig, MIN_SECRET_BYTES};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, TracingConfig, TracingError,
};
