//! Configuration structs

mod app_config;

pub use app_config::{
    ConfigError, PasswordRulesConfig, SecurityConfig, TokenConfig, MIN_SECRET_BYTES,
};
