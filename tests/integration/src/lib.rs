//! Integration test utilities for the credential-security core
//!
//! This crate provides shared constructors and identity fixtures for tests
//! that exercise the full registration/login/refresh credential flows.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
