//! Password security: hashing, generation, strength, policy

mod generator;
mod hasher;
mod policy;
mod strength;

pub use generator::{generate_random_password, MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH};
pub use hasher::{CredentialHasher, DEFAULT_WORK_FACTOR, MAX_WORK_FACTOR, MIN_WORK_FACTOR};
pub use policy::{validate_password, NotYetEnforced, PasswordPolicy};
pub use strength::{
    classify_tier, evaluate_strength, CharClasses, StrengthResult, StrengthTier,
};
