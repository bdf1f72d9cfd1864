//! Random password generation
//!
//! Guarantees one character from each class structurally, then shuffles with
//! the OS RNG so the guaranteed characters are not positionally predictable.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shortest password this generator will produce
pub const MIN_GENERATED_LENGTH: usize = 12;

/// Longest password this generator will produce
pub const MAX_GENERATED_LENGTH: usize = 128;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Generate a random password of the requested length
///
/// The length is clamped to `[MIN_GENERATED_LENGTH, MAX_GENERATED_LENGTH]`.
/// Every result contains at least one lowercase letter, one uppercase
/// letter, one digit, and one special character.
#[must_use]
pub fn generate_random_password(length: usize) -> String {
    let length = length.clamp(MIN_GENERATED_LENGTH, MAX_GENERATED_LENGTH);
    let mut rng = OsRng;

    let mut chars: Vec<u8> = Vec::with_capacity(length);
    for class in [LOWER, UPPER, DIGITS, SPECIAL] {
        chars.push(class[rng.gen_range(0..class.len())]);
    }

    let combined: Vec<u8> = [LOWER, UPPER, DIGITS, SPECIAL].concat();
    while chars.len() < length {
        chars.push(combined[rng.gen_range(0..combined.len())]);
    }

    chars.shuffle(&mut rng);
    chars.into_iter().map(char::from).collect()
}
