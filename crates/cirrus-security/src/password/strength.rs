//! Password strength evaluation
//!
//! Character-class analysis, entropy estimation, 0-100 scoring, and
//! improvement suggestions. The entropy math uses a deliberately coarse
//! step-function log10 so scores stay compatible with existing consumers;
//! do not swap in a real logarithm.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Coarse 3-level strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak = 1,
    Medium = 2,
    Strong = 3,
}

impl StrengthTier {
    /// Numeric level, 1-3
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Tier from a numeric level (1-3)
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Weak),
            2 => Some(Self::Medium),
            3 => Some(Self::Strong),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class character counts for one password
///
/// Anything that is not an ASCII letter or digit counts as special.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharClasses {
    pub lower: usize,
    pub upper: usize,
    pub digit: usize,
    pub special: usize,
}

impl CharClasses {
    /// Count character classes in a password
    #[must_use]
    pub fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                classes.lower += 1;
            } else if c.is_ascii_uppercase() {
                classes.upper += 1;
            } else if c.is_ascii_digit() {
                classes.digit += 1;
            } else {
                classes.special += 1;
            }
        }
        classes
    }

    #[must_use]
    pub fn has_lower(&self) -> bool {
        self.lower > 0
    }

    #[must_use]
    pub fn has_upper(&self) -> bool {
        self.upper > 0
    }

    #[must_use]
    pub fn has_digit(&self) -> bool {
        self.digit > 0
    }

    #[must_use]
    pub fn has_special(&self) -> bool {
        self.special > 0
    }

    /// Number of classes present (0-4)
    #[must_use]
    pub fn present(&self) -> usize {
        usize::from(self.has_lower())
            + usize::from(self.has_upper())
            + usize::from(self.has_digit())
            + usize::from(self.has_special())
    }

    /// Estimated alphabet size for brute-force math
    ///
    /// 32 is a fixed estimate for the special-character alphabet, not the
    /// literal count of specials present.
    #[must_use]
    pub fn charset_size(&self) -> u32 {
        26 * u32::from(self.has_lower())
            + 26 * u32::from(self.has_upper())
            + 10 * u32::from(self.has_digit())
            + 32 * u32::from(self.has_special())
    }
}

/// Result of evaluating one password; computed fresh per call, never stored
#[derive(Debug, Clone, Serialize)]
pub struct StrengthResult {
    pub tier: StrengthTier,
    pub score: u8,
    pub entropy_bits: f64,
    pub classes: CharClasses,
    pub repeated_runs: usize,
    pub sequential_runs: usize,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
    pub crack_time: String,
}

/// Passwords rejected outright as too common (matched exactly or as a
/// case-insensitive substring).
const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "1234567", "12345678", "123456789", "qwerty", "abc123", "letmein",
    "admin", "welcome", "iloveyou", "monkey", "dragon", "sunshine", "princess", "football",
    "baseball", "trustno1",
];

/// Return the common-list entry the password matches or contains, if any.
#[must_use]
pub fn common_password_hit(password: &str) -> Option<&'static str> {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS
        .iter()
        .find(|word| lowered == **word || lowered.contains(**word))
        .copied()
}

/// Count maximal runs of 3+ identical characters, and the longest such run.
#[must_use]
pub fn identical_runs(chars: &[char]) -> (usize, usize) {
    let mut count = 0;
    let mut longest = usize::from(!chars.is_empty());
    let mut i = 0;
    while i < chars.len() {
        let mut j = i + 1;
        while j < chars.len() && chars[j] == chars[i] {
            j += 1;
        }
        let run = j - i;
        if run >= 3 {
            count += 1;
        }
        longest = longest.max(run);
        i = j;
    }
    (count, longest)
}

/// Count maximal runs of 3+ characters with a constant code-point step of
/// -1, 0, or +1 ("abc", "321"), and the longest such run. A flat run counts
/// as sequential as well as repeated.
#[must_use]
pub fn sequential_runs(chars: &[char]) -> (usize, usize) {
    let mut count = 0;
    let mut longest = usize::from(!chars.is_empty());
    let mut i = 0;
    while i + 1 < chars.len() {
        let step = i64::from(chars[i + 1] as u32) - i64::from(chars[i] as u32);
        if step.abs() > 1 {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j + 1 < chars.len()
            && i64::from(chars[j + 1] as u32) - i64::from(chars[j] as u32) == step
        {
            j += 1;
        }
        let run = j - i + 1;
        if run >= 3 {
            count += 1;
        }
        longest = longest.max(run);
        i = j;
    }
    (count, longest)
}

/// Step-function log10: 1 below 10, 2 below 100, 3 otherwise.
fn step_log10(n: f64) -> f64 {
    if n < 10.0 {
        1.0
    } else if n < 100.0 {
        2.0
    } else {
        3.0
    }
}

/// Estimate entropy in bits as `length * 3.32 * step_log10(charset)`.
///
/// Not information-theoretically correct; kept for score parity.
#[must_use]
pub fn estimate_entropy_bits(length: usize, charset_size: u32) -> f64 {
    if length == 0 || charset_size == 0 {
        return 0.0;
    }
    length as f64 * 3.32 * step_log10(f64::from(charset_size))
}

/// Canonical tier classifier
///
/// Strong: 12+ characters covering all four classes. Medium: 8+ characters
/// covering at least three. Everything else is Weak. This single classifier
/// feeds both [`StrengthResult::tier`] and the policy minimum-tier rule.
#[must_use]
pub fn classify_tier(password: &str) -> StrengthTier {
    let classes = CharClasses::scan(password);
    let len = password.chars().count();

    if len >= 12 && classes.present() == 4 {
        StrengthTier::Strong
    } else if len >= 8 && classes.present() >= 3 {
        StrengthTier::Medium
    } else {
        StrengthTier::Weak
    }
}

/// Assumed attacker throughput for crack-time estimates (guesses/second).
const GUESSES_PER_SECOND: f64 = 1e8;

/// Average brute-force time for the given entropy, bucketed into a
/// human-readable string.
fn format_crack_time(entropy_bits: f64) -> String {
    let combinations = 2f64.powf(entropy_bits);
    let seconds = combinations / 2.0 / GUESSES_PER_SECOND;

    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 86_400.0;
    const YEAR: f64 = 31_536_000.0;

    if seconds < 1.0 {
        "less than a second".to_string()
    } else if seconds < MINUTE {
        format!("{seconds:.0} seconds")
    } else if seconds < HOUR {
        format!("{:.0} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.0} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.0} days", seconds / DAY)
    } else {
        let years = seconds / YEAR;
        if !years.is_finite() || years > 1e9 {
            "more than a billion years".to_string()
        } else {
            format!("{years:.0} years")
        }
    }
}

/// Evaluate a candidate password
///
/// Score breakdown: length contributes up to 25 (thresholds 8/10/12/16),
/// each character class 10 (up to 40), unique-character diversity up to 20,
/// minus 10 each for repeated and sequential runs, minus 20 for a
/// common-password hit. Clamped to 0-100.
#[must_use]
pub fn evaluate_strength(password: &str) -> StrengthResult {
    let chars: Vec<char> = password.chars().collect();
    let len = chars.len();
    let classes = CharClasses::scan(password);

    let (repeated, _) = identical_runs(&chars);
    let (sequential, _) = sequential_runs(&chars);
    let common_hit = common_password_hit(password);

    let mut score: i32 = 0;
    if len >= 8 {
        score += 5;
    }
    if len >= 10 {
        score += 5;
    }
    if len >= 12 {
        score += 10;
    }
    if len >= 16 {
        score += 5;
    }

    score += 10 * classes.present() as i32;

    if len > 0 {
        let unique = chars.iter().collect::<HashSet<_>>().len();
        score += (unique * 20 / len) as i32;
    }

    if repeated > 0 {
        score -= 10;
    }
    if sequential > 0 {
        score -= 10;
    }
    if common_hit.is_some() {
        score -= 20;
    }

    let entropy_bits = estimate_entropy_bits(len, classes.charset_size());

    let mut suggestions = Vec::new();
    if !classes.has_lower() {
        suggestions.push("add lowercase letters".to_string());
    }
    if !classes.has_upper() {
        suggestions.push("add uppercase letters".to_string());
    }
    if !classes.has_digit() {
        suggestions.push("add digits".to_string());
    }
    if !classes.has_special() {
        suggestions.push("add special characters".to_string());
    }
    if len < 12 {
        suggestions.push("use at least 12 characters".to_string());
    }

    let mut warnings = Vec::new();
    if repeated > 0 {
        warnings.push("contains runs of repeated characters".to_string());
    }
    if sequential > 0 {
        warnings.push("contains sequential characters".to_string());
    }
    if common_hit.is_some() {
        warnings.push("matches a commonly used password".to_string());
    }

    StrengthResult {
        tier: classify_tier(password),
        score: score.clamp(0, 100) as u8,
        entropy_bits,
        classes,
        repeated_runs: repeated,
        sequential_runs: sequential,
        suggestions,
        warnings,
        crack_time: format_crack_time(entropy_bits),
    }
}
