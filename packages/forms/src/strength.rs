//! # Password strength estimator
//!
//! Advisory feedback shown under the signup password field. It never gates
//! submission; the schema's complexity rule does that.
//!
//! One point is awarded for each of:
//!
//! | Criterion | Point |
//! |-----------|-------|
//! | length ≥ 8 | 1 |
//! | length ≥ 12 | 1 |
//! | an ASCII lowercase letter | 1 |
//! | an ASCII uppercase letter | 1 |
//! | an ASCII digit | 1 |
//! | any other character | 1 |
//!
//! Classes are ASCII, matching the signup complexity rule: an accented
//! letter or a non-Latin digit counts as a symbol.
//!
//! The score maps to a rating: `0..=2` weak, `3..=4` medium, `5..=6` strong.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn estimate(password: &str) -> Self {
        Self::from_score(score(password))
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Portion of the meter to fill, in `0.0..=1.0`.
    pub fn fill(self) -> f32 {
        match self {
            Self::Weak => 1.0 / 3.0,
            Self::Medium => 2.0 / 3.0,
            Self::Strong => 1.0,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw heuristic score in `0..=MAX_SCORE`.
pub fn score(password: &str) -> u8 {
    let len = password.chars().count();
    let criteria = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    criteria.iter().filter(|met| **met).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_weak() {
        assert_eq!(score(""), 0);
        assert_eq!(PasswordStrength::estimate(""), PasswordStrength::Weak);
    }

    #[test]
    fn test_live_feedback_examples() {
        assert_eq!(PasswordStrength::estimate("abc"), PasswordStrength::Weak);
        assert_eq!(score("Abc123!@#xyz"), 6);
        assert_eq!(PasswordStrength::estimate("Abc123!@#xyz"), PasswordStrength::Strong);
    }

    #[test]
    fn test_thresholds() {
        // length>=8 + lowercase + digit
        assert_eq!(PasswordStrength::estimate("abcdefg1"), PasswordStrength::Medium);
        // length>=8 + lower + upper + digit + symbol
        assert_eq!(PasswordStrength::estimate("Abcdef1!"), PasswordStrength::Strong);
        // lower + upper only
        assert_eq!(PasswordStrength::estimate("aB"), PasswordStrength::Weak);
    }

    #[test]
    fn test_from_score_boundaries() {
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(3), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(4), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(5), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(MAX_SCORE), PasswordStrength::Strong);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(PasswordStrength::Medium.to_string(), "Medium");
        assert!(PasswordStrength::Weak.fill() < PasswordStrength::Strong.fill());
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        assert_eq!(score("\u{0663}"), 1);
        assert_eq!(score("é"), 1);
        assert_eq!(score("aé"), 2);
    }

    fn class_char() -> impl Strategy<Value = char> {
        prop_oneof![Just('a'), Just('Z'), Just('7'), Just('#')]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Every password scores within range and maps to a rating.
        #[test]
        fn test_score_is_bounded(password in ".{0,40}") {
            prop_assert!(score(&password) <= MAX_SCORE);
            let rating = PasswordStrength::estimate(&password);
            prop_assert!(matches!(
                rating,
                PasswordStrength::Weak | PasswordStrength::Medium | PasswordStrength::Strong
            ));
        }

        /// Appending a character never lowers the score: it can only add a
        /// class or push the length past a threshold.
        #[test]
        fn test_appending_never_decreases(password in ".{0,30}", extra in class_char()) {
            let before = score(&password);
            let mut longer = password.clone();
            longer.push(extra);
            prop_assert!(score(&longer) >= before);
            prop_assert!(PasswordStrength::estimate(&longer) >= PasswordStrength::estimate(&password));
        }
    }
}
