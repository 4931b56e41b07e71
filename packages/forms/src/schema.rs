//! # Validation schema — ordered field constraints
//!
//! A [`FormSchema`] is a list of [`FieldSchema`]s; each field carries an
//! ordered list of [`Rule`]s. Validation walks every field and reports the
//! message of the **first** rule that field violates, producing a
//! [`ValidationErrors`] map (empty when the form is valid).
//!
//! Cross-field equality ([`Rule::Equals`]) reads the other field from the same
//! model and attaches the error to the field that declares the rule, so the
//! signup mismatch lands on `confirmPassword`.
//!
//! ## Presets
//!
//! | Constructor | Form |
//! |-------------|------|
//! | [`login_schema`] | Login, parameterised by a [`LoginPolicy`] (`strict` / `relaxed` / custom bounds) |
//! | [`signup_schema`] | Signup, fixed bounds |

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{field, FormModel};

pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
pub const NAME_PATTERN: &str = r"^[A-Za-z\s]+$";
pub const EMAIL_MAX_LEN: usize = 255;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).unwrap();
    static ref NAME_REGEX: Regex = Regex::new(NAME_PATTERN).unwrap();
}

/// Character classes a [`Rule::Contains`] can demand. ASCII only, like the
/// name pattern and the strength estimator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
}

impl CharClass {
    fn matches(self, c: char) -> bool {
        match self {
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::Digit => c.is_ascii_digit(),
        }
    }
}

/// One constraint on a field's (possibly trimmed) text value.
#[derive(Clone, Debug)]
pub enum Rule {
    Required { message: String },
    MinLen { min: usize, message: String },
    MaxLen { max: usize, message: String },
    Pattern { regex: &'static Regex, message: String },
    /// Every listed class must appear at least once.
    Contains { classes: Vec<CharClass>, message: String },
    /// Value must equal the value of another field in the same model.
    Equals { other: &'static str, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required { message: message.into() }
    }

    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        Self::MinLen { min, message: message.into() }
    }

    pub fn max_len(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLen { max, message: message.into() }
    }

    pub fn pattern(regex: &'static Regex, message: impl Into<String>) -> Self {
        Self::Pattern { regex, message: message.into() }
    }

    pub fn contains(classes: Vec<CharClass>, message: impl Into<String>) -> Self {
        Self::Contains { classes, message: message.into() }
    }

    pub fn equals(other: &'static str, message: impl Into<String>) -> Self {
        Self::Equals { other, message: message.into() }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::MinLen { message, .. }
            | Self::MaxLen { message, .. }
            | Self::Pattern { message, .. }
            | Self::Contains { message, .. }
            | Self::Equals { message, .. } => message,
        }
    }

    /// `true` when `value` satisfies this rule. `model` resolves cross-field lookups.
    fn check<M: FormModel>(&self, value: &str, model: &M) -> bool {
        match self {
            Self::Required { .. } => !value.is_empty(),
            Self::MinLen { min, .. } => value.chars().count() >= *min,
            Self::MaxLen { max, .. } => value.chars().count() <= *max,
            Self::Pattern { regex, .. } => regex.is_match(value),
            Self::Contains { classes, .. } => classes
                .iter()
                .all(|class| value.chars().any(|c| class.matches(c))),
            Self::Equals { other, .. } => model.text(other) == Some(value),
        }
    }
}

/// Constraints for one field.
#[derive(Clone, Debug)]
pub struct FieldSchema {
    pub name: &'static str,
    /// Trim surrounding whitespace before checking.
    pub trim: bool,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            trim: false,
            rules: Vec::new(),
        }
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    fn value<'m, M: FormModel>(&self, model: &'m M) -> &'m str {
        let raw = model.text(self.name).unwrap_or_default();
        if self.trim {
            raw.trim()
        } else {
            raw
        }
    }

    /// Message of the first violated rule, if any.
    pub fn first_violation<M: FormModel>(&self, model: &M) -> Option<&str> {
        let value = self.value(model);
        self.rules
            .iter()
            .find(|rule| !rule.check(value, model))
            .map(Rule::message)
    }
}

/// Field name → first failed message, in schema order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, message)| (*name, message.as_str()))
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub(crate) fn insert(&mut self, field: &'static str, message: String) {
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub(crate) fn remove(&mut self, field: &str) {
        self.entries.retain(|(name, _)| *name != field);
    }
}

/// Ordered set of field schemas for a form.
#[derive(Clone, Debug, Default)]
pub struct FormSchema {
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Run every field's rules against `model`.
    pub fn validate<M: FormModel>(&self, model: &M) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in &self.fields {
            if let Some(message) = field.first_violation(model) {
                errors.insert(field.name, message.to_string());
            }
        }
        errors
    }

    /// Write the checked form of every trimmed field back into `model`.
    pub fn normalize<M: FormModel>(&self, model: &mut M) {
        for field in self.fields.iter().filter(|f| f.trim) {
            let value = field.value(model).to_string();
            model.set_text(field.name, value);
        }
    }
}

/// Named login bounds presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginPreset {
    /// Password 8..=15, no e-mail length bound.
    #[default]
    Strict,
    /// Password 6..=100, e-mail at most 255 characters.
    Relaxed,
}

/// Length bounds applied by [`login_schema`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPolicy {
    pub password_min: usize,
    pub password_max: usize,
    pub email_max: Option<usize>,
}

impl LoginPolicy {
    pub const STRICT: Self = Self {
        password_min: 8,
        password_max: 15,
        email_max: None,
    };

    pub const RELAXED: Self = Self {
        password_min: 6,
        password_max: 100,
        email_max: Some(EMAIL_MAX_LEN),
    };

    pub fn preset(preset: LoginPreset) -> Self {
        match preset {
            LoginPreset::Strict => Self::STRICT,
            LoginPreset::Relaxed => Self::RELAXED,
        }
    }
}

impl Default for LoginPolicy {
    fn default() -> Self {
        Self::STRICT
    }
}

fn email_field(max: Option<usize>) -> FieldSchema {
    let field = FieldSchema::new(field::EMAIL)
        .trimmed()
        .rule(Rule::required("Email is required"))
        .rule(Rule::pattern(&EMAIL_REGEX, "Please enter a valid email address"));
    match max {
        Some(max) => field.rule(Rule::max_len(
            max,
            format!("Email must be less than {max} characters"),
        )),
        None => field,
    }
}

pub fn login_schema(policy: LoginPolicy) -> FormSchema {
    FormSchema::new(vec![
        email_field(policy.email_max),
        FieldSchema::new(field::PASSWORD)
            .rule(Rule::required("Password is required"))
            .rule(Rule::min_len(
                policy.password_min,
                format!("Password must be at least {} characters", policy.password_min),
            ))
            .rule(Rule::max_len(
                policy.password_max,
                format!("Password must be at most {} characters", policy.password_max),
            )),
    ])
}

pub fn signup_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSchema::new(field::FULL_NAME)
            .trimmed()
            .rule(Rule::required("Full name is required"))
            .rule(Rule::min_len(2, "Name must be at least 2 characters"))
            .rule(Rule::max_len(100, "Name must be less than 100 characters"))
            .rule(Rule::pattern(&NAME_REGEX, "Name can only contain letters and spaces")),
        email_field(Some(EMAIL_MAX_LEN)),
        FieldSchema::new(field::PASSWORD)
            .rule(Rule::required("Password is required"))
            .rule(Rule::min_len(8, "Password must be at least 8 characters"))
            .rule(Rule::max_len(100, "Password must be at most 100 characters"))
            .rule(Rule::contains(
                vec![CharClass::Uppercase, CharClass::Lowercase, CharClass::Digit],
                "Password must contain at least one uppercase letter, one lowercase letter, and one number",
            )),
        FieldSchema::new(field::CONFIRM_PASSWORD)
            .rule(Rule::required("Please confirm your password"))
            .rule(Rule::equals(field::PASSWORD, "Passwords don't match")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Credentials, Registration};

    fn valid_registration() -> Registration {
        Registration {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdef12".to_string(),
            confirm_password: "Abcdef12".to_string(),
        }
    }

    #[test]
    fn test_valid_login_passes() {
        let errors = login_schema(LoginPolicy::STRICT)
            .validate(&Credentials::new("user@example.com", "Passw0rd1"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_email_reports_single_entry() {
        let errors = login_schema(LoginPolicy::STRICT)
            .validate(&Credentials::new("not-an-email", "Passw0rd1"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(field::EMAIL), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_first_violation_wins() {
        let errors = login_schema(LoginPolicy::STRICT).validate(&Credentials::default());
        assert_eq!(errors.get(field::EMAIL), Some("Email is required"));
        assert_eq!(errors.get(field::PASSWORD), Some("Password is required"));
        assert_eq!(errors.fields(), vec![field::EMAIL, field::PASSWORD]);
    }

    #[test]
    fn test_email_is_trimmed() {
        let errors = login_schema(LoginPolicy::STRICT)
            .validate(&Credentials::new("  user@example.com \t", "Passw0rd1"));
        assert!(errors.is_empty());

        let errors = login_schema(LoginPolicy::STRICT).validate(&Credentials::new("   ", "Passw0rd1"));
        assert_eq!(errors.get(field::EMAIL), Some("Email is required"));
    }

    #[test]
    fn test_normalize_trims_only_trimmed_fields() {
        let mut reg = Registration {
            full_name: "  Ada Lovelace ".to_string(),
            email: "\tada@example.com  ".to_string(),
            password: " Abcdef12 ".to_string(),
            confirm_password: " Abcdef12 ".to_string(),
        };
        signup_schema().normalize(&mut reg);
        assert_eq!(reg.full_name, "Ada Lovelace");
        assert_eq!(reg.email, "ada@example.com");
        assert_eq!(reg.password, " Abcdef12 ");
    }

    #[test]
    fn test_complexity_counts_ascii_only() {
        let reg = Registration {
            password: "Àbcdefg1".to_string(),
            confirm_password: "Àbcdefg1".to_string(),
            ..valid_registration()
        };
        assert!(signup_schema().validate(&reg).contains(field::PASSWORD));

        let reg = Registration {
            password: "Abcdefg٣".to_string(),
            confirm_password: "Abcdefg٣".to_string(),
            ..valid_registration()
        };
        assert!(signup_schema().validate(&reg).contains(field::PASSWORD));
    }

    #[test]
    fn test_login_policy_bounds() {
        let strict = login_schema(LoginPolicy::STRICT);
        let relaxed = login_schema(LoginPolicy::RELAXED);
        let sixteen = Credentials::new("user@example.com", "a".repeat(16));
        let six = Credentials::new("user@example.com", "abcdef");

        assert_eq!(
            strict.validate(&sixteen).get(field::PASSWORD),
            Some("Password must be at most 15 characters")
        );
        assert!(relaxed.validate(&sixteen).is_empty());
        assert_eq!(
            strict.validate(&six).get(field::PASSWORD),
            Some("Password must be at least 8 characters")
        );
        assert!(relaxed.validate(&six).is_empty());
    }

    #[test]
    fn test_relaxed_bounds_email_length() {
        let long_email = format!("{}@example.com", "a".repeat(250));
        let creds = Credentials::new(long_email, "abcdef");
        assert!(login_schema(LoginPolicy::STRICT)
            .validate(&creds)
            .get(field::PASSWORD)
            .is_some());
        assert_eq!(
            login_schema(LoginPolicy::RELAXED).validate(&creds).get(field::EMAIL),
            Some("Email must be less than 255 characters")
        );
    }

    #[test]
    fn test_valid_signup_passes() {
        assert!(signup_schema().validate(&valid_registration()).is_empty());
    }

    #[test]
    fn test_mismatch_attaches_to_confirm_field() {
        let reg = Registration {
            confirm_password: "Abcdef13".to_string(),
            ..valid_registration()
        };
        let errors = signup_schema().validate(&reg);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(field::CONFIRM_PASSWORD), Some("Passwords don't match"));
        assert!(!errors.contains(field::PASSWORD));
    }

    #[test]
    fn test_password_complexity() {
        for weak in ["abcdefgh", "ABCDEFGH", "Abcdefgh", "abcdef12"] {
            let reg = Registration {
                password: weak.to_string(),
                confirm_password: weak.to_string(),
                ..valid_registration()
            };
            let errors = signup_schema().validate(&reg);
            assert_eq!(
                errors.get(field::PASSWORD),
                Some("Password must contain at least one uppercase letter, one lowercase letter, and one number"),
                "{weak}"
            );
        }
    }

    #[test]
    fn test_full_name_rules() {
        let cases = [
            ("", "Full name is required"),
            ("A", "Name must be at least 2 characters"),
            ("Ada99", "Name can only contain letters and spaces"),
        ];
        for (name, expected) in cases {
            let reg = Registration {
                full_name: name.to_string(),
                ..valid_registration()
            };
            assert_eq!(signup_schema().validate(&reg).get(field::FULL_NAME), Some(expected));
        }

        let reg = Registration {
            full_name: "A".repeat(101),
            ..valid_registration()
        };
        assert_eq!(
            signup_schema().validate(&reg).get(field::FULL_NAME),
            Some("Name must be less than 100 characters")
        );
    }

    #[test]
    fn test_empty_confirm_is_required_not_mismatch() {
        let reg = Registration {
            confirm_password: String::new(),
            ..valid_registration()
        };
        assert_eq!(
            signup_schema().validate(&reg).get(field::CONFIRM_PASSWORD),
            Some("Please confirm your password")
        );
    }
}
