//! # Form configuration — `signpost.toml`
//!
//! Tunables for both pages, read once at start-up by the web app.
//!
//! ## Structure
//!
//! ```toml
//! [login]
//! preset = "strict"        # or "relaxed"
//! password_max = 20        # optional overrides on top of the preset
//!
//! [submission]
//! latency_ms = 1500        # simulated network delay
//!
//! [navigation]
//! login_target = "/"
//! login_delay_ms = 1000
//! signup_target = "/login"
//! signup_delay_ms = 2000
//!
//! [forms]
//! revalidate_on_change = true
//! toast_duration_ms = 4000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SignpostConfig`] | Top-level config; TOML parsing with validation of the login bounds. |
//! | [`LoginConfig`] | Preset name plus optional per-bound overrides; resolves to a [`LoginPolicy`]. |
//! | [`SubmissionConfig`] | Latency of the simulated authentication step. |
//! | [`NavigationConfig`] | Redirect targets and delays after a successful submission. |
//! | [`FormsConfig`] | Controller behaviour and toast lifetime. |
//!
//! Every section derives `Default`, so a missing or empty file is the default
//! configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::schema::{LoginPolicy, LoginPreset};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignpostConfig {
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub forms: FormsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub preset: LoginPreset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_min: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_max: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_max: Option<usize>,
}

impl LoginConfig {
    /// The preset's bounds with any overrides applied.
    pub fn policy(&self) -> Result<LoginPolicy, ConfigError> {
        let base = LoginPolicy::preset(self.preset);
        let policy = LoginPolicy {
            password_min: self.password_min.unwrap_or(base.password_min),
            password_max: self.password_max.unwrap_or(base.password_max),
            email_max: self.email_max.or(base.email_max),
        };
        if policy.password_min == 0 || policy.password_min > policy.password_max {
            return Err(ConfigError::InvalidBounds {
                min: policy.password_min,
                max: policy.password_max,
            });
        }
        Ok(policy)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    1500
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl SubmissionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_login_target")]
    pub login_target: String,
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    #[serde(default = "default_signup_target")]
    pub signup_target: String,
    #[serde(default = "default_signup_delay_ms")]
    pub signup_delay_ms: u64,
}

fn default_login_target() -> String {
    "/".to_string()
}

fn default_login_delay_ms() -> u64 {
    1000
}

fn default_signup_target() -> String {
    "/login".to_string()
}

fn default_signup_delay_ms() -> u64 {
    2000
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            login_target: default_login_target(),
            login_delay_ms: default_login_delay_ms(),
            signup_target: default_signup_target(),
            signup_delay_ms: default_signup_delay_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default = "default_true")]
    pub revalidate_on_change: bool,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_toast_duration_ms() -> u64 {
    4000
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            revalidate_on_change: true,
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl FormsConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl SignpostConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "signpost.toml"
    }

    /// Parse from a TOML string and check the login bounds.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.login.policy()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, logging and falling back to defaults on any error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}: {}; using defaults", Self::filename(), e);
            Self::default()
        })
    }

    pub fn login_policy(&self) -> LoginPolicy {
        self.login.policy().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = SignpostConfig::from_toml("").unwrap();
        assert_eq!(config, SignpostConfig::default());
        assert_eq!(config.login_policy(), LoginPolicy::STRICT);
        assert_eq!(config.submission.latency(), Duration::from_millis(1500));
        assert_eq!(config.navigation.login_target, "/");
        assert_eq!(config.navigation.signup_target, "/login");
    }

    #[test]
    fn test_relaxed_preset_with_override() {
        let config = SignpostConfig::from_toml(
            r#"
            [login]
            preset = "relaxed"
            password_max = 64
            "#,
        )
        .unwrap();
        let policy = config.login_policy();
        assert_eq!(policy.password_min, 6);
        assert_eq!(policy.password_max, 64);
        assert_eq!(policy.email_max, Some(255));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let err = SignpostConfig::from_toml(
            r#"
            [login]
            password_min = 20
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { min: 20, max: 15 }));
    }

    #[test]
    fn test_malformed_falls_back() {
        let config = SignpostConfig::from_toml_or_default("[login\npreset = 3");
        assert_eq!(config, SignpostConfig::default());
    }

    #[test]
    fn test_roundtrip_keeps_overrides() {
        let mut config = SignpostConfig::default();
        config.login.email_max = Some(128);
        config.navigation.login_delay_ms = 10;
        let parsed = SignpostConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
