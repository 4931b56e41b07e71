//! Form payloads and the field-level access the controller and schema need.

use serde::{Deserialize, Serialize};

use crate::strength::PasswordStrength;

/// Field names as rendered next to the inputs and keyed in error maps.
pub mod field {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const REMEMBER_ME: &str = "rememberMe";
    pub const FULL_NAME: &str = "fullName";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

/// Read/write access to a form's fields by name.
///
/// Text fields are addressed through [`text`](FormModel::text) and
/// [`set_text`](FormModel::set_text); boolean fields through
/// [`set_flag`](FormModel::set_flag). Setters return `false` for names the
/// model does not own.
pub trait FormModel: Clone + Default {
    fn text(&self, name: &str) -> Option<&str>;

    fn set_text(&mut self, name: &str, value: String) -> bool;

    fn set_flag(&mut self, _name: &str, _value: bool) -> bool {
        false
    }
}

/// Login payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    pub fn remember(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }
}

impl FormModel for Credentials {
    fn text(&self, name: &str) -> Option<&str> {
        match name {
            field::EMAIL => Some(&self.email),
            field::PASSWORD => Some(&self.password),
            _ => None,
        }
    }

    fn set_text(&mut self, name: &str, value: String) -> bool {
        match name {
            field::EMAIL => self.email = value,
            field::PASSWORD => self.password = value,
            _ => return false,
        }
        true
    }

    fn set_flag(&mut self, name: &str, value: bool) -> bool {
        if name == field::REMEMBER_ME {
            self.remember_me = value;
            return true;
        }
        false
    }
}

/// Signup payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Strength of the current password. Recomputed on every call, never stored.
    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::estimate(&self.password)
    }
}

impl FormModel for Registration {
    fn text(&self, name: &str) -> Option<&str> {
        match name {
            field::FULL_NAME => Some(&self.full_name),
            field::EMAIL => Some(&self.email),
            field::PASSWORD => Some(&self.password),
            field::CONFIRM_PASSWORD => Some(&self.confirm_password),
            _ => None,
        }
    }

    fn set_text(&mut self, name: &str, value: String) -> bool {
        match name {
            field::FULL_NAME => self.full_name = value,
            field::EMAIL => self.email = value,
            field::PASSWORD => self.password = value,
            field::CONFIRM_PASSWORD => self.confirm_password = value,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_field_access() {
        let mut creds = Credentials::default();
        assert!(creds.set_text(field::EMAIL, "a@b.co".to_string()));
        assert!(creds.set_flag(field::REMEMBER_ME, true));
        assert!(!creds.set_text(field::FULL_NAME, "Ada".to_string()));
        assert!(!creds.set_flag(field::EMAIL, true));
        assert_eq!(creds.text(field::EMAIL), Some("a@b.co"));
        assert!(creds.remember_me);
    }

    #[test]
    fn test_strength_follows_password_edits() {
        let mut reg = Registration::default();
        reg.set_text(field::PASSWORD, "abc".to_string());
        assert_eq!(reg.password_strength(), PasswordStrength::Weak);
        reg.set_text(field::PASSWORD, "Abc123!@#xyz".to_string());
        assert_eq!(reg.password_strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_registration_serializes_camel_case() {
        let reg = Registration {
            full_name: "Ada Lovelace".to_string(),
            ..Registration::default()
        };
        let toml = toml::to_string(&reg).unwrap();
        assert!(toml.contains("fullName = \"Ada Lovelace\""));
        assert!(toml.contains("confirmPassword"));
    }
}
