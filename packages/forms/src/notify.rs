//! Notification tuples handed to whatever renders toasts.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
        }
    }
}

/// Identity providers offered as buttons on both pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    GitHub,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::GitHub];
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        })
    }
}

/// Social sign-in is not wired to any identity provider yet; the trigger
/// only produces an informational toast.
pub fn social_sign_in(provider: impl fmt::Display) -> Toast {
    tracing::info!(%provider, "social sign-in requested");
    Toast::info(format!("{provider} login"))
        .describe("Social login is not implemented yet. Please use email and password.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_sign_in_is_informational() {
        let toast = social_sign_in(SocialProvider::GitHub);
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.title, "GitHub login");
        assert!(toast.description.is_some());
    }

    #[test]
    fn test_social_sign_in_accepts_any_name() {
        assert_eq!(social_sign_in("Gitea").title, "Gitea login");
    }
}
