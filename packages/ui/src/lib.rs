//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaGoogle};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod effects;
pub use effects::{use_notifier, use_prefs, Notifier, Prefs};

mod fields;
pub use fields::{PasswordField, TextField};

mod login_form;
pub use login_form::LoginForm;

mod signup_form;
pub use signup_form::SignupForm;

mod social;
pub use social::SocialButtons;

mod strength_meter;
pub use strength_meter::StrengthMeter;

mod theme;
pub use theme::{Theme, ThemeToggle};

/// Shares the loaded configuration, and the store the `rememberMe` flag is
/// written to, with every form below it.
#[component]
pub fn ConfigProvider(config: forms::SignpostConfig, children: Element) -> Element {
    use_context_provider(|| config);
    use_context_provider(Prefs::default);

    rsx! {
        {children}
    }
}
