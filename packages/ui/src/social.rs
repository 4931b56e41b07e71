//! Social sign-in buttons. Identity providers are not wired up; a click only
//! raises an informational toast.

use dioxus::prelude::*;
use forms::{social_sign_in, SocialProvider};

use crate::components::{Button, ButtonVariant};
use crate::effects::use_notifier;
use crate::icons::{FaGithub, FaGoogle};
use crate::Icon;

#[component]
pub fn SocialButtons(#[props(default)] disabled: bool) -> Element {
    rsx! {
        div {
            class: "social-divider",
            span { "Or continue with" }
        }
        div {
            class: "social-buttons",
            for provider in SocialProvider::ALL {
                SocialButton { key: "{provider}", provider, disabled }
            }
        }
    }
}

#[component]
fn SocialButton(provider: SocialProvider, disabled: bool) -> Element {
    let notifier = use_notifier();

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            r#type: "button",
            disabled: disabled,
            onclick: move |_| notifier.show(social_sign_in(provider)),
            if provider == SocialProvider::Google {
                Icon { icon: FaGoogle, width: 14, height: 14 }
            } else {
                Icon { icon: FaGithub, width: 14, height: 14 }
            }
            span { "{provider}" }
        }
    }
}
