//! Labelled inputs with an inline error slot.

use dioxus::prelude::*;

use crate::components::{Input, Label};
use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] autocomplete: String,
    #[props(default)] disabled: bool,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: if error.is_some() { "field field--invalid" } else { "field" },
            Label { html_for: "{id}", "{label}" }
            Input {
                id: "{id}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                autocomplete: "{autocomplete}",
                value: "{value}",
                disabled: disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p { id: "{id}-error", class: "field-error", "{message}" }
            }
        }
    }
}

/// Password input with a show/hide button.
#[component]
pub fn PasswordField(
    id: String,
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default = "current-password".to_string())] autocomplete: String,
    #[props(default)] disabled: bool,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        div {
            class: if error.is_some() { "field field--invalid" } else { "field" },
            Label { html_for: "{id}", "{label}" }
            div {
                class: "field-password",
                Input {
                    id: "{id}",
                    r#type: if visible() { "text" } else { "password" },
                    placeholder: "{placeholder}",
                    autocomplete: "{autocomplete}",
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "field-reveal",
                    disabled: disabled,
                    title: if visible() { "Hide password" } else { "Show password" },
                    onclick: move |_| visible.set(!visible()),
                    if visible() {
                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                }
            }
            if let Some(message) = error {
                p { id: "{id}-error", class: "field-error", "{message}" }
            }
        }
    }
}
