use dioxus::prelude::*;
use forms::PasswordStrength;

/// Bar + label under the signup password field. Hidden while the password is empty.
#[component]
pub fn StrengthMeter(password: String) -> Element {
    if password.is_empty() {
        return rsx! {};
    }

    let strength = PasswordStrength::estimate(&password);
    let width = format!("{:.0}%", strength.fill() * 100.0);
    let modifier = match strength {
        PasswordStrength::Weak => "strength--weak",
        PasswordStrength::Medium => "strength--medium",
        PasswordStrength::Strong => "strength--strong",
    };

    rsx! {
        div {
            class: "strength {modifier}",
            div {
                class: "strength-track",
                div { class: "strength-fill", style: "width: {width};" }
            }
            span { class: "strength-label", "Password strength: {strength}" }
        }
    }
}
