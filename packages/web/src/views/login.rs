//! Login page view.

use dioxus::prelude::*;
use ui::LoginForm;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginForm {
            signup_route: Route::Signup {}.to_string(),
            on_navigate: move |target: String| {
                nav.push(target);
            },
        }
    }
}
