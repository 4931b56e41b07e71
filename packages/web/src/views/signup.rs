//! Signup page view.

use dioxus::prelude::*;
use ui::SignupForm;

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        SignupForm {
            login_route: Route::Login {}.to_string(),
            on_navigate: move |target: String| {
                nav.push(target);
            },
        }
    }
}
