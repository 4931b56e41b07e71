use dioxus::prelude::*;

use crate::Route;

/// Landing page and post-login redirect target.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            h1 { "Signpost" }
            div {
                class: "home-links",
                Link { to: Route::Login {}, "Sign in" }
                Link { to: Route::Signup {}, "Create an account" }
            }
        }
    }
}
