//! Light/dark toggle for the login page.
//!
//! The theme lives in a signal owned by the page and is applied as a
//! `data-theme` attribute on the page root. Nothing outside that element
//! changes and nothing is persisted.

use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[component]
pub fn ThemeToggle(mut theme: Signal<Theme>) -> Element {
    let current = theme();
    let title = match current {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: title,
            "aria-label": title,
            onclick: move |_| theme.set(current.toggled()),
            if current == Theme::Light {
                Icon { icon: FaMoon, width: 16, height: 16 }
            } else {
                Icon { icon: FaSun, width: 16, height: 16 }
            }
        }
    }
}
