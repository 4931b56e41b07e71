use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use forms::SignpostConfig;
use views::{Home, Login, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SIGNPOST_TOML: &str = include_str!("../signpost.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| SignpostConfig::from_toml_or_default(SIGNPOST_TOML));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::ConfigProvider {
            config,
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
