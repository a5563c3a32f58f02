use dioxus::prelude::*;

mod api;
mod components;
mod config;

use components::AppShell;
use config::PlayerConfig;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(PlayerConfig::default);

    rsx! {
        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#1e3a5f" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
