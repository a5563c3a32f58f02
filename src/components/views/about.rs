use crate::components::app_view::APP_TITLE;
use dioxus::prelude::*;

/// Shown under the grid; hidden while an album is open.
#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { class: "about",
            h2 { class: "section-title", "About" }
            p {
                "{APP_TITLE} is an independent catalog of original recordings. "
                "Pick an album to see its tracks, then press any track to listen."
            }
        }
    }
}
