use crate::components::{Icon, IconName, PlaybackController};
use dioxus::prelude::*;

/// Play/pause toggle. Shows the transport glyph rather than an icon.
#[component]
pub(super) fn PlayPauseButton(glyph: &'static str, disabled: bool) -> Element {
    let controller = use_context::<PlaybackController>();

    rsx! {
        button {
            id: "player-toggle",
            r#type: "button",
            class: "player-btn player-toggle",
            disabled: disabled,
            onclick: move |_| controller.toggle(),
            "{glyph}"
        }
    }
}

#[component]
pub(super) fn PrevButton(disabled: bool) -> Element {
    let controller = use_context::<PlaybackController>();

    rsx! {
        button {
            id: "player-prev",
            r#type: "button",
            class: "player-btn",
            aria_label: "Previous track",
            disabled: disabled,
            onclick: move |_| controller.previous(),
            Icon { name: IconName::Prev, class: "icon-sm".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton(disabled: bool) -> Element {
    let controller = use_context::<PlaybackController>();

    rsx! {
        button {
            id: "player-next",
            r#type: "button",
            class: "player-btn",
            aria_label: "Next track",
            disabled: disabled,
            onclick: move |_| controller.next(),
            Icon { name: IconName::Next, class: "icon-sm".to_string() }
        }
    }
}
