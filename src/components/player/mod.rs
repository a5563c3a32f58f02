use crate::api::CatalogStatus;
use crate::components::views::view_models::player_bar;
use crate::components::{Icon, IconName, PlaybackController};
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton};

/// Fixed now-playing bar. Hidden until the first track starts.
#[component]
pub fn Player() -> Element {
    let catalog = use_context::<Signal<CatalogStatus>>();
    let controller = use_context::<PlaybackController>();
    let playback = controller.state();

    let bar = player_bar(catalog.read().catalog(), &playback.read());
    if !bar.visible {
        return rsx! {};
    }

    let art = bar.art.clone().unwrap_or_default();

    let on_seek_input = {
        let controller = controller.clone();
        move |e: Event<FormData>| {
            if let Ok(percent) = e.value().parse::<f64>() {
                controller.seek_percent(percent);
            }
        }
    };

    let on_volume_input = {
        let controller = controller.clone();
        move |e: Event<FormData>| {
            if let Ok(level) = e.value().parse::<f64>() {
                controller.set_volume(level);
            }
        }
    };

    rsx! {
        div { id: "player", class: "player",
            img {
                id: "player-art",
                class: "player-art",
                src: "{art}",
                alt: "",
            }
            div { class: "player-info",
                div { id: "player-title", class: "player-title", "{bar.title}" }
                div { id: "player-album", class: "player-album", "{bar.album}" }
                if let Some(error) = bar.error.clone() {
                    div { class: "player-error", "{error}" }
                }
            }
            div { class: "player-controls",
                PrevButton { disabled: !bar.has_previous }
                PlayPauseButton { glyph: bar.toggle_glyph, disabled: !bar.can_toggle }
                NextButton { disabled: !bar.has_next }
            }
            div { class: "player-progress",
                span { id: "player-time", class: "player-time", "{bar.elapsed}" }
                input {
                    id: "player-seek",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "0.1",
                    value: "{bar.seek_percent}",
                    oninput: on_seek_input,
                }
                span { id: "player-duration", class: "player-time", "{bar.duration}" }
            }
            div { class: "player-volume",
                Icon { name: IconName::Volume, class: "icon-sm".to_string() }
                input {
                    id: "player-vol",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{bar.volume_percent}",
                    oninput: on_volume_input,
                }
            }
        }
    }
}
