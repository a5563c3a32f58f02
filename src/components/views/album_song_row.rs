use crate::components::views::view_models::TrackRowModel;
use dioxus::prelude::*;

#[component]
pub fn TrackRow(row: TrackRowModel, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: if row.playing { "track playing" } else { "track" },
            "data-idx": "{row.index}",
            onclick: move |evt| onclick.call(evt),
            span { class: "track-num", "{row.number}" }
            span { class: "track-title", "{row.title}" }
            span { class: "track-duration", "{row.duration}" }
        }
    }
}
