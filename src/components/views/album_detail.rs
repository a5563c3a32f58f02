use crate::api::CatalogStatus;
use crate::components::views::album_song_row::TrackRow;
use crate::components::views::view_models::{album_header, track_rows};
use crate::components::{Icon, IconName, Navigation, PlaybackController};
use dioxus::prelude::*;

#[component]
pub fn AlbumDetailView(album_index: usize) -> Element {
    let catalog = use_context::<Signal<CatalogStatus>>();
    let navigation = use_context::<Navigation>();
    let controller = use_context::<PlaybackController>();
    let playback = controller.state();

    let (header, rows) = {
        let status = catalog.read();
        let header = status.catalog().album(album_index).map(album_header);
        (header, track_rows(status.catalog(), album_index, &playback.read()))
    };

    rsx! {
        section { id: "album-detail", class: "album-detail",
            button {
                id: "back-btn",
                class: "back-btn",
                onclick: move |_| navigation.show_grid(),
                Icon { name: IconName::ArrowLeft, class: "icon-sm".to_string() }
                "Back"
            }

            if let Some(header) = header {
                div { id: "album-header", class: "album-header",
                    div { class: "detail-art",
                        if let Some(art) = header.art.clone() {
                            img { src: "{art}", alt: "{header.title}" }
                        }
                    }
                    div { class: "detail-info",
                        h3 { "{header.title}" }
                        div { class: "detail-year", "{header.year}" }
                        div { class: "detail-desc", "{header.description}" }
                    }
                }

                div { id: "tracklist", class: "tracklist",
                    for row in rows {
                        TrackRow {
                            key: "{row.index}",
                            row: row.clone(),
                            onclick: {
                                let controller = controller.clone();
                                let track = row.index;
                                move |_| controller.play_track(album_index, track)
                            },
                        }
                    }
                }
            } else {
                p { class: "grid-fallback", "Album not found" }
            }
        }
    }
}
