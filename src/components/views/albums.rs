use crate::api::CatalogStatus;
use crate::components::views::view_models::{grid_model, AlbumCardModel, GridModel};
use crate::components::{Icon, IconName, Navigation};
use crate::config::PlayerConfig;
use dioxus::prelude::*;

#[component]
pub fn AlbumsView() -> Element {
    let catalog = use_context::<Signal<CatalogStatus>>();
    let config = use_context::<PlayerConfig>();
    let navigation = use_context::<Navigation>();

    let model = grid_model(&catalog.read(), &config.fallback_message);

    rsx! {
        section { class: "albums",
            h2 { class: "section-title", "Albums" }
            div { id: "album-grid", class: "album-grid",
                {match model {
                    GridModel::Pending => rsx! {
                        div { class: "grid-loading",
                            Icon { name: IconName::Loader, class: "icon-lg".to_string() }
                        }
                    },
                    GridModel::Fallback(message) => rsx! {
                        p { class: "grid-fallback", "{message}" }
                    },
                    GridModel::Cards(cards) => rsx! {
                        for card in cards {
                            AlbumCard {
                                key: "{card.index}",
                                card: card.clone(),
                                onclick: {
                                    let index = card.index;
                                    move |_| navigation.show_album(index)
                                },
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
pub fn AlbumCard(card: AlbumCardModel, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "album-card",
            "data-idx": "{card.index}",
            onclick: move |evt| onclick.call(evt),
            div { class: "art",
                if let Some(art) = card.art.clone() {
                    img { src: "{art}", alt: "{card.title}" }
                } else {
                    div { class: "placeholder", "♫" }
                }
            }
            div { class: "info",
                div { class: "album-title", "{card.title}" }
                div { class: "album-meta", "{card.meta}" }
            }
        }
    }
}
