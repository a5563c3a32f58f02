use crate::api::{load_catalog, CatalogStatus};
use crate::components::views::{AboutSection, AlbumDetailView, AlbumsView};
use crate::components::{
    view_label, AppView, AudioController, Navigation, PlaybackController, PlaybackState, Player,
    APP_TITLE,
};
use crate::config::PlayerConfig;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let config = use_context::<PlayerConfig>();
    let mut catalog = use_signal(CatalogStatus::default);
    let current_view = use_signal(AppView::default);
    let playback = use_signal(|| PlaybackState::new(config.initial_volume()));
    let navigation = Navigation::new(current_view, catalog);
    let controller = PlaybackController::new(playback, catalog, config.audio_element_id.clone());

    // Provide state via context
    use_context_provider(|| catalog);
    use_context_provider(|| navigation);
    use_context_provider(|| controller.clone());

    // Fetch the catalog once on mount
    let catalog_location = config.catalog_location.clone();
    use_effect(move || {
        let location = catalog_location.clone();
        spawn(async move {
            let outcome = load_catalog(&location).await;
            catalog.with_mut(|status| {
                status.settle(outcome);
            });
        });
    });

    let view = navigation.current();
    let title = view_label(&view, catalog.read().catalog());

    rsx! {
        document::Title { "{title}" }

        div { class: "app-container",
            header { class: "site-header",
                h1 {
                    class: "site-title",
                    onclick: move |_| navigation.show_grid(),
                    "{APP_TITLE}"
                }
            }

            main { class: "page-shell",
                {match view {
                    AppView::Grid => rsx! {
                        AlbumsView {}
                        AboutSection {}
                    },
                    AppView::AlbumDetail(index) => rsx! {
                        AlbumDetailView { album_index: index }
                    },
                }}
            }

            // Fixed bottom player
            Player {}
        }

        // Audio controller - manages the media element separately from UI
        AudioController {}
    }
}
