//! Defines the shared application view state.

use crate::api::Catalog;

pub const APP_TITLE: &str = "Bluemania";

/// The grid and the album detail are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Grid,
    /// Index of the album in the catalog.
    AlbumDetail(usize),
}

impl AppView {
    /// Opens an album. Indices outside the catalog keep the current view.
    pub fn select_album(self, catalog: &Catalog, index: usize) -> AppView {
        if catalog.album(index).is_some() {
            AppView::AlbumDetail(index)
        } else {
            self
        }
    }

    pub fn back(self) -> AppView {
        AppView::Grid
    }
}

pub fn view_label(view: &AppView, catalog: &Catalog) -> String {
    match view {
        AppView::Grid => APP_TITLE.to_string(),
        AppView::AlbumDetail(index) => match catalog.album(*index) {
            Some(album) => format!("{} · {APP_TITLE}", album.title),
            None => APP_TITLE.to_string(),
        },
    }
}
