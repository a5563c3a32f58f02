use dioxus::prelude::*;

use crate::api::CatalogStatus;
use crate::components::app_view::AppView;

/// Switches between the album grid and an album's detail view.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigation {
    current_view: Signal<AppView>,
    catalog: Signal<CatalogStatus>,
}

impl Navigation {
    pub fn new(current_view: Signal<AppView>, catalog: Signal<CatalogStatus>) -> Self {
        Self {
            current_view,
            catalog,
        }
    }

    pub fn current(&self) -> AppView {
        (self.current_view)()
    }

    pub fn show_album(&self, index: usize) {
        let mut current_view = self.current_view;
        let previous = *current_view.peek();
        let target = previous.select_album(self.catalog.peek().catalog(), index);
        if target == previous {
            tracing::debug!("Ignoring selection of unknown album {index}");
            return;
        }
        current_view.set(target);
        scroll_to_top();
    }

    pub fn show_grid(&self) {
        let mut current_view = self.current_view;
        let target = current_view.peek().back();
        current_view.set(target);
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}
