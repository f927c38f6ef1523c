//! Gallery UI composition and the document-level keyboard router.

mod card_grid;
mod chips;
mod metrics;
mod palette;
mod toast;
mod toolbar;

use leptos::*;
use system_ui::AppShell;

use self::{
    card_grid::CardGrid, chips::FilterChips, metrics::MetricsPanel, palette::CommandPalette,
    toast::GalleryToast, toolbar::GalleryToolbar,
};
use crate::{
    host::dom::{active_element_label, CaptureKeydownListener},
    keyboard::{route_keydown, KeyChord},
    reducer::GalleryAction,
    runtime_context::{use_gallery_runtime, GalleryRuntimeContext},
};

/// DOM id of the gallery search input.
pub const SEARCH_INPUT_ID: &str = "gallery-search-input";
/// DOM id of the command palette query input.
pub const PALETTE_INPUT_ID: &str = "command-palette-input";

fn install_key_router(runtime: GalleryRuntimeContext) {
    let listener = CaptureKeydownListener::install(move |ev: web_sys::KeyboardEvent| {
        runtime.dispatch_action(GalleryAction::RecordFocusedElement {
            label: active_element_label(),
        });

        let key = ev.key();
        let palette_open = runtime.overlays.get_untracked().palette.open;
        let route = route_keydown(KeyChord::from_event(&ev, &key), palette_open);
        if route.prevents_default() {
            ev.prevent_default();
        }
        if route.stops_propagation() {
            ev.stop_propagation();
        }
        if let Some(action) = route.action() {
            runtime.dispatch_action(action);
        }
    });

    if let Some(listener) = listener {
        on_cleanup(move || drop(listener));
    }
}

#[component]
/// Full gallery page: toolbar, chips, metrics, card grid, palette overlay, and toast.
pub fn GalleryShell() -> impl IntoView {
    let runtime = use_gallery_runtime();
    install_key_router(runtime);

    view! {
        <AppShell layout_class="gallery-shell">
            <GalleryToolbar />
            <FilterChips />
            <MetricsPanel />
            <CardGrid />
            <CommandPalette />
            <GalleryToast />
        </AppShell>
    }
}
