use gallery_runtime::{GalleryProvider, GalleryShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Card Gallery" />
        <Meta
            name="description"
            content="A filterable card gallery with a command palette, built with Leptos."
        />

        <main class="site-root">
            <GalleryEntry />
        </main>
    }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    view! {
        <GalleryProvider>
            <GalleryShell />
        </GalleryProvider>
    }
}
