use leptos::*;
use system_ui::{
    Button, ButtonVariant, Cluster, LayoutGap, LayoutJustify, Stack, Text, TextField, TextTone,
};

use super::SEARCH_INPUT_ID;
use crate::{reducer::GalleryAction, runtime_context::use_gallery_runtime};

const DEMO_BUTTON_TOAST: &str = "Clean UI. Compiled to wasm. ✅";

#[component]
pub(super) fn GalleryToolbar() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let search_query = create_memo(move |_| runtime.state.get().search_query);
    let dispatch = move |action: GalleryAction| runtime.dispatch_action(action);

    view! {
        <header class="gallery-header" data-ui-slot="header">
            <Cluster justify=LayoutJustify::Between layout_class="gallery-topbar">
                <Stack gap=LayoutGap::Sm>
                    <h1 class="gallery-title">"Card Gallery"</h1>
                    <Text tone=TextTone::Secondary>
                        "Press / to search, Ctrl+K for commands."
                    </Text>
                </Stack>
                <Cluster gap=LayoutGap::Sm ui_slot="toolbar">
                    <Button
                        aria_label="Toggle theme"
                        on_click=Callback::new(move |_| dispatch(GalleryAction::ToggleTheme))
                    >
                        "Theme"
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        aria_keyshortcuts="Control+K Meta+K"
                        on_click=Callback::new(move |_| dispatch(GalleryAction::OpenPalette))
                    >
                        "Commands"
                    </Button>
                    <Button on_click=Callback::new(move |_| dispatch(GalleryAction::ShuffleCards))>
                        "Shuffle"
                    </Button>
                    <Button on_click=Callback::new(move |_| {
                        dispatch(GalleryAction::ShowToast {
                            message: DEMO_BUTTON_TOAST.to_string(),
                        })
                    })>"Toast"</Button>
                </Cluster>
            </Cluster>
            <Cluster gap=LayoutGap::Sm ui_slot="search">
                <TextField
                    id=SEARCH_INPUT_ID
                    input_type="search"
                    placeholder="Search cards…"
                    aria_label="Search cards"
                    layout_class="gallery-search"
                    value=Signal::from(search_query)
                    on_input=Callback::new(move |ev| {
                        dispatch(GalleryAction::SetSearchQuery {
                            query: event_target_value(&ev),
                        })
                    })
                />
                <Button
                    variant=ButtonVariant::Quiet
                    aria_label="Clear search"
                    on_click=Callback::new(move |_| dispatch(GalleryAction::ClearSearch))
                >
                    "Clear"
                </Button>
            </Cluster>
        </header>
    }
}
