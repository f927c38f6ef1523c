use leptos::{ev::KeyboardEvent, *};
use system_ui::{EmptyState, MenuItem, MenuSurface, Modal, Text, TextField, TextTone};

use super::PALETTE_INPUT_ID;
use crate::{
    commands::visible_commands, keyboard::is_activation_key, reducer::GalleryAction,
    runtime_context::use_gallery_runtime,
};

#[component]
pub(super) fn CommandPalette() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let open = create_memo(move |_| runtime.overlays.get().palette.open);
    let query = create_memo(move |_| runtime.overlays.get().palette.query);
    let results = create_memo(move |_| visible_commands(&query.get()));
    let run = move |command_id: &'static str| {
        runtime.dispatch_action(GalleryAction::RunCommand {
            command_id: command_id.to_string(),
        })
    };

    view! {
        <Modal
            open=Signal::from(open)
            aria_label="Command palette"
            layout_class="command-palette"
            on_dismiss=Callback::new(move |_| runtime.dispatch_action(GalleryAction::ClosePalette))
        >
            <TextField
                id=PALETTE_INPUT_ID
                placeholder="Type a command…"
                aria_label="Search commands"
                value=Signal::from(query)
                on_input=Callback::new(move |ev| {
                    runtime.dispatch_action(GalleryAction::SetPaletteQuery {
                        query: event_target_value(&ev),
                    })
                })
                on_keydown=Callback::new(move |ev: KeyboardEvent| {
                    if !is_activation_key(&ev.key()) {
                        return;
                    }
                    ev.prevent_default();
                    if let Some(command) = results.get_untracked().first() {
                        run(command.id.0);
                    }
                })
            />
            <MenuSurface role="group" aria_label="Commands">
                <Show
                    when=move || !results.get().is_empty()
                    fallback=|| view! { <EmptyState>"No matching commands."</EmptyState> }
                >
                    <For each=move || results.get() key=|command| command.id let:command>
                        <MenuItem
                            aria_label=command.title
                            on_click=Callback::new(move |_| run(command.id.0))
                        >
                            <span class="command-row">
                                <strong>{command.title}</strong>
                                <Text tone=TextTone::Secondary>{command.description}</Text>
                            </span>
                            <span class="kbd" aria-hidden="true">"Enter"</span>
                        </MenuItem>
                    </For>
                </Show>
            </MenuSurface>
        </Modal>
    }
}
