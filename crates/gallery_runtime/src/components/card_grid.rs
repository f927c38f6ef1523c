use leptos::{ev::KeyboardEvent, *};
use system_ui::{Badge, Card, Cluster, EmptyState, Grid, Heading, LayoutJustify, Text, TextTone};

use crate::{
    keyboard::is_activation_key, model, reducer::GalleryAction,
    runtime_context::use_gallery_runtime, view::visible_cards,
};

#[component]
pub(super) fn CardGrid() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let visible = create_memo(move |_| {
        let state = runtime.state.get();
        visible_cards(&state.cards, state.active_filter, &state.search_query)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <Grid ui_slot="cards" aria_label="Cards">
            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <EmptyState>"No cards match."</EmptyState> }
            >
                <For each=move || visible.get() key=|card| card.title let:card>
                    <GalleryCard card=card />
                </For>
            </Show>
        </Grid>
    }
}

#[component]
fn GalleryCard(card: model::Card) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let title = card.title;
    let open = move || {
        runtime.dispatch_action(GalleryAction::OpenCard {
            title: title.to_string(),
        })
    };

    view! {
        <Card
            layout_class="gallery-card"
            tabindex=0
            aria_label=format!("{} ({})", card.title, card.tag.label())
            on_click=Callback::new(move |_| open())
            on_keydown=Callback::new(move |ev: KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    open();
                }
            })
        >
            <Cluster justify=LayoutJustify::Between>
                <Heading>{card.title}</Heading>
                <Badge tone=TextTone::Accent>{card.tag.label()}</Badge>
            </Cluster>
            <Text tone=TextTone::Secondary>{card.description}</Text>
            <span class="kbd" aria-hidden="true">"↵ Enter"</span>
        </Card>
    }
}
