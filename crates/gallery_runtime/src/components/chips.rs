use leptos::*;
use system_ui::{Button, ButtonVariant, Cluster, LayoutGap};

use crate::{model::TagFilter, reducer::GalleryAction, runtime_context::use_gallery_runtime};

#[component]
pub(super) fn FilterChips() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let active_filter = create_memo(move |_| runtime.state.get().active_filter);

    view! {
        <Cluster gap=LayoutGap::Sm ui_slot="chips" role="group" aria_label="Filter by tag">
            {TagFilter::OPTIONS
                .into_iter()
                .map(move |filter| {
                    view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            layout_class="chip"
                            toggle=true
                            pressed=Signal::derive(move || active_filter.get() == filter)
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(GalleryAction::SetFilter {
                                    filter,
                                    clear_search: false,
                                })
                            })
                        >
                            {filter.label()}
                        </Button>
                    }
                })
                .collect_view()}
        </Cluster>
    }
}
