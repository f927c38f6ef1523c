use leptos::*;
use system_ui::{Cluster, LayoutGap, Metric};

use crate::{runtime_context::use_gallery_runtime, view::gallery_metrics};

#[component]
pub(super) fn MetricsPanel() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let metrics = create_memo(move |_| gallery_metrics(&runtime.state.get()));

    view! {
        <Cluster gap=LayoutGap::Md ui_slot="metrics" aria_label="Gallery metrics">
            <Metric label="Cards">{move || metrics.get().total}</Metric>
            <Metric label="Filtered">{move || metrics.get().filtered}</Metric>
            <Metric label="Theme">{move || metrics.get().theme_label}</Metric>
            <Metric label="Last focus">{move || metrics.get().focused_element}</Metric>
        </Cluster>
    }
}
