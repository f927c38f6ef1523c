use leptos::*;
use system_ui::Toast;

use crate::runtime_context::use_gallery_runtime;

#[component]
pub(super) fn GalleryToast() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let toast = create_memo(move |_| runtime.overlays.get().toast);

    view! {
        <Toast visible=Signal::derive(move || toast.get().visible)>
            {move || toast.get().message}
        </Toast>
    }
}
