//! Runtime provider and context wiring for the gallery.
//!
//! The provider owns the gallery and overlay signals, the reducer dispatch callback, and the
//! runtime effect queue. UI composition lives in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{
    effect_executor,
    host::GalleryHostContext,
    model::{GalleryState, OverlayState},
    reducer::{reduce_gallery, GalleryAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading gallery state and dispatching [`GalleryAction`] values.
pub struct GalleryRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<GalleryHostContext>,
    /// Cards, filter, query, and theme.
    pub state: RwSignal<GalleryState>,
    /// Command palette and toast state.
    pub overlays: RwSignal<OverlayState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<GalleryAction>,
}

impl GalleryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: GalleryAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`GalleryRuntimeContext`] to descendant components and hydrates the stored theme.
pub fn GalleryProvider(children: Children) -> impl IntoView {
    let host = store_value(GalleryHostContext::default());
    let state = create_rw_signal(GalleryState::default());
    let overlays = create_rw_signal(OverlayState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: GalleryAction| {
        let mut gallery = state.get_untracked();
        let mut overlay = overlays.get_untracked();
        let previous_gallery = gallery.clone();
        let previous_overlay = overlay.clone();

        match reduce_gallery(
            &mut gallery,
            &mut overlay,
            action,
            &mut rand::thread_rng(),
        ) {
            Ok(new_effects) => {
                if gallery != previous_gallery {
                    state.set(gallery);
                }
                if overlay != previous_overlay {
                    overlays.set(overlay);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("gallery reducer error: {err}"),
        }
    });

    let runtime = GalleryRuntimeContext {
        host,
        state,
        overlays,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`GalleryRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`GalleryProvider`].
pub fn use_gallery_runtime() -> GalleryRuntimeContext {
    use_context::<GalleryRuntimeContext>().expect("GalleryRuntimeContext not provided")
}
