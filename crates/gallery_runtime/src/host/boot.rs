use leptos::{create_effect, spawn_local, Callable, Callback};

use crate::{host::GalleryHostContext, persistence, reducer::GalleryAction};

pub(super) fn install_boot_hydration(host: GalleryHostContext, dispatch: Callback<GalleryAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let theme = persistence::load_theme(prefs.as_ref()).await;
            dispatch.call(GalleryAction::HydrateTheme { theme });
        });
    });
}
