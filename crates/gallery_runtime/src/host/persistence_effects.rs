use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{host::GalleryHostContext, persistence, runtime_context::GalleryRuntimeContext};

pub(super) fn persist_theme(host: GalleryHostContext, runtime: GalleryRuntimeContext) {
    let theme = runtime.state.get_untracked().theme;
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::persist_theme(prefs.as_ref(), theme).await {
            logging::warn!(
                "persist theme via {} host failed: {err}",
                host.host_strategy_name()
            );
        }
    });
}
