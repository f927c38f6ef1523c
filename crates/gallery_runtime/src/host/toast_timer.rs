use leptos::{leptos_dom::helpers::TimeoutHandle, logging, set_timeout_with_handle};

use crate::{
    host::GalleryHostContext,
    reducer::GalleryAction,
    runtime_context::GalleryRuntimeContext,
    toast::{PendingTimer, TOAST_DISMISS_DELAY},
};

impl PendingTimer for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Arms the dismissal timer for `generation`, cancelling whichever timer was live before.
pub(super) fn schedule_dismissal(
    host: GalleryHostContext,
    runtime: GalleryRuntimeContext,
    generation: u64,
) {
    let slot = host.toast_timer.clone();
    let fired_slot = slot.clone();
    let scheduled = set_timeout_with_handle(
        move || {
            fired_slot.borrow_mut().settle(generation);
            runtime.dispatch_action(GalleryAction::DismissToast { generation });
        },
        TOAST_DISMISS_DELAY,
    );

    match scheduled {
        Ok(handle) => slot.borrow_mut().rearm(generation, handle),
        Err(err) => logging::warn!("toast dismissal timer failed: {err:?}"),
    }
}
