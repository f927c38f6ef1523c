//! Host-side runtime helpers for executing reducer effects against the browser.
//!
//! Reducer semantics stay pure; everything that touches storage, timers, or the DOM is routed
//! through [`GalleryHostContext`].

mod boot;
pub(crate) mod dom;
mod persistence_effects;
mod toast_timer;

use std::{cell::RefCell, rc::Rc};

use leptos::{leptos_dom::helpers::TimeoutHandle, Callback};
use platform_host::PrefsStore;
use platform_host_web::{host_strategy_name, prefs_store};

use crate::{
    reducer::{GalleryAction, RuntimeEffect},
    runtime_context::GalleryRuntimeContext,
    toast::TimerSlot,
};

#[derive(Clone)]
/// Host service bundle for gallery runtime side effects.
pub struct GalleryHostContext {
    prefs: Rc<dyn PrefsStore>,
    toast_timer: Rc<RefCell<TimerSlot<TimeoutHandle>>>,
    host_strategy_name: &'static str,
}

impl Default for GalleryHostContext {
    fn default() -> Self {
        Self {
            prefs: Rc::new(prefs_store()),
            toast_timer: Rc::new(RefCell::new(TimerSlot::default())),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl GalleryHostContext {
    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Loads the stored theme once and hydrates the reducer with it.
    pub fn install_boot_hydration(&self, dispatch: Callback<GalleryAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: GalleryRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistTheme => {
                persistence_effects::persist_theme(self.clone(), runtime)
            }
            RuntimeEffect::ApplyTheme(theme) => dom::apply_theme_attribute(theme),
            RuntimeEffect::FocusSearchInput => {
                dom::focus_element_by_id(crate::components::SEARCH_INPUT_ID)
            }
            RuntimeEffect::FocusPaletteInput => {
                dom::focus_element_by_id(crate::components::PALETTE_INPUT_ID)
            }
            RuntimeEffect::ScheduleToastDismissal { generation } => {
                toast_timer::schedule_dismissal(self.clone(), runtime, generation)
            }
        }
    }
}
