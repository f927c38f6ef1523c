//! Direct DOM access: deferred focus, the root theme attribute, and the capture-phase key hook.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{Theme, NO_FOCUS_LABEL};

/// Focuses the element with `id` on the next task so it lands after the current render pass.
pub(crate) fn focus_element_by_id(id: &'static str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Sets `data-theme="light"` on the root element, or removes it for the dark default.
pub(crate) fn apply_theme_attribute(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let result = match theme {
            Theme::Light => root.set_attribute("data-theme", theme.pref_value()),
            Theme::Dark => root.remove_attribute("data-theme"),
        };
        if let Err(err) = result {
            leptos::logging::warn!("apply theme attribute failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

/// Tag name of the currently focused element, or `None` when there is none.
pub(crate) fn active_element_label() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.active_element())
        {
            return element.tag_name();
        }
    }
    NO_FOCUS_LABEL.to_string()
}

/// Document keydown listener registered in the capture phase. Removed on drop.
pub(crate) struct CaptureKeydownListener {
    #[cfg(target_arch = "wasm32")]
    callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl CaptureKeydownListener {
    /// Registers `handler` ahead of every element-level keydown handler.
    pub(crate) fn install(handler: impl FnMut(web_sys::KeyboardEvent) + 'static) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()?.document()?;
            let callback =
                Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(handler));
            if let Err(err) = document.add_event_listener_with_callback_and_bool(
                "keydown",
                callback.as_ref().unchecked_ref(),
                true,
            ) {
                leptos::logging::warn!("install keydown router failed: {err:?}");
                return None;
            }
            Some(Self { callback })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = handler;
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for CaptureKeydownListener {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            let _ = document.remove_event_listener_with_callback_and_bool(
                "keydown",
                self.callback.as_ref().unchecked_ref(),
                true,
            );
        }
    }
}
