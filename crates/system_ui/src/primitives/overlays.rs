use super::*;

#[component]
/// Modal overlay with a content panel.
///
/// The overlay toggles an `open` class plus `aria-hidden`. Clicks that land on the backdrop
/// invoke `on_dismiss`; clicks inside the content panel never reach it.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-modal", layout_class)
            class:open=move || open.get()
            aria-hidden=move || bool_token(!open.get())
            data-ui-primitive="true"
            data-ui-kind="modal"
            data-ui-open=move || bool_token(open.get())
            on:click=move |ev| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(ev);
                }
            }
        >
            <div
                class="ui-modal-content"
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                data-ui-slot="modal-content"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
/// Shared list surface for overlay results.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// Overlay list row rendered as a quiet button.
pub fn MenuItem(
    #[prop(into)] aria_label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=aria_label
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Transient status message surface.
///
/// Visibility is owned by the caller; this primitive only reflects it through the `show` class,
/// `aria-hidden`, and `data-ui-visible`.
pub fn Toast(
    #[prop(into)] visible: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast", layout_class)
            class:show=move || visible.get()
            role="status"
            aria-live="polite"
            aria-hidden=move || bool_token(!visible.get())
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-visible=move || bool_token(visible.get())
        >
            {children()}
        </div>
    }
}
