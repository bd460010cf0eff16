use super::*;

#[component]
/// Overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role="menu"
            aria-label=aria_label
            style=style
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:mousedown=move |ev| ev.stop_propagation()
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry.
pub fn MenuItem(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            role="menuitem"
            aria_label=aria_label.unwrap_or_default()
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
/// Menu separator.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="ui-menu-separator"
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Full-screen modal overlay.
///
/// Clicking the backdrop or pressing Escape calls `on_dismiss`. Clicks inside the content do not
/// reach the backdrop.
pub fn Modal(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-modal-backdrop"
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="modal"
            on:click=move |_| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(());
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(());
                    }
                }
            }
        >
            <div class="ui-modal-content" on:click=move |ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

#[component]
/// Notification toast anchored above the taskbar tray.
pub fn Toast(
    #[prop(into)] title: String,
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class="ui-toast"
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-visible=move || bool_token(visible.get())
        >
            <header class="ui-toast-header">
                <strong class="ui-toast-title">{title}</strong>
                <Button
                    aria_label="Close notification"
                    ui_slot="toast-close"
                    variant=ButtonVariant::Quiet
                    compact=true
                    on_click=Callback::new(move |ev| {
                        if let Some(on_close) = on_close.as_ref() {
                            on_close.call(ev);
                        }
                    })
                >
                    "×"
                </Button>
            </header>
            <div class="ui-toast-body">{children()}</div>
        </aside>
    }
}
