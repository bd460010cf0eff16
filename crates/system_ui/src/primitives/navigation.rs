use super::*;

#[component]
/// Window menu bar hosting folder tabs.
pub fn MenuBar(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-menu-bar"
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-bar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Label whose first character is underlined as a keyboard mnemonic.
pub fn MnemonicLabel(#[prop(into)] label: String) -> impl IntoView {
    let (first, rest) = split_mnemonic(&label);
    view! {
        <span class="ui-mnemonic-label">
            <span class="ui-mnemonic">{first}</span>
            {rest}
        </span>
    }
}

#[component]
/// Menu bar tab.
pub fn Tab(
    #[prop(into)] label: String,
    #[prop(into)] selected: Signal<bool>,
    #[prop(optional, into)] controls: Option<String>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-tab"
            role="tab"
            aria-selected=move || bool_token(selected.get())
            aria-controls=controls
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(());
                }
            }
        >
            <MnemonicLabel label=label/>
        </button>
    }
}

#[component]
/// Window status bar.
pub fn StatusBar(children: Children) -> impl IntoView {
    view! {
        <div class="ui-status-bar" role="status" data-ui-primitive="true" data-ui-kind="status-bar">
            {children()}
        </div>
    }
}

#[component]
/// One status bar cell.
pub fn StatusBarItem(
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-status-bar-item"
            data-ui-primitive="true"
            data-ui-kind="status-bar-item"
            data-ui-slot=ui_slot
        >
            {children()}
        </span>
    }
}
