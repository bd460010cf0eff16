use super::*;

#[component]
/// Placeholder shown when a view has nothing to display.
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state">
            <p>{message}</p>
        </div>
    }
}

#[component]
/// Image that is replaced by a text label when it fails to load.
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] fallback: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let failed = create_rw_signal(false);
    let class = merge_layout_class("ui-fallback-image", layout_class);
    view! {
        <Show
            when=move || !failed.get()
            fallback=move || {
                let fallback = fallback.clone();
                view! {
                    <span class="ui-image-fallback" data-ui-kind="image-fallback">
                        {fallback}
                    </span>
                }
            }
        >
            <img
                class=class.clone()
                src=src.clone()
                alt=alt.clone()
                loading="lazy"
                on:error=move |_| failed.set(true)
            />
        </Show>
    }
}

#[component]
/// Thumbnail grid.
pub fn ThumbnailGrid(children: Children) -> impl IntoView {
    view! {
        <div class="ui-thumbnail-grid" role="list" data-ui-primitive="true" data-ui-kind="thumbnail-grid">
            {children()}
        </div>
    }
}

#[component]
/// Selectable thumbnail tile with caption.
pub fn Thumbnail(
    #[prop(into)] src: String,
    #[prop(into)] caption: String,
    #[prop(into)] selected: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let label = caption.clone();
    view! {
        <button
            type="button"
            class="ui-thumbnail"
            role="listitem"
            title=caption.clone()
            data-ui-primitive="true"
            data-ui-kind="thumbnail"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            <FallbackImage src=src alt=caption.clone() fallback=caption layout_class="ui-thumbnail-image"/>
            <span class="ui-thumbnail-caption">{label}</span>
        </button>
    }
}
