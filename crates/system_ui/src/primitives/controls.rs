use super::*;

fn forward<E: Clone + 'static>(handler: Option<Callback<E>>) -> impl Fn(E) + 'static {
    move |ev| {
        if let Some(handler) = handler {
            handler.call(ev);
        }
    }
}

#[component]
/// Bevelled push button that the titlebar, taskbar and toast controls build on.
///
/// `pressed` wins over `selected` for the `data-ui-state` token. `compact` selects the dense
/// titlebar/taskbar metrics.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] compact: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] role: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional, into)] dimmed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    let state = move || {
        if pressed.get() {
            "pressed"
        } else if selected.get() {
            "selected"
        } else {
            "idle"
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-controls=move || aria_controls.get()
            aria-haspopup=move || aria_haspopup.get()
            aria-expanded=move || bool_token(aria_expanded.get())
            aria-pressed=move || bool_token(pressed.get() || selected.get())
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=if compact { "sm" } else { "md" }
            data-ui-state=state
            data-ui-dimmed=move || bool_token(dimmed.get())
            on:click=forward(on_click)
            on:mousedown=forward(on_mousedown)
            on:pointerdown=forward(on_pointerdown)
        >
            {children()}
        </button>
    }
}

#[component]
/// Block-segmented progress bar in the style of a retro loading screen.
pub fn ProgressBar(
    #[prop(into)] value: Signal<u16>,
    #[prop(default = 100)] max: u16,
    #[prop(default = 20)] segments: u16,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-progress", layout_class)
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax=max
            aria-valuenow=move || value.get().min(max)
            data-ui-primitive="true"
            data-ui-kind="progress"
        >
            {(0..segments)
                .map(|index| {
                    view! {
                        <span
                            class="ui-progress-segment"
                            data-ui-lit=move || {
                                bool_token(index < lit_segments(value.get(), max, segments))
                            }
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
