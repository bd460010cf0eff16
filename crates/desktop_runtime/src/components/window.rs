use super::*;
use crate::{
    catalog::ContentKind,
    model::ResizeEdge,
};
use system_ui::{
    MenuBar, ResizeHandle, Tab, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{about::AboutPanel, gallery::GalleryView};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn FolderWindow(window_id: FolderId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = catalog::folder(window_id);
    let icon_src = runtime.host.get_value().assets().image_url(&descriptor.icon);

    let window = Signal::derive(move || runtime.state.get().window(window_id).cloned());
    let focused = Signal::derive(move || runtime.state.get().active_window == Some(window_id));
    let maximized = Signal::derive(move || window.get().is_some_and(|w| w.maximized));
    let style = Signal::derive(move || {
        window
            .get()
            .map(|w| {
                let mut style = w.rect.css(w.z_index);
                if w.minimized {
                    style.push_str("display:none;");
                }
                style
            })
            .unwrap_or_default()
    });
    let active_tab = Signal::derive(move || window.get().and_then(|w| w.active_tab));

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximizeWindow {
            window_id,
            viewport: runtime.host.get_value().viewport(),
        });
    };
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        toggle_maximize();
    });

    let tabs = descriptor.tabs.clone();
    let content = descriptor.content;

    view! {
        <WindowFrame
            style=style
            aria_label=descriptor.title.clone()
            focused=focused
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar
                focused=focused
                on_pointerdown=begin_move
                on_dblclick=titlebar_double_click
            >
                <WindowTitle icon_src=icon_src>{descriptor.title.clone()}</WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id })
                        })
                    >
                        "_"
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            if maximized.get() { "Restore window" } else { "Maximize window" }
                                .to_string()
                        })
                        on_click=Callback::new(move |_| toggle_maximize())
                    >
                        {move || if maximized.get() { "❐" } else { "□" }}
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Close window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id })
                        })
                    >
                        "×"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>

            {(!tabs.is_empty())
                .then(|| {
                    view! {
                        <MenuBar aria_label=format!("{} sections", descriptor.title)>
                            {tabs
                                .iter()
                                .map(|tab| {
                                    let slug = tab.slug.clone();
                                    let selected_slug = slug.clone();
                                    view! {
                                        <Tab
                                            label=tab.label.clone()
                                            selected=Signal::derive(move || {
                                                active_tab.get().as_deref()
                                                    == Some(selected_slug.as_str())
                                            })
                                            controls=format!("window-body-{}", window_id.slug())
                                            on_select=Callback::new(move |_| {
                                                runtime
                                                    .dispatch_action(DesktopAction::SelectTab {
                                                        window_id,
                                                        tab: slug.clone(),
                                                    })
                                            })
                                        />
                                    }
                                })
                                .collect_view()}
                        </MenuBar>
                    }
                })}

            <WindowBody>
                <div id=format!("window-body-{}", window_id.slug()) class="window-body-content">
                    {match content {
                        ContentKind::Gallery => {
                            let directory = Signal::derive(move || {
                                catalog::folder(window_id).directory(active_tab.get().as_deref())
                            });
                            view! { <GalleryView directory=directory/> }.into_view()
                        }
                        ContentKind::About => {
                            let section = Signal::derive(move || active_tab.get().unwrap_or_default());
                            view! { <AboutPanel section=section/> }.into_view()
                        }
                    }}
                </div>
            </WindowBody>

            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge/> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(window_id: FolderId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown=on_pointerdown/> }
}
