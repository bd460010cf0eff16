//! Desktop shell UI composition and interaction surfaces.

mod about;
mod boot_screen;
mod gallery;
mod start_menu;
mod taskbar;
mod welcome;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
};

use self::{
    boot_screen::BootScreen, start_menu::StartMenu, taskbar::DesktopTaskbar,
    welcome::WelcomeNotification, window::FolderWindow,
};
use crate::{
    catalog::{self, FolderId},
    model::{DesktopState, PointerPosition},
    reducer::{DesktopAction, OpenWindowRequest},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the boot screen until boot completes, then the desktop.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Show when=move || runtime.booted.get() fallback=|| view! { <BootScreen/> }>
            <Desktop/>
        </Show>
    }
}

#[component]
fn Desktop() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.get_untracked().start_menu_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_none() && interaction.resizing.is_none() {
            return;
        }
        let viewport = runtime.host.get_value().viewport();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer, viewport });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer, viewport });
        }
    });
    let on_pointer_up = Callback::new(move |_| end_active_pointer_interaction(runtime));

    view! {
        <DesktopRoot on_pointermove=on_pointer_move on_pointerup=on_pointer_up>
            <DesktopBackdrop on_mousedown=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::CloseStartMenu)
            })>
                <DesktopIconGrid>
                    {catalog::catalog()
                        .folders
                        .iter()
                        .map(|folder| view! { <FolderIcon folder_id=folder.id/> })
                        .collect_view()}
                </DesktopIconGrid>
            </DesktopBackdrop>

            <DesktopWindowLayer>
                <For
                    each=move || state.with(DesktopState::window_ids)
                    key=|window_id| *window_id
                    let:window_id
                >
                    <FolderWindow window_id=window_id/>
                </For>
            </DesktopWindowLayer>

            <Show when=move || state.get().start_menu_open fallback=|| ()>
                <StartMenu/>
            </Show>
            <DesktopTaskbar/>
            <WelcomeNotification/>
        </DesktopRoot>
    }
}

#[component]
fn FolderIcon(folder_id: FolderId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = catalog::folder(folder_id);
    let icon_src = runtime.host.get_value().assets().image_url(&descriptor.icon);
    let selected = Signal::derive(move || runtime.state.get().active_window == Some(folder_id));

    view! {
        <DesktopIconButton
            icon_src=icon_src
            label=descriptor.title.clone()
            selected=selected
            on_click=Callback::new(move |_| open_folder(runtime, folder_id))
        />
    }
}

pub(crate) fn open_folder(runtime: DesktopRuntimeContext, folder_id: FolderId) {
    runtime.dispatch_action(DesktopAction::OpenWindow(OpenWindowRequest::for_folder(
        folder_id,
    )));
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}
