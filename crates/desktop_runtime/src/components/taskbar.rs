use leptos::*;
use system_ui::{FallbackImage, Taskbar, TaskbarButton, TaskbarSection};

use super::{open_folder, start_menu::START_MENU_ID, use_desktop_runtime};
use crate::{
    catalog::{self, FolderId},
    model::{DesktopState, TASKBAR_HEIGHT},
    reducer::DesktopAction,
};

fn taskbar_window_aria_label(title: &str, active: bool, minimized: bool) -> String {
    let mut parts = vec![title.to_string()];
    if active {
        parts.push("active".to_string());
    }
    if minimized {
        parts.push("minimized".to_string());
    }
    parts.join(", ")
}

#[component]
/// Start button plus one entry per open window, in open order.
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_open = Signal::derive(move || state.get().start_menu_open);
    let start_icon = runtime
        .host
        .get_value()
        .assets()
        .image_url(&catalog::catalog().desktop.start_button_icon);

    view! {
        <Taskbar style=format!("height:{TASKBAR_HEIGHT}px;")>
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    ui_slot="start-button"
                    aria_label="Start"
                    aria_controls=START_MENU_ID
                    aria_haspopup="menu"
                    aria_expanded=start_open
                    pressed=start_open
                    on_mousedown=Callback::new(|ev: web_sys::MouseEvent| ev.stop_propagation())
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                    })
                >
                    <FallbackImage src=start_icon alt="" fallback="" layout_class="start-button-icon"/>
                    <span>"START"</span>
                </TaskbarButton>
            </TaskbarSection>
            <TaskbarSection ui_slot="windows" aria_label="Open windows">
                <For
                    each=move || state.with(DesktopState::window_ids)
                    key=|window_id| *window_id
                    let:window_id
                >
                    <TaskbarWindowButton window_id=window_id/>
                </For>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarWindowButton(window_id: FolderId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = catalog::folder(window_id);
    let active = Signal::derive(move || runtime.state.get().active_window == Some(window_id));
    let minimized = Signal::derive(move || runtime.state.get().is_minimized(window_id));
    let label = descriptor.taskbar_label.clone();

    view! {
        <TaskbarButton
            id=format!("taskbar-window-button-{}", window_id.slug())
            aria_label=Signal::derive(move || {
                taskbar_window_aria_label(&label, active.get(), minimized.get())
            })
            title=descriptor.title.clone()
            pressed=active
            dimmed=minimized
            on_click=Callback::new(move |_| open_folder(runtime, window_id))
        >
            <span class="taskbar-window-label">{descriptor.taskbar_label.clone()}</span>
        </TaskbarButton>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aria_label_lists_window_status() {
        assert_eq!(taskbar_window_aria_label("3D Works", false, false), "3D Works");
        assert_eq!(
            taskbar_window_aria_label("2D Arts", true, false),
            "2D Arts, active"
        );
        assert_eq!(
            taskbar_window_aria_label("Tattoo Designs", false, true),
            "Tattoo Designs, minimized"
        );
    }
}
