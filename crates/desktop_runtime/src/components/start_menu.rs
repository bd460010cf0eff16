use leptos::*;
use system_ui::{FallbackImage, MenuItem, MenuSeparator, MenuSurface};

use super::{open_folder, use_desktop_runtime};
use crate::{catalog, reducer::DesktopAction};

pub(super) const START_MENU_ID: &str = "desktop-start-menu";

#[component]
/// Start menu listing every folder. Choosing an entry opens it and closes the menu.
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let assets = runtime.host.get_value().assets().clone();
    let settings = &catalog::catalog().desktop;
    let owner_initial: String = settings.owner.chars().take(1).collect();

    let on_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });

    view! {
        <MenuSurface
            id=START_MENU_ID
            aria_label=settings.start_menu_title.clone()
            layout_class="start-menu"
            on_keydown=on_keydown
        >
            <header class="start-menu-banner">
                <FallbackImage
                    src=assets.image_url(&settings.profile_image)
                    alt="User"
                    fallback=owner_initial
                    layout_class="start-menu-avatar"
                />
                <div>
                    <strong>{settings.start_menu_title.clone()}</strong>
                    <span>"User"</span>
                </div>
            </header>
            <MenuSeparator/>
            {catalog::catalog()
                .folders
                .iter()
                .map(|folder| {
                    let folder_id = folder.id;
                    let icon_url = assets.image_url(&folder.icon);
                    view! {
                        <MenuItem
                            aria_label=folder.title.clone()
                            on_click=Callback::new(move |_| open_folder(runtime, folder_id))
                        >
                            <FallbackImage
                                src=icon_url.clone()
                                alt=""
                                fallback=""
                                layout_class="start-menu-icon"
                            />
                            <span>{folder.title.clone()}</span>
                        </MenuItem>
                    }
                })
                .collect_view()}
        </MenuSurface>
    }
}
