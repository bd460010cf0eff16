use leptos::*;
use platform_host::{DirectoryKey, SoundCue};
use system_ui::{
    EmptyState, FallbackImage, Modal, StatusBar, StatusBarItem, Thumbnail, ThumbnailGrid,
    WindowControlButton,
};

use super::use_desktop_runtime;
use crate::gallery::{
    format_display_name, gallery_entries, item_count_label, selection_label, GalleryEntry,
    GalleryState, EMPTY_FOLDER_MESSAGE, IMAGE_LOAD_FAILED_MESSAGE,
};

#[component]
/// Thumbnail grid for one image directory, with a status bar and a full-size viewer.
pub(super) fn GalleryView(#[prop(into)] directory: Signal<DirectoryKey>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let assets = store_value(runtime.host.get_value().assets().clone());
    let gallery = create_rw_signal(GalleryState::default());

    create_effect(move |previous: Option<DirectoryKey>| {
        let current = directory.get();
        if previous.as_ref().is_some_and(|previous| *previous != current) {
            gallery.update(GalleryState::reset);
        }
        current
    });

    let entries = Signal::derive(move || {
        let key = directory.get();
        runtime
            .manifests
            .with(|cache| gallery_entries(&key, cache.files(&key)))
    });

    let open_image = move |file: String| {
        gallery.update(|state| state.open(&file));
        runtime.host.get_value().play_sound(SoundCue::ImageOpen);
    };
    let close_viewer = Callback::new(move |_: ()| gallery.update(GalleryState::close_viewer));

    view! {
        <div class="gallery-view" data-ui-kind="gallery">
            <Show
                when=move || entries.with(|entries| !entries.is_empty())
                fallback=|| view! { <EmptyState message=EMPTY_FOLDER_MESSAGE/> }
            >
                <ThumbnailGrid>
                    <For
                        each=move || entries.get()
                        key=GalleryEntry::key
                        let:entry
                    >
                        {
                            let src = assets.with_value(|assets| {
                                assets.directory_image_url(&entry.directory, &entry.file)
                            });
                            let caption = format_display_name(&entry.file);
                            let file = entry.file;
                            let selected_file = file.clone();
                            view! {
                                <Thumbnail
                                    src=src
                                    caption=caption
                                    selected=Signal::derive(move || {
                                        gallery.with(|state| state.selected() == Some(selected_file.as_str()))
                                    })
                                    on_click=Callback::new(move |_| open_image(file.clone()))
                                />
                            }
                        }
                    </For>
                </ThumbnailGrid>
                <StatusBar>
                    <StatusBarItem ui_slot="count">
                        {move || entries.with(|entries| item_count_label(entries.len()))}
                    </StatusBarItem>
                    {move || {
                        gallery
                            .with(|state| selection_label(state.selected()))
                            .map(|label| view! { <StatusBarItem ui_slot="selection">{label}</StatusBarItem> })
                    }}
                </StatusBar>
            </Show>

            {move || {
                let file = gallery.with(|state| state.viewing().map(str::to_string))?;
                let src = assets.with_value(|assets| {
                    assets.directory_image_url(&directory.get_untracked(), &file)
                });
                let title = format_display_name(&file);
                Some(view! {
                    <Modal aria_label=title.clone() on_dismiss=close_viewer>
                        <div class="image-viewer">
                            <header class="image-viewer-titlebar">
                                <strong>{title.clone()}</strong>
                                <WindowControlButton
                                    aria_label="Close image"
                                    on_click=Callback::new(move |_| close_viewer.call(()))
                                >
                                    "×"
                                </WindowControlButton>
                            </header>
                            <div class="image-viewer-body">
                                <FallbackImage
                                    src=src
                                    alt=title
                                    fallback=IMAGE_LOAD_FAILED_MESSAGE
                                    layout_class="image-viewer-image"
                                />
                            </div>
                        </div>
                    </Modal>
                })
            }}
        </div>
    }
}
