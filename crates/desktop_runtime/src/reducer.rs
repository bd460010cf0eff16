//! Reducer actions, side-effect intents, and transition logic for the folder window manager.

use platform_host::SoundCue;
use thiserror::Error;

use crate::catalog::{self, FolderId};
use crate::model::{
    DeepLinkState, DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge,
    ResizeSession, Viewport, WindowRecord, WindowRect,
};
use crate::window_manager::{
    drag_rect, next_active_window, resize_rect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to open (or re-activate) a folder window.
pub struct OpenWindowRequest {
    /// Folder to open.
    pub folder: FolderId,
    /// Initial rectangle, used only when the window is not already open.
    pub rect: WindowRect,
    /// Initial sub-tab, used only when the window is not already open.
    pub active_tab: Option<String>,
}

impl OpenWindowRequest {
    /// Builds a request with the folder's catalog geometry and first tab.
    pub fn for_folder(folder: FolderId) -> Self {
        let descriptor = catalog::folder(folder);
        Self {
            folder,
            rect: descriptor.rect,
            active_tab: descriptor.default_tab().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open a folder window, or focus and un-minimize it when already open.
    OpenWindow(OpenWindowRequest),
    /// Raise and activate an open window.
    FocusWindow {
        /// Window to focus.
        window_id: FolderId,
    },
    /// Close an open window.
    CloseWindow {
        /// Window to close.
        window_id: FolderId,
    },
    /// Minimize an open window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: FolderId,
    },
    /// Maximize an open window, or restore it when it is already maximized.
    ToggleMaximizeWindow {
        /// Window to toggle.
        window_id: FolderId,
        /// Current viewport.
        viewport: Viewport,
    },
    /// Switch a window's sub-tab.
    SelectTab {
        /// Window whose tab changes.
        window_id: FolderId,
        /// Tab slug.
        tab: String,
    },
    /// Toggle the start menu.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin a titlebar drag.
    BeginMove {
        /// Window being dragged.
        window_id: FolderId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update the active drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport.
        viewport: Viewport,
    },
    /// End the active drag.
    EndMove,
    /// Begin an edge or corner resize.
    BeginResize {
        /// Window being resized.
        window_id: FolderId,
        /// Grabbed edge.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update the active resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport.
        viewport: Viewport,
    },
    /// End the active resize.
    EndResize,
    /// Open the folders named by a deep link, in order.
    ApplyDeepLink {
        /// Parsed deep link.
        deep_link: DeepLinkState,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Play a sound cue.
    PlaySound(SoundCue),
    /// Report deep-link slugs that matched no folder.
    ReportUnknownFolders(Vec<String>),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer rejections. State is left untouched when one is returned.
pub enum ReducerError {
    /// The action targets a window that is not open.
    #[error("window `{0}` is not open")]
    WindowNotOpen(FolderId),
    /// The tab slug does not belong to the window's folder.
    #[error("folder `{folder}` has no tab `{tab}`")]
    UnknownTab {
        /// Target folder.
        folder: FolderId,
        /// Rejected slug.
        tab: String,
    },
}

/// Applies a [`DesktopAction`] to the window-manager state and collects side effects.
///
/// Operations on a window that is not open are rejected with [`ReducerError::WindowNotOpen`]
/// rather than ignored. `OpenWindow` is total.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a window that is not open or a tab the
/// folder does not have.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            open_window(state, req);
            state.start_menu_open = false;
            effects.push(RuntimeEffect::PlaySound(SoundCue::FolderOpen));
        }
        DesktopAction::FocusWindow { window_id } => {
            ensure_open(state, window_id)?;
            activate(state, window_id);
            state.start_menu_open = false;
        }
        DesktopAction::CloseWindow { window_id } => {
            ensure_open(state, window_id)?;
            state.windows.retain(|w| w.id != window_id);
            interaction.cancel_for(window_id);
            if state.active_window == Some(window_id) {
                reactivate_after(state, window_id);
            }
            effects.push(RuntimeEffect::PlaySound(SoundCue::ButtonClick));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            restore_from_maximized(window);
            window.minimized = true;
            interaction.cancel_for(window_id);
            if state.active_window == Some(window_id) {
                reactivate_after(state, window_id);
            }
            effects.push(RuntimeEffect::PlaySound(SoundCue::ButtonClick));
        }
        DesktopAction::ToggleMaximizeWindow {
            window_id,
            viewport,
        } => {
            ensure_open(state, window_id)?;
            let was_maximized = state.window(window_id).is_some_and(|w| w.maximized);
            for window in &mut state.windows {
                if window.id == window_id {
                    if was_maximized {
                        restore_from_maximized(window);
                    } else {
                        window.restore_rect = Some(window.rect);
                        window.rect = viewport.work_area();
                        window.maximized = true;
                    }
                } else {
                    restore_from_maximized(window);
                }
            }
            interaction.cancel_for(window_id);
            activate(state, window_id);
            effects.push(RuntimeEffect::PlaySound(SoundCue::ButtonClick));
        }
        DesktopAction::SelectTab { window_id, tab } => {
            ensure_open(state, window_id)?;
            if catalog::folder(window_id).tab(&tab).is_none() {
                return Err(ReducerError::UnknownTab {
                    folder: window_id,
                    tab,
                });
            }
            find_window_mut(state, window_id)?.active_tab = Some(tab);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = find_window_mut(state, window_id)?;
            let maximized = window.maximized;
            let origin = window.rect;
            activate(state, window_id);
            if !maximized {
                interaction.dragging = Some(DragSession {
                    window_id,
                    grab_offset: PointerPosition {
                        x: pointer.x - origin.x,
                        y: pointer.y - origin.y,
                    },
                });
            }
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging {
                let Some(window) = state.windows.iter_mut().find(|w| w.id == session.window_id)
                else {
                    interaction.dragging = None;
                    return Err(ReducerError::WindowNotOpen(session.window_id));
                };
                if !window.maximized {
                    window.rect = drag_rect(window.rect, pointer, session.grab_offset, viewport);
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let window = find_window_mut(state, window_id)?;
            let maximized = window.maximized;
            let rect_start = window.rect;
            activate(state, window_id);
            if !maximized {
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateResize { pointer, viewport } => {
            if let Some(session) = interaction.resizing {
                let Some(window) = state.windows.iter_mut().find(|w| w.id == session.window_id)
                else {
                    interaction.resizing = None;
                    return Err(ReducerError::WindowNotOpen(session.window_id));
                };
                if !window.maximized {
                    let dx = pointer.x - session.pointer_start.x;
                    let dy = pointer.y - session.pointer_start.y;
                    window.rect = resize_rect(session.rect_start, session.edge, dx, dy, viewport);
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ApplyDeepLink { deep_link } => {
            for folder in deep_link.open {
                open_window(state, OpenWindowRequest::for_folder(folder));
            }
            state.start_menu_open = false;
            if !deep_link.unknown.is_empty() {
                effects.push(RuntimeEffect::ReportUnknownFolders(deep_link.unknown));
            }
        }
    }
    Ok(effects)
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: FolderId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotOpen(window_id))
}

fn ensure_open(state: &DesktopState, window_id: FolderId) -> Result<(), ReducerError> {
    if state.is_open(window_id) {
        Ok(())
    } else {
        Err(ReducerError::WindowNotOpen(window_id))
    }
}

fn open_window(state: &mut DesktopState, req: OpenWindowRequest) {
    if !state.is_open(req.folder) {
        state.windows.push(WindowRecord {
            id: req.folder,
            rect: req.rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            restore_rect: None,
            z_index: 0,
            minimized: false,
            maximized: false,
            active_tab: req.active_tab,
        });
    }
    activate(state, req.folder);
}

/// Raises `window_id` with a fresh z-index, clears its minimized flag, and makes it active.
fn activate(state: &mut DesktopState, window_id: FolderId) {
    let z_index = state.allocate_z_index();
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.z_index = z_index;
        window.minimized = false;
        state.active_window = Some(window_id);
    }
}

fn reactivate_after(state: &mut DesktopState, leaving: FolderId) {
    match next_active_window(state, leaving) {
        Some(next) => activate(state, next),
        None => state.active_window = None,
    }
}

fn restore_from_maximized(window: &mut WindowRecord) {
    if window.maximized {
        if let Some(rect) = window.restore_rect.take() {
            window.rect = rect;
        }
        window.maximized = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::INITIAL_Z_INDEX;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, folder: FolderId) {
        reduce(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::for_folder(folder)),
        );
    }

    fn z(state: &DesktopState, folder: FolderId) -> u64 {
        state.window(folder).expect("open window").z_index
    }

    fn check_invariants(state: &DesktopState) {
        assert!(state.windows.iter().filter(|w| w.maximized).count() <= 1);
        if let Some(active) = state.active_window {
            let window = state.window(active).expect("active window is open");
            assert!(!window.minimized, "active window is minimized");
        }
        let mut ids: Vec<FolderId> = state.windows.iter().map(|w| w.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.windows.len());
    }

    #[test]
    fn open_uses_catalog_geometry_and_first_tab() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::for_folder(FolderId::TwoDArts)),
        );

        let window = state.window(FolderId::TwoDArts).expect("window");
        assert_eq!(
            window.rect,
            WindowRect {
                x: 100,
                y: 50,
                w: 600,
                h: 400
            }
        );
        assert_eq!(window.active_tab.as_deref(), Some("illustrations"));
        assert_eq!(window.z_index, INITIAL_Z_INDEX + 1);
        assert_eq!(state.active_window, Some(FolderId::TwoDArts));
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::FolderOpen)]);
    }

    #[test]
    fn open_enforces_minimum_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest {
                folder: FolderId::PixelArts,
                rect: WindowRect {
                    x: 0,
                    y: 0,
                    w: 10,
                    h: 10,
                },
                active_tab: None,
            }),
        );
        let rect = state.window(FolderId::PixelArts).expect("window").rect;
        assert_eq!((rect.w, rect.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn reopening_focuses_and_unminimizes_without_moving() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::Tattoos);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTab {
                window_id: FolderId::Tattoos,
                tab: "flashes".to_string(),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: FolderId::Tattoos,
            },
        );
        let before = state.window(FolderId::Tattoos).expect("window").clone();

        open(&mut state, &mut interaction, FolderId::Tattoos);

        let after = state.window(FolderId::Tattoos).expect("window");
        assert_eq!(state.windows.len(), 1);
        assert!(!after.minimized);
        assert_eq!(after.rect, before.rect);
        assert_eq!(after.active_tab.as_deref(), Some("flashes"));
        assert!(after.z_index > before.z_index);
        assert_eq!(state.active_window, Some(FolderId::Tattoos));
    }

    #[test]
    fn z_indices_strictly_increase_across_operations() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let mut last = state.top_z_index;
        let actions = vec![
            DesktopAction::OpenWindow(OpenWindowRequest::for_folder(FolderId::AboutMe)),
            DesktopAction::OpenWindow(OpenWindowRequest::for_folder(FolderId::Animations)),
            DesktopAction::FocusWindow {
                window_id: FolderId::AboutMe,
            },
            DesktopAction::ToggleMaximizeWindow {
                window_id: FolderId::Animations,
                viewport: VIEWPORT,
            },
            DesktopAction::OpenWindow(OpenWindowRequest::for_folder(FolderId::AboutMe)),
        ];
        for action in actions {
            reduce(&mut state, &mut interaction, action);
            assert!(state.top_z_index > last);
            last = state.top_z_index;
            let mut zs: Vec<u64> = state.windows.iter().map(|w| w.z_index).collect();
            zs.sort_unstable();
            zs.dedup();
            assert_eq!(zs.len(), state.windows.len(), "z-indices are unique");
        }
    }

    #[test]
    fn closing_active_window_activates_most_recently_focused_visible_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::TwoDArts);
        open(&mut state, &mut interaction, FolderId::ThreeDWorks);
        open(&mut state, &mut interaction, FolderId::PixelArts);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: FolderId::TwoDArts,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: FolderId::PixelArts,
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: FolderId::PixelArts,
            },
        );

        assert_eq!(state.active_window, Some(FolderId::TwoDArts));
        assert_eq!(z(&state, FolderId::TwoDArts), state.top_z_index);
        check_invariants(&state);
    }

    #[test]
    fn closing_skips_minimized_windows_when_reactivating() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::TwoDArts);
        open(&mut state, &mut interaction, FolderId::ThreeDWorks);
        open(&mut state, &mut interaction, FolderId::PixelArts);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: FolderId::ThreeDWorks,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: FolderId::PixelArts,
            },
        );
        assert_eq!(state.active_window, Some(FolderId::TwoDArts));
    }

    #[test]
    fn closing_only_window_clears_active() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::AboutMe);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: FolderId::AboutMe,
            },
        );
        assert_eq!(state.active_window, None);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_inactive_window_keeps_active() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::AboutMe);
        open(&mut state, &mut interaction, FolderId::Tattoos);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: FolderId::AboutMe,
            },
        );
        assert_eq!(state.active_window, Some(FolderId::Tattoos));
    }

    #[test]
    fn minimizing_only_window_clears_active_but_keeps_it_listed() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::Animations);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: FolderId::Animations,
            },
        );

        assert_eq!(state.active_window, None);
        assert_eq!(state.windows.len(), 1);
        assert!(state.is_minimized(FolderId::Animations));
        assert_eq!(state.visible_windows().count(), 0);
    }

    #[test]
    fn minimize_is_idempotent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::Animations);
        for _ in 0..2 {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::MinimizeWindow {
                    window_id: FolderId::Animations,
                },
            );
        }
        assert!(state.is_minimized(FolderId::Animations));
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn taskbar_scenario_raises_and_activates_clicked_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::TwoDArts);
        let n = z(&state, FolderId::TwoDArts);

        open(&mut state, &mut interaction, FolderId::ThreeDWorks);
        assert_eq!(z(&state, FolderId::ThreeDWorks), n + 1);
        assert_eq!(state.active_window, Some(FolderId::ThreeDWorks));

        open(&mut state, &mut interaction, FolderId::TwoDArts);
        assert_eq!(z(&state, FolderId::TwoDArts), n + 2);
        assert_eq!(state.active_window, Some(FolderId::TwoDArts));
        assert!(state.is_open(FolderId::ThreeDWorks));
    }

    #[test]
    fn window_ids_keep_open_order_and_minimized_entries() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::Tattoos);
        open(&mut state, &mut interaction, FolderId::AboutMe);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: FolderId::Tattoos,
            },
        );
        open(&mut state, &mut interaction, FolderId::PixelArts);

        assert_eq!(
            state.window_ids(),
            vec![FolderId::Tattoos, FolderId::AboutMe, FolderId::PixelArts]
        );
    }

    #[test]
    fn maximize_then_restore_returns_exact_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::ThreeDWorks);
        let before = state.window(FolderId::ThreeDWorks).expect("window").rect;
        let toggle = DesktopAction::ToggleMaximizeWindow {
            window_id: FolderId::ThreeDWorks,
            viewport: VIEWPORT,
        };

        reduce(&mut state, &mut interaction, toggle.clone());
        let maximized = state.window(FolderId::ThreeDWorks).expect("window");
        assert!(maximized.maximized);
        assert_eq!(maximized.rect, VIEWPORT.work_area());

        reduce(&mut state, &mut interaction, toggle);
        let restored = state.window(FolderId::ThreeDWorks).expect("window");
        assert!(!restored.maximized);
        assert_eq!(restored.rect, before);
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn second_maximize_cycle_uses_latest_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::PixelArts);
        let toggle = DesktopAction::ToggleMaximizeWindow {
            window_id: FolderId::PixelArts,
            viewport: VIEWPORT,
        };
        reduce(&mut state, &mut interaction, toggle.clone());
        reduce(&mut state, &mut interaction, toggle.clone());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: FolderId::PixelArts,
                pointer: PointerPosition { x: 210, y: 120 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 310, y: 220 },
                viewport: VIEWPORT,
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndMove);
        let moved = state.window(FolderId::PixelArts).expect("window").rect;

        reduce(&mut state, &mut interaction, toggle.clone());
        reduce(&mut state, &mut interaction, toggle);
        assert_eq!(state.window(FolderId::PixelArts).expect("window").rect, moved);
    }

    #[test]
    fn maximizing_another_window_restores_the_previous_one() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::TwoDArts);
        open(&mut state, &mut interaction, FolderId::Tattoos);
        let two_d_rect = state.window(FolderId::TwoDArts).expect("window").rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow {
                window_id: FolderId::TwoDArts,
                viewport: VIEWPORT,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow {
                window_id: FolderId::Tattoos,
                viewport: VIEWPORT,
            },
        );

        assert_eq!(state.maximized_window(), Some(FolderId::Tattoos));
        let two_d = state.window(FolderId::TwoDArts).expect("window");
        assert!(!two_d.maximized);
        assert_eq!(two_d.rect, two_d_rect);
        check_invariants(&state);
    }

    #[test]
    fn maximize_unminimizes_and_focuses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::AboutMe);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: FolderId::AboutMe,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow {
                window_id: FolderId::AboutMe,
                viewport: VIEWPORT,
            },
        );
        let window = state.window(FolderId::AboutMe).expect("window");
        assert!(window.maximized && !window.minimized);
        assert_eq!(state.active_window, Some(FolderId::AboutMe));
    }

    #[test]
    fn minimizing_maximized_window_restores_rect_and_clears_slot() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::AboutMe);
        let before = state.window(FolderId::AboutMe).expect("window").rect;
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow {
                window_id: FolderId::AboutMe,
                viewport: VIEWPORT,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: FolderId::AboutMe,
            },
        );
        assert_eq!(state.maximized_window(), None);
        assert_eq!(state.window(FolderId::AboutMe).expect("window").rect, before);
    }

    #[test]
    fn operations_on_closed_windows_are_rejected_without_changes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::AboutMe);
        let snapshot = state.clone();

        let rejected = [
            DesktopAction::FocusWindow {
                window_id: FolderId::Tattoos,
            },
            DesktopAction::CloseWindow {
                window_id: FolderId::Tattoos,
            },
            DesktopAction::MinimizeWindow {
                window_id: FolderId::Tattoos,
            },
            DesktopAction::ToggleMaximizeWindow {
                window_id: FolderId::Tattoos,
                viewport: VIEWPORT,
            },
            DesktopAction::SelectTab {
                window_id: FolderId::Tattoos,
                tab: "flashes".to_string(),
            },
            DesktopAction::BeginMove {
                window_id: FolderId::Tattoos,
                pointer: PointerPosition { x: 0, y: 0 },
            },
            DesktopAction::BeginResize {
                window_id: FolderId::Tattoos,
                edge: ResizeEdge::East,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        ];
        for action in rejected {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::WindowNotOpen(FolderId::Tattoos))
            );
        }
        assert_eq!(state, snapshot);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn select_tab_rejects_unknown_slug() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::TwoDArts);
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTab {
                window_id: FolderId::TwoDArts,
                tab: "Character/Concept Designs".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ReducerError::UnknownTab { .. }));
        assert_eq!(
            state
                .window(FolderId::TwoDArts)
                .and_then(|w| w.active_tab.as_deref()),
            Some("illustrations")
        );
    }

    #[test]
    fn drag_moves_window_and_clamps_to_work_area() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::TwoDArts);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: FolderId::TwoDArts,
                pointer: PointerPosition { x: 110, y: 60 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 160, y: 90 },
                viewport: VIEWPORT,
            },
        );
        assert_eq!(
            state.window(FolderId::TwoDArts).expect("window").rect,
            WindowRect {
                x: 150,
                y: 80,
                w: 600,
                h: 400
            }
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 5000, y: 5000 },
                viewport: VIEWPORT,
            },
        );
        let rect = state.window(FolderId::TwoDArts).expect("window").rect;
        assert_eq!((rect.x, rect.y), (680, 360));
        assert!(rect.y + rect.h <= VIEWPORT.work_area_height());

        reduce(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn gestures_are_disabled_while_maximized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::Animations);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow {
                window_id: FolderId::Animations,
                viewport: VIEWPORT,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: FolderId::Animations,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: FolderId::Animations,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(interaction, InteractionState::default());
        assert_eq!(
            state.window(FolderId::Animations).expect("window").rect,
            VIEWPORT.work_area()
        );
    }

    #[test]
    fn resize_applies_edge_delta_with_minimums() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::PixelArts);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: FolderId::PixelArts,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 660, y: 450 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 700, y: 480 },
                viewport: VIEWPORT,
            },
        );
        assert_eq!(
            state.window(FolderId::PixelArts).expect("window").rect,
            WindowRect {
                x: 200,
                y: 110,
                w: 500,
                h: 370
            }
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 0, y: 0 },
                viewport: VIEWPORT,
            },
        );
        let rect = state.window(FolderId::PixelArts).expect("window").rect;
        assert_eq!((rect.w, rect.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        reduce(&mut state, &mut interaction, DesktopAction::EndResize);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn closing_a_window_mid_drag_cancels_the_gesture() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, FolderId::Tattoos);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: FolderId::Tattoos,
                pointer: PointerPosition { x: 310, y: 180 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: FolderId::Tattoos,
            },
        );
        assert_eq!(interaction.dragging, None);
        assert!(reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 0, y: 0 },
                viewport: VIEWPORT,
            },
        )
        .is_ok());
    }

    #[test]
    fn start_menu_toggles_and_closes_on_open() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        open(&mut state, &mut interaction, FolderId::AboutMe);
        assert!(!state.start_menu_open);
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        reduce(&mut state, &mut interaction, DesktopAction::CloseStartMenu);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn deep_link_opens_folders_in_order_and_reports_unknown_slugs() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyDeepLink {
                deep_link: DeepLinkState::parse("3d-works,bogus,about-me"),
            },
        );
        let ids: Vec<FolderId> = state.windows.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![FolderId::ThreeDWorks, FolderId::AboutMe]);
        assert_eq!(state.active_window, Some(FolderId::AboutMe));
        assert_eq!(
            effects,
            vec![RuntimeEffect::ReportUnknownFolders(vec!["bogus".to_string()])]
        );
    }

    #[test]
    fn scripted_session_preserves_invariants() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let folders = FolderId::ALL;
        for step in 0..120usize {
            let folder = folders[(step * 7 + step / 3) % folders.len()];
            let action = match step % 6 {
                0 | 1 => DesktopAction::OpenWindow(OpenWindowRequest::for_folder(folder)),
                2 => DesktopAction::MinimizeWindow { window_id: folder },
                3 => DesktopAction::ToggleMaximizeWindow {
                    window_id: folder,
                    viewport: VIEWPORT,
                },
                4 => DesktopAction::FocusWindow { window_id: folder },
                _ => DesktopAction::CloseWindow { window_id: folder },
            };
            let _ = reduce_desktop(&mut state, &mut interaction, action);
            check_invariants(&state);
        }
    }
}
