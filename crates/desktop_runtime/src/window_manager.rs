//! Geometry and focus helpers used by the desktop reducer.

use crate::catalog::FolderId;
use crate::model::{DesktopState, PointerPosition, ResizeEdge, Viewport, WindowRect};

/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 150;

/// Places a window of `rect`'s size so the grab point sits under `pointer`, kept inside the work
/// area.
///
/// A window larger than the work area is pinned to the top-left corner.
pub fn drag_rect(
    rect: WindowRect,
    pointer: PointerPosition,
    grab_offset: PointerPosition,
    viewport: Viewport,
) -> WindowRect {
    let max_x = (viewport.width - rect.w).max(0);
    let max_y = (viewport.work_area_height() - rect.h).max(0);
    WindowRect {
        x: (pointer.x - grab_offset.x).clamp(0, max_x),
        y: (pointer.y - grab_offset.y).clamp(0, max_y),
        ..rect
    }
}

/// Applies a resize delta for `edge` to `start`.
///
/// East and south edges grow up to the work area bounds. West and north edges keep the opposite
/// edge fixed and stop at the viewport origin. The result is never smaller than
/// [`MIN_WINDOW_WIDTH`] x [`MIN_WINDOW_HEIGHT`].
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    viewport: Viewport,
) -> WindowRect {
    let mut rect = start;

    if edge.moves_east() {
        let max_w = (viewport.width - start.x).max(MIN_WINDOW_WIDTH);
        rect.w = (start.w + dx).clamp(MIN_WINDOW_WIDTH, max_w);
    }
    if edge.moves_south() {
        let max_h = (viewport.work_area_height() - start.y).max(MIN_WINDOW_HEIGHT);
        rect.h = (start.h + dy).clamp(MIN_WINDOW_HEIGHT, max_h);
    }
    if edge.moves_west() {
        let right = start.x + start.w;
        let w = (start.w - dx).max(MIN_WINDOW_WIDTH);
        rect.x = (right - w).max(0);
        rect.w = (right - rect.x).max(MIN_WINDOW_WIDTH);
    }
    if edge.moves_north() {
        let bottom = start.y + start.h;
        let h = (start.h - dy).max(MIN_WINDOW_HEIGHT);
        rect.y = (bottom - h).max(0);
        rect.h = (bottom - rect.y).max(MIN_WINDOW_HEIGHT);
    }
    rect
}

/// Picks the window to activate after `leaving` closes or minimizes.
///
/// The most recently focused visible window wins (highest z-index); among equal z-indices the one
/// opened last wins.
pub fn next_active_window(state: &DesktopState, leaving: FolderId) -> Option<FolderId> {
    state
        .visible_windows()
        .filter(|w| w.id != leaving)
        .enumerate()
        .max_by_key(|(order, w)| (w.z_index, *order))
        .map(|(_, w)| w.id)
}
