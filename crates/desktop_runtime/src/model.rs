//! Core desktop runtime state types.

use serde::{Deserialize, Serialize};

use crate::catalog::FolderId;

/// Height of the taskbar strip reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT: i32 = 40;
/// First z-index handed out by the allocator is one above this value.
pub const INITIAL_Z_INDEX: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window rectangle in viewport pixels.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rectangle grown to at least `min_w` x `min_h`.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// Inline CSS placing an element at this rectangle.
    pub fn css(self, z_index: u64) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.x, self.y, self.w, self.h, z_index
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Browser viewport size in pixels, taskbar included.
pub struct Viewport {
    /// Viewport width.
    pub width: i32,
    /// Viewport height.
    pub height: i32,
}

impl Viewport {
    /// Viewport used when the browser window cannot be measured.
    pub const FALLBACK: Self = Self {
        width: 1024,
        height: 768,
    };

    /// Height available to windows above the taskbar.
    pub fn work_area_height(self) -> i32 {
        (self.height - TASKBAR_HEIGHT).max(0)
    }

    /// Rectangle covering the whole work area.
    pub fn work_area(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width,
            h: self.work_area_height(),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// State of one open folder window.
pub struct WindowRecord {
    /// Folder shown in the window. One window per folder.
    pub id: FolderId,
    /// Current rectangle.
    pub rect: WindowRect,
    /// Rectangle captured by the most recent maximize.
    pub restore_rect: Option<WindowRect>,
    /// Paint order; higher is on top.
    pub z_index: u64,
    /// Hidden but still listed in the taskbar.
    pub minimized: bool,
    /// Covering the work area.
    pub maximized: bool,
    /// Selected sub-tab slug, if the folder has tabs.
    pub active_tab: Option<String>,
}

impl WindowRecord {
    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authoritative window-manager state.
pub struct DesktopState {
    /// Open windows in the order they were opened.
    pub windows: Vec<WindowRecord>,
    /// Last z-index handed out.
    pub top_z_index: u64,
    /// Focused window, if any.
    pub active_window: Option<FolderId>,
    /// Whether the start menu is showing.
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            top_z_index: INITIAL_Z_INDEX,
            active_window: None,
            start_menu_open: false,
        }
    }
}

impl DesktopState {
    /// Returns the record for `id` when that window is open.
    pub fn window(&self, id: FolderId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Returns whether `id` is open, minimized or not.
    pub fn is_open(&self, id: FolderId) -> bool {
        self.window(id).is_some()
    }

    /// Returns whether `id` is open and minimized.
    pub fn is_minimized(&self, id: FolderId) -> bool {
        self.window(id).is_some_and(|w| w.minimized)
    }

    /// The maximized window, if any.
    pub fn maximized_window(&self) -> Option<FolderId> {
        self.windows.iter().find(|w| w.maximized).map(|w| w.id)
    }

    /// Ids of every open window, minimized ones included, in open order.
    pub fn window_ids(&self) -> Vec<FolderId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    /// Open, non-minimized windows in open order.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Hands out the next z-index.
    pub(crate) fn allocate_z_index(&mut self) -> u64 {
        self.top_z_index = self.top_z_index.saturating_add(1);
        self.top_z_index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer coordinates in viewport pixels.
pub struct PointerPosition {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Window edge or corner grabbed by a resize gesture.
pub enum ResizeEdge {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

impl ResizeEdge {
    /// Every edge, in handle render order.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Compass token used as the handle slot name.
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    /// Whether the gesture moves the top edge.
    pub const fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    /// Whether the gesture moves the bottom edge.
    pub const fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// Whether the gesture moves the right edge.
    pub const fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// Whether the gesture moves the left edge.
    pub const fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// In-progress titlebar drag.
pub struct DragSession {
    /// Window being moved.
    pub window_id: FolderId,
    /// Pointer position relative to the window origin at drag start.
    pub grab_offset: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// In-progress edge or corner resize.
pub struct ResizeSession {
    /// Window being resized.
    pub window_id: FolderId,
    /// Grabbed edge.
    pub edge: ResizeEdge,
    /// Pointer position at resize start.
    pub pointer_start: PointerPosition,
    /// Window rectangle at resize start.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient pointer-gesture state kept beside [`DesktopState`].
pub struct InteractionState {
    /// Active drag, if any.
    pub dragging: Option<DragSession>,
    /// Active resize, if any.
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// Drops any gesture targeting `id`.
    pub fn cancel_for(&mut self, id: FolderId) {
        if self.dragging.is_some_and(|s| s.window_id == id) {
            self.dragging = None;
        }
        if self.resizing.is_some_and(|s| s.window_id == id) {
            self.resizing = None;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Folders requested through the `open` query parameter.
pub struct DeepLinkState {
    /// Recognized folders in request order, without duplicates.
    pub open: Vec<FolderId>,
    /// Slugs that matched no folder.
    pub unknown: Vec<String>,
}

impl DeepLinkState {
    /// Parses a comma-separated list of folder slugs.
    pub fn parse(raw: &str) -> Self {
        let mut state = Self::default();
        for slug in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match FolderId::from_slug(slug) {
                Some(id) if !state.open.contains(&id) => state.open.push(id),
                Some(_) => {}
                None => state.unknown.push(slug.to_string()),
            }
        }
        state
    }

    /// Whether nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.unknown.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deep_link_parse_keeps_order_and_reports_unknown_slugs() {
        let link = DeepLinkState::parse("tattoos, 2d-arts,,nope,tattoos");
        assert_eq!(link.open, vec![FolderId::Tattoos, FolderId::TwoDArts]);
        assert_eq!(link.unknown, vec!["nope".to_string()]);
        assert!(DeepLinkState::parse(" ").is_empty());
    }

    #[test]
    fn viewport_work_area_excludes_taskbar() {
        let viewport = Viewport {
            width: 800,
            height: 600,
        };
        assert_eq!(
            viewport.work_area(),
            WindowRect {
                x: 0,
                y: 0,
                w: 800,
                h: 560
            }
        );
    }

    #[test]
    fn window_rect_css_includes_z_index() {
        let rect = WindowRect {
            x: 1,
            y: 2,
            w: 300,
            h: 200,
        };
        assert_eq!(
            rect.css(11),
            "left:1px;top:2px;width:300px;height:200px;z-index:11;"
        );
    }
}
