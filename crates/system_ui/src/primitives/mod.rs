//! Shared shell, navigation, overlay, data-display, and control primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod navigation;
mod overlays;
mod shell;

pub use controls::{Button, ProgressBar};
pub use data_display::{EmptyState, FallbackImage, Thumbnail, ThumbnailGrid};
pub use navigation::{MenuBar, MnemonicLabel, StatusBar, StatusBarItem, Tab};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface, Modal, Toast};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button looks.
pub enum ButtonVariant {
    /// Raised bevelled button.
    #[default]
    Standard,
    /// Flat until hovered or selected.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Number of lit blocks in a segmented progress bar showing `value` of `max`.
pub(crate) fn lit_segments(value: u16, max: u16, segments: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    let clamped = u32::from(value.min(max));
    (clamped * u32::from(segments) / u32::from(max)) as u16
}

/// Splits a label into its first character and the remainder, for mnemonic underlines.
pub(crate) fn split_mnemonic(label: &str) -> (String, String) {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => (first.to_string(), chars.collect()),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_layout_class_appends_non_empty_classes() {
        assert_eq!(merge_layout_class("ui-tab", None), "ui-tab");
        assert_eq!(merge_layout_class("ui-tab", Some("")), "ui-tab");
        assert_eq!(merge_layout_class("ui-tab", Some("wide")), "ui-tab wide");
    }

    #[test]
    fn lit_segments_scale_and_clamp() {
        assert_eq!(lit_segments(0, 100, 20), 0);
        assert_eq!(lit_segments(49, 100, 20), 9);
        assert_eq!(lit_segments(100, 100, 20), 20);
        assert_eq!(lit_segments(140, 100, 20), 20);
        assert_eq!(lit_segments(10, 0, 20), 0);
    }

    #[test]
    fn split_mnemonic_handles_empty_and_multibyte_labels() {
        assert_eq!(
            split_mnemonic("Sketches"),
            ("S".to_string(), "ketches".to_string())
        );
        assert_eq!(split_mnemonic(""), (String::new(), String::new()));
        assert_eq!(split_mnemonic("Élan"), ("É".to_string(), "lan".to_string()));
    }
}
