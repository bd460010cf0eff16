//! Shared UI primitive library for the portfolio desktop shell.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the shell stylesheet. Desktop components compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopRoot, DesktopWindowLayer, EmptyState, FallbackImage, MenuBar, MenuItem, MenuSeparator,
    MenuSurface, MnemonicLabel, Modal, ProgressBar, ResizeHandle, StatusBar, StatusBarItem, Tab,
    Taskbar, TaskbarButton, TaskbarSection, Thumbnail, ThumbnailGrid, Toast, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
        DesktopRoot, DesktopWindowLayer, EmptyState, FallbackImage, MenuBar, MenuItem,
        MenuSeparator, MenuSurface, MnemonicLabel, Modal, ProgressBar, ResizeHandle, StatusBar,
        StatusBarItem, Tab, Taskbar, TaskbarButton, TaskbarSection, Thumbnail, ThumbnailGrid,
        Toast, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
        WindowTitleBar,
    };
}
