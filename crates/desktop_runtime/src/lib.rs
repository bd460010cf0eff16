pub mod about;
pub mod boot;
pub mod catalog;
pub mod components;
mod effect_executor;
pub mod gallery;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use catalog::{CatalogError, FolderId, PortfolioCatalog};
pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::{configured_asset_layout, DesktopHostContext};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, OpenWindowRequest, ReducerError, RuntimeEffect};
