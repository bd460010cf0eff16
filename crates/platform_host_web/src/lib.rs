//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Provides the Fetch API manifest source and the HTML audio sound service, plus
//! [`build_host_services`] which picks adapters for the compilation target. Bridge bindings are
//! split by domain under `bridge/`:
//! - `bridge::manifest`
//! - `bridge::audio`
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the service bundle factory.
pub mod adapters;
pub mod audio;
mod bridge;
pub mod manifest;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use audio::WebSoundService;
pub use manifest::WebManifestSource;
