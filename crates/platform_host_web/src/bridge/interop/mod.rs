//! Shared transport interop for browser bridge domains.
//!
//! Routes calls to the target-specific implementation while keeping one API for the domain
//! modules above it.

use platform_host::DirectoryManifest;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Outcome of one HTTP request that reached the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReply<T> {
    /// Success status with a decoded body.
    Body(T),
    /// Non-success status.
    Status { status: u16, status_text: String },
    /// Success status whose body could not be decoded.
    Undecodable(String),
    /// The active target has no fetch transport.
    Unsupported,
}

pub async fn fetch_manifest(url: &str) -> Result<FetchReply<DirectoryManifest>, String> {
    imp::fetch_manifest(url).await
}

pub async fn play_audio(url: &str) -> Result<(), String> {
    imp::play_audio(url).await
}
