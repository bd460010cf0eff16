//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Organized by host domain (`manifest`, `audio`) over a shared `interop` layer with a wasm
//! implementation and a non-wasm fallback shim.

mod audio;
mod interop;
mod manifest;

use platform_host::DirectoryManifest;

pub use interop::FetchReply;

pub async fn fetch_manifest(url: &str) -> Result<FetchReply<DirectoryManifest>, String> {
    manifest::fetch_manifest(url).await
}

pub async fn play_audio(url: &str) -> Result<(), String> {
    audio::play_audio(url).await
}
