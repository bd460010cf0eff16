//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate owns the image manifest model, the [`ManifestSource`] service trait, the
//! [`ManifestCache`] and its discovery/load pass, the static asset URL layout, and the sound cue
//! contract. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assets;
pub mod host;
pub mod manifest;
pub mod sound;

pub use assets::{AssetLayout, DEFAULT_ASSET_BASE};
pub use host::{HostServices, HostStrategy};
pub use manifest::{
    discover_directories, load_directories, merge_directories, preload_into_cache,
    preload_manifests, DirectoryKey, DirectoryLoadFailure, DirectoryManifest, DiscoveryOutcome,
    ManifestCache, ManifestFetchError, ManifestFuture, ManifestLoadReport, ManifestSource,
    MemoryManifestSource, NoopManifestSource, MANIFEST_FILE_NAME, ROOT_MANIFEST_LABEL,
};
pub use sound::{NoopSoundService, RecordingSoundService, SoundCue, SoundFuture, SoundService};
