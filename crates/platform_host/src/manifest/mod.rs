//! Image manifest contracts: document model, source service, cache, and load pass.

mod cache;
mod loader;
mod model;
mod source;

pub use cache::ManifestCache;
pub use loader::{
    discover_directories, load_directories, merge_directories, preload_into_cache,
    preload_manifests, DirectoryLoadFailure, DiscoveryOutcome, ManifestLoadReport,
    ROOT_MANIFEST_LABEL,
};
pub use model::{DirectoryKey, DirectoryManifest, ManifestFetchError, MANIFEST_FILE_NAME};
pub use source::{ManifestFuture, ManifestSource, MemoryManifestSource, NoopManifestSource};
