//! Manifest source contract and lightweight adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use super::model::{DirectoryManifest, ManifestFetchError};

/// Object-safe boxed future used by [`ManifestSource`] async methods.
pub type ManifestFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that retrieves one directory manifest.
///
/// `path` is the directory path relative to the image root: `""` for the root manifest,
/// `"category"` or `"category/subcategory"` otherwise.
pub trait ManifestSource {
    /// Fetches and decodes the manifest for `path`.
    fn fetch_manifest<'a>(
        &'a self,
        path: &'a str,
    ) -> ManifestFuture<'a, Result<DirectoryManifest, ManifestFetchError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Manifest source for hosts without network access. Every fetch reports `Unsupported`.
pub struct NoopManifestSource;

impl ManifestSource for NoopManifestSource {
    fn fetch_manifest<'a>(
        &'a self,
        _path: &'a str,
    ) -> ManifestFuture<'a, Result<DirectoryManifest, ManifestFetchError>> {
        Box::pin(async { Err(ManifestFetchError::Unsupported) })
    }
}

type ManifestEntry = Result<DirectoryManifest, ManifestFetchError>;

#[derive(Debug, Clone, Default)]
/// In-memory manifest source keyed by directory path.
///
/// Paths without an entry answer `404 Not Found`. Every request is recorded so callers can
/// assert what was fetched.
pub struct MemoryManifestSource {
    entries: Rc<RefCell<HashMap<String, ManifestEntry>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MemoryManifestSource {
    /// Registers a manifest for `path`.
    pub fn insert(&self, path: impl Into<String>, manifest: DirectoryManifest) {
        self.entries.borrow_mut().insert(path.into(), Ok(manifest));
    }

    /// Registers a raw JSON body for `path`, decoding it the way a network adapter would.
    pub fn insert_json(&self, path: impl Into<String>, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(path.into(), DirectoryManifest::from_json(raw));
    }

    /// Registers a failure for `path`.
    pub fn insert_error(&self, path: impl Into<String>, error: ManifestFetchError) {
        self.entries.borrow_mut().insert(path.into(), Err(error));
    }

    /// Returns every path requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ManifestSource for MemoryManifestSource {
    fn fetch_manifest<'a>(
        &'a self,
        path: &'a str,
    ) -> ManifestFuture<'a, Result<DirectoryManifest, ManifestFetchError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(path.to_string());
            self.entries
                .borrow()
                .get(path)
                .cloned()
                .unwrap_or_else(|| {
                    Err(ManifestFetchError::Status {
                        status: 404,
                        status_text: "Not Found".to_string(),
                    })
                })
        })
    }
}
