//! Directory-to-file-list cache populated by the manifest load pass.

use std::collections::BTreeMap;

use super::model::DirectoryKey;

/// Mapping from `category[/subcategory]` to the ordered file names of that directory.
///
/// A directory whose fetch failed is recorded with an empty list. Lookups treat missing and
/// empty entries identically; the recorded entry only stops the directory from being fetched
/// again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestCache {
    entries: BTreeMap<String, Vec<String>>,
}

impl ManifestCache {
    /// Returns the files for `category` and optional `subcategory`, or an empty slice.
    pub fn get(&self, category: &str, subcategory: Option<&str>) -> &[String] {
        self.files(&DirectoryKey::from_parts(category, subcategory))
    }

    /// Returns the files recorded for `key`, or an empty slice.
    pub fn files(&self, key: &DirectoryKey) -> &[String] {
        self.entries
            .get(&key.path())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Records the file list for `key`, preserving order.
    pub fn record(&mut self, key: &DirectoryKey, files: Vec<String>) {
        self.entries.insert(key.path(), files);
    }

    /// Records an empty list for `key` after a failed fetch.
    pub fn record_failure(&mut self, key: &DirectoryKey) {
        self.record(key, Vec::new());
    }

    /// Returns whether a fetch for `key` has already completed, successfully or not.
    pub fn contains(&self, key: &DirectoryKey) -> bool {
        self.entries.contains_key(&key.path())
    }

    /// Filters `directories` down to those with no recorded entry, dropping duplicates.
    pub fn pending(&self, directories: &[DirectoryKey]) -> Vec<DirectoryKey> {
        let mut pending: Vec<DirectoryKey> = Vec::new();
        for key in directories {
            if !self.contains(key) && !pending.contains(key) {
                pending.push(key.clone());
            }
        }
        pending
    }

    /// Number of recorded directories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no directory has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths of recorded directories holding no files.
    pub fn empty_directories(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, files)| files.is_empty())
            .map(|(path, _)| path.clone())
            .collect()
    }
}
