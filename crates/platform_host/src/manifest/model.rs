//! Manifest document model and directory keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the per-directory manifest document.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Identifies one image directory as `category` or `category/subcategory`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectoryKey {
    /// Top-level directory under the image root.
    pub category: String,
    /// Optional nested directory under `category`.
    pub subcategory: Option<String>,
}

impl DirectoryKey {
    /// Creates a key for a top-level category directory.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
        }
    }

    /// Creates a key for a nested `category/subcategory` directory.
    pub fn nested(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: Some(subcategory.into()),
        }
    }

    /// Builds a key from lookup parts, treating an empty subcategory as absent.
    pub fn from_parts(category: &str, subcategory: Option<&str>) -> Self {
        match subcategory.map(str::trim).filter(|sub| !sub.is_empty()) {
            Some(sub) => Self::nested(category, sub),
            None => Self::category(category),
        }
    }

    /// Returns the cache key and relative directory path (`category[/subcategory]`).
    pub fn path(&self) -> String {
        match &self.subcategory {
            Some(sub) => format!("{}/{}", self.category, sub),
            None => self.category.clone(),
        }
    }
}

impl fmt::Display for DirectoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subcategory {
            Some(sub) => write!(f, "{}/{}", self.category, sub),
            None => f.write_str(&self.category),
        }
    }
}

/// Parsed `manifest.json` document.
///
/// Only `files` and `subdirectories` are consumed. The root manifest carries extra descriptive
/// fields which are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryManifest {
    /// Ordered file names present in the directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Child directory names available for discovery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectories: Option<Vec<String>>,
}

impl DirectoryManifest {
    /// Creates a manifest listing only `files`.
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: Some(files.into_iter().map(Into::into).collect()),
            subdirectories: None,
        }
    }

    /// Adds a `subdirectories` listing.
    pub fn and_subdirectories<I, S>(mut self, subdirectories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirectories = Some(subdirectories.into_iter().map(Into::into).collect());
        self
    }

    /// Parses a manifest body.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestFetchError::Malformed`] when the body is not a manifest object.
    pub fn from_json(raw: &str) -> Result<Self, ManifestFetchError> {
        serde_json::from_str(raw).map_err(|err| ManifestFetchError::Malformed(err.to_string()))
    }

    /// Returns the listed files or an error when the manifest has no `files` array.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestFetchError::MissingFiles`] when `files` is absent.
    pub fn into_files(self) -> Result<Vec<String>, ManifestFetchError> {
        self.files.ok_or(ManifestFetchError::MissingFiles)
    }
}

/// Failure while fetching or decoding one manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestFetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status} {status_text}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Status line text reported by the server.
        status_text: String,
    },
    /// The body was not a valid manifest document.
    #[error("malformed manifest: {0}")]
    Malformed(String),
    /// The manifest parsed but has no `files` array.
    #[error("manifest has no files array")]
    MissingFiles,
    /// The active host has no way to fetch manifests.
    #[error("manifest fetching is not supported on this host")]
    Unsupported,
}
