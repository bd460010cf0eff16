//! Static asset URL layout.
//!
//! Images live at `<base>images/<category>[/<subcategory>]/<file>`, manifests beside them as
//! `manifest.json`, and audio cues at `<base>audio/<file>`.

use crate::manifest::{DirectoryKey, MANIFEST_FILE_NAME};

/// Asset base used when no override is configured.
pub const DEFAULT_ASSET_BASE: &str = "/";

const IMAGES_DIR: &str = "images";
const AUDIO_DIR: &str = "audio";

/// Resolves asset URLs against a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    base: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl AssetLayout {
    /// Creates a layout rooted at `base`. A trailing `/` is added when missing.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim();
        let base = if trimmed.is_empty() {
            DEFAULT_ASSET_BASE.to_string()
        } else if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        Self { base }
    }

    /// Normalized base path, always ending in `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of `file` inside the image directory `key`.
    pub fn directory_image_url(&self, key: &DirectoryKey, file: &str) -> String {
        format!("{}{IMAGES_DIR}/{}/{}", self.base, key.path(), file)
    }

    /// URL of an image given relative to the image root, with or without a leading `images/`.
    pub fn image_url(&self, relative: &str) -> String {
        let relative = relative.trim_start_matches('/');
        let relative = relative
            .strip_prefix("images/")
            .unwrap_or(relative);
        format!("{}{IMAGES_DIR}/{relative}", self.base)
    }

    /// URL of the manifest for directory `path`; `""` addresses the root manifest.
    pub fn manifest_url(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            format!("{}{IMAGES_DIR}/{MANIFEST_FILE_NAME}", self.base)
        } else {
            format!("{}{IMAGES_DIR}/{path}/{MANIFEST_FILE_NAME}", self.base)
        }
    }

    /// URL of an audio file.
    pub fn audio_url(&self, file: &str) -> String {
        format!("{}{AUDIO_DIR}/{file}", self.base)
    }
}
