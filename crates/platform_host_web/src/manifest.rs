//! Fetch API-backed manifest source.

use platform_host::{
    AssetLayout, DirectoryManifest, ManifestFetchError, ManifestFuture, ManifestSource,
};

use crate::bridge::FetchReply;

#[derive(Debug, Clone, Default)]
/// Browser manifest source that requests `manifest.json` files relative to the asset base.
pub struct WebManifestSource {
    assets: AssetLayout,
}

impl WebManifestSource {
    /// Creates a source resolving manifest URLs through `assets`.
    pub fn new(assets: AssetLayout) -> Self {
        Self { assets }
    }
}

impl ManifestSource for WebManifestSource {
    fn fetch_manifest<'a>(
        &'a self,
        path: &'a str,
    ) -> ManifestFuture<'a, Result<DirectoryManifest, ManifestFetchError>> {
        Box::pin(async move {
            let url = self.assets.manifest_url(path);
            let reply = crate::bridge::fetch_manifest(&url)
                .await
                .map_err(ManifestFetchError::Network)?;
            reply_into_manifest(reply)
        })
    }
}

fn reply_into_manifest(
    reply: FetchReply<DirectoryManifest>,
) -> Result<DirectoryManifest, ManifestFetchError> {
    match reply {
        FetchReply::Body(manifest) => Ok(manifest),
        FetchReply::Status {
            status,
            status_text,
        } => Err(ManifestFetchError::Status {
            status,
            status_text,
        }),
        FetchReply::Undecodable(message) => Err(ManifestFetchError::Malformed(message)),
        FetchReply::Unsupported => Err(ManifestFetchError::Unsupported),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn fetch_replies_map_onto_manifest_errors() {
        assert_eq!(
            reply_into_manifest(FetchReply::Status {
                status: 404,
                status_text: "Not Found".to_string()
            }),
            Err(ManifestFetchError::Status {
                status: 404,
                status_text: "Not Found".to_string()
            })
        );
        assert_eq!(
            reply_into_manifest(FetchReply::Undecodable("bad".to_string())),
            Err(ManifestFetchError::Malformed("bad".to_string()))
        );
        assert_eq!(
            reply_into_manifest(FetchReply::Body(DirectoryManifest::with_files(["a.png"]))),
            Ok(DirectoryManifest::with_files(["a.png"]))
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_builds_report_unsupported() {
        let source = WebManifestSource::new(AssetLayout::default());
        assert_eq!(
            block_on(source.fetch_manifest("icons")),
            Err(ManifestFetchError::Unsupported)
        );
    }
}
