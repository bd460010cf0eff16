use platform_host::DirectoryManifest;

use super::interop::FetchReply;

pub(crate) async fn fetch_manifest(url: &str) -> Result<FetchReply<DirectoryManifest>, String> {
    super::interop::fetch_manifest(url).await
}
