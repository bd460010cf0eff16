use super::*;

fn unsupported() -> String {
    "Browser audio APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_manifest(_url: &str) -> Result<FetchReply<DirectoryManifest>, String> {
    Ok(FetchReply::Unsupported)
}

pub async fn play_audio(_url: &str) -> Result<(), String> {
    Err(unsupported())
}
