pub(crate) async fn play_audio(url: &str) -> Result<(), String> {
    super::interop::play_audio(url).await
}
