//! HTML audio-backed sound service.

use platform_host::{AssetLayout, SoundCue, SoundFuture, SoundService};

#[derive(Debug, Clone, Default)]
/// Browser sound service playing cue files from the `audio/` asset directory.
///
/// One audio element is kept per cue and rewound before each play.
pub struct WebSoundService {
    assets: AssetLayout,
}

impl WebSoundService {
    /// Creates a service resolving cue URLs through `assets`.
    pub fn new(assets: AssetLayout) -> Self {
        Self { assets }
    }
}

impl SoundService for WebSoundService {
    fn play<'a>(&'a self, cue: SoundCue) -> SoundFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let url = self.assets.audio_url(cue.file_name());
            crate::bridge::play_audio(&url).await
        })
    }
}
