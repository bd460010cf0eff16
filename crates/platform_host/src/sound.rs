//! Sound cue contract.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`SoundService`] async methods.
pub type SoundFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Short audio cues played by the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// End of the BIOS script.
    Boot,
    /// User tile selected on the login screen.
    Login,
    /// Welcome notification shown.
    Notification,
    /// Folder window opened.
    FolderOpen,
    /// Generic button press.
    ButtonClick,
    /// Image viewer opened.
    ImageOpen,
}

impl SoundCue {
    /// Audio file name under the `audio/` asset directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Boot => "windows-95-startup.mp3",
            Self::Login => "windows-xp-login.mp3",
            Self::Notification => "notification.mp3",
            Self::FolderOpen => "folder-open.mp3",
            Self::ButtonClick => "button-click.mp3",
            Self::ImageOpen => "image-open.mp3",
        }
    }
}

/// Host service that plays sound cues.
pub trait SoundService {
    /// Starts playback of `cue` from the beginning.
    fn play<'a>(&'a self, cue: SoundCue) -> SoundFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent sound adapter.
pub struct NoopSoundService;

impl SoundService for NoopSoundService {
    fn play<'a>(&'a self, _cue: SoundCue) -> SoundFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Sound adapter that records requested cues instead of playing them.
pub struct RecordingSoundService {
    played: Rc<RefCell<Vec<SoundCue>>>,
}

impl RecordingSoundService {
    /// Cues requested so far, in order.
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.borrow().clone()
    }
}

impl SoundService for RecordingSoundService {
    fn play<'a>(&'a self, cue: SoundCue) -> SoundFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.played.borrow_mut().push(cue);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn recording_service_keeps_cue_order() {
        let sounds = RecordingSoundService::default();
        let sounds_obj: &dyn SoundService = &sounds;
        block_on(sounds_obj.play(SoundCue::FolderOpen)).expect("play");
        block_on(sounds_obj.play(SoundCue::ImageOpen)).expect("play");
        assert_eq!(
            sounds.played(),
            vec![SoundCue::FolderOpen, SoundCue::ImageOpen]
        );
    }

    #[test]
    fn noop_service_succeeds() {
        block_on(NoopSoundService.play(SoundCue::Boot)).expect("play");
        assert_eq!(SoundCue::Notification.file_name(), "notification.mp3");
    }
}
