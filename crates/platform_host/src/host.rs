//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{AssetLayout, ManifestSource, NoopManifestSource, NoopSoundService, SoundService};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser composition backed by Fetch and HTML audio.
    Browser,
    /// Composition with no-op adapters, used off-browser and in tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host services.
///
/// Environment-specific adapter selection happens before this bundle reaches
/// `desktop_runtime`, which only sees the trait objects.
#[derive(Clone)]
pub struct HostServices {
    /// Directory manifest source.
    pub manifests: Rc<dyn ManifestSource>,
    /// Sound cue playback.
    pub sounds: Rc<dyn SoundService>,
    /// URL layout for images, manifests, and audio.
    pub assets: AssetLayout,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters.
    pub fn headless(assets: AssetLayout) -> Self {
        Self {
            manifests: Rc::new(NoopManifestSource),
            sounds: Rc::new(NoopSoundService),
            assets,
            host_strategy: HostStrategy::Headless,
        }
    }
}
