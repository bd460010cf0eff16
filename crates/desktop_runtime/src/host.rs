//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Effects leave the reducer as [`RuntimeEffect`] values and reach the injected
//! [`HostServices`] adapters here. Failures are logged and never surfaced to the visitor.

mod manifests;
mod viewport;

use leptos::{logging, spawn_local, RwSignal};
use platform_host::{
    AssetLayout, DirectoryKey, HostServices, ManifestCache, SoundCue, DEFAULT_ASSET_BASE,
};

use crate::{model::Viewport, reducer::RuntimeEffect};

/// Asset base path baked in at compile time through `PORTFOLIO_ASSET_BASE`.
pub const ASSET_BASE: &str = match option_env!("PORTFOLIO_ASSET_BASE") {
    Some(base) => base,
    None => DEFAULT_ASSET_BASE,
};

/// Asset layout rooted at [`ASSET_BASE`].
pub fn configured_asset_layout() -> AssetLayout {
    AssetLayout::new(ASSET_BASE)
}

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the injected host services.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the asset URL layout.
    pub fn assets(&self) -> &AssetLayout {
        &self.services.assets
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Plays a sound cue in the background. Failures are logged.
    pub fn play_sound(&self, cue: SoundCue) {
        self.run_runtime_effect(RuntimeEffect::PlaySound(cue));
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer in the background.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        let host = self.clone();
        spawn_local(async move { host.execute_runtime_effect(effect).await });
    }

    /// Executes `effect` to completion. Playback failures are logged, never returned.
    pub async fn execute_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(cue) => {
                if let Err(err) = self.services.sounds.play(cue).await {
                    logging::warn!("sound `{}` failed: {err}", cue.file_name());
                }
            }
            RuntimeEffect::ReportUnknownFolders(slugs) => {
                logging::warn!("deep link ignored unknown folders: {}", slugs.join(", "));
            }
        }
    }

    /// Returns the current browser viewport, or [`Viewport::FALLBACK`] off-browser.
    pub fn viewport(&self) -> Viewport {
        viewport::measure()
    }

    /// Starts the one-shot manifest preload pass, recording each directory into `cache` as its
    /// fetch settles.
    pub fn install_manifest_preload(&self, cache: RwSignal<ManifestCache>, known: Vec<DirectoryKey>) {
        manifests::install_preload(self.services.manifests.clone(), cache, known);
    }
}
