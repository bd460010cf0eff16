use std::rc::Rc;

use platform_host::{AssetLayout, HostServices, HostStrategy};

use crate::{WebManifestSource, WebSoundService};

/// Returns the host strategy for the active compilation target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host service bundle for the selected strategy.
pub fn build_host_services(assets: AssetLayout) -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            manifests: Rc::new(WebManifestSource::new(assets.clone())),
            sounds: Rc::new(WebSoundService::new(assets.clone())),
            assets,
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices::headless(assets),
    }
}
