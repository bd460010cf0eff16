use std::rc::Rc;

use leptos::{logging, spawn_local, RwSignal, SignalGetUntracked, SignalUpdate};
use platform_host::{preload_manifests, DirectoryKey, ManifestCache, ManifestSource};

pub(super) fn install_preload(
    source: Rc<dyn ManifestSource>,
    cache: RwSignal<ManifestCache>,
    known: Vec<DirectoryKey>,
) {
    spawn_local(async move {
        let loaded = cache.get_untracked();
        let report = preload_manifests(source.as_ref(), &known, &loaded, |key, files| {
            cache.update(|cache| cache.record(key, files));
        })
        .await;

        for failure in report.discovery_failures.iter().chain(&report.failures) {
            logging::warn!(
                "manifest for `{}` unavailable: {}",
                failure.directory,
                failure.error
            );
        }
        if !report.empty_directories.is_empty() {
            logging::warn!(
                "directories without images: {}",
                report.empty_directories.join(", ")
            );
        }
        logging::log!(
            "manifest preload finished: {} directories",
            report.requested.len()
        );
    });
}
