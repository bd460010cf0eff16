//! Discovery and bulk load pass over directory manifests.

use futures::{
    future::join_all,
    stream::{FuturesUnordered, StreamExt},
};

use super::{
    cache::ManifestCache,
    model::{DirectoryKey, ManifestFetchError},
    source::ManifestSource,
};

/// Display label used for the root manifest in failure reports.
pub const ROOT_MANIFEST_LABEL: &str = "<root>";

/// One directory whose manifest could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLoadFailure {
    /// Directory path, or [`ROOT_MANIFEST_LABEL`] for the root manifest.
    pub directory: String,
    /// Cause of the failure.
    pub error: ManifestFetchError,
}

impl DirectoryLoadFailure {
    fn new(directory: impl Into<String>, error: ManifestFetchError) -> Self {
        Self {
            directory: directory.into(),
            error,
        }
    }
}

/// Directories found by walking the root and category manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOutcome {
    /// Discovered directories in root-listing order.
    pub directories: Vec<DirectoryKey>,
    /// Manifests that could not be read during discovery.
    pub failures: Vec<DirectoryLoadFailure>,
}

/// Summary of one preload pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestLoadReport {
    /// Directories fetched by the bulk pass.
    pub requested: Vec<DirectoryKey>,
    /// Failures from discovery.
    pub discovery_failures: Vec<DirectoryLoadFailure>,
    /// Failures from the bulk pass. Each of these directories was recorded as empty.
    pub failures: Vec<DirectoryLoadFailure>,
    /// Directories that finished with no files, failed or not.
    pub empty_directories: Vec<String>,
}

/// Walks the root manifest and each listed category manifest.
///
/// A category contributes one key per listed subdirectory, plus its own key when its manifest
/// lists `files`. A root manifest without `subdirectories` discovers nothing. Category manifests
/// are fetched concurrently and one failure does not stop the others.
pub async fn discover_directories<S: ManifestSource + ?Sized>(source: &S) -> DiscoveryOutcome {
    let mut outcome = DiscoveryOutcome::default();
    let root = match source.fetch_manifest("").await {
        Ok(root) => root,
        Err(error) => {
            outcome
                .failures
                .push(DirectoryLoadFailure::new(ROOT_MANIFEST_LABEL, error));
            return outcome;
        }
    };
    let Some(categories) = root.subdirectories else {
        return outcome;
    };

    let category_manifests = join_all(
        categories
            .iter()
            .map(|category| source.fetch_manifest(category.as_str())),
    )
    .await;

    for (category, result) in categories.iter().zip(category_manifests) {
        match result {
            Ok(manifest) => {
                for sub in manifest.subdirectories.iter().flatten() {
                    push_unique(
                        &mut outcome.directories,
                        DirectoryKey::nested(category.as_str(), sub.as_str()),
                    );
                }
                if manifest.files.is_some() {
                    push_unique(
                        &mut outcome.directories,
                        DirectoryKey::category(category.as_str()),
                    );
                }
            }
            Err(error) => outcome
                .failures
                .push(DirectoryLoadFailure::new(category.as_str(), error)),
        }
    }
    outcome
}

/// Concatenates `known` and `discovered`, keeping the first occurrence of each directory.
pub fn merge_directories(known: &[DirectoryKey], discovered: &[DirectoryKey]) -> Vec<DirectoryKey> {
    let mut merged = Vec::with_capacity(known.len() + discovered.len());
    for key in known.iter().chain(discovered) {
        push_unique(&mut merged, key.clone());
    }
    merged
}

/// Fetches every directory manifest concurrently.
///
/// `on_loaded` runs once per directory as its fetch settles, in completion order. Failed or
/// file-less manifests are reported with an empty list and collected into the returned failures.
pub async fn load_directories<S, F>(
    source: &S,
    directories: &[DirectoryKey],
    mut on_loaded: F,
) -> Vec<DirectoryLoadFailure>
where
    S: ManifestSource + ?Sized,
    F: FnMut(&DirectoryKey, Vec<String>),
{
    let mut in_flight: FuturesUnordered<_> = directories
        .iter()
        .map(|key| async move {
            let path = key.path();
            let result = source
                .fetch_manifest(&path)
                .await
                .and_then(|manifest| manifest.into_files());
            (key, result)
        })
        .collect();

    let mut failures = Vec::new();
    while let Some((key, result)) = in_flight.next().await {
        match result {
            Ok(files) => on_loaded(key, files),
            Err(error) => {
                failures.push(DirectoryLoadFailure::new(key.path(), error));
                on_loaded(key, Vec::new());
            }
        }
    }
    failures
}

/// Runs discovery, then loads every known or discovered directory not yet in `loaded`.
///
/// Discovery always completes before the bulk pass starts so discovered directories join the
/// same load set.
pub async fn preload_manifests<S, F>(
    source: &S,
    known: &[DirectoryKey],
    loaded: &ManifestCache,
    mut on_loaded: F,
) -> ManifestLoadReport
where
    S: ManifestSource + ?Sized,
    F: FnMut(&DirectoryKey, Vec<String>),
{
    let discovery = discover_directories(source).await;
    let requested = loaded.pending(&merge_directories(known, &discovery.directories));

    let mut empty_directories = Vec::new();
    let failures = load_directories(source, &requested, |key, files| {
        if files.is_empty() {
            empty_directories.push(key.path());
        }
        on_loaded(key, files);
    })
    .await;
    empty_directories.sort();

    ManifestLoadReport {
        requested,
        discovery_failures: discovery.failures,
        failures,
        empty_directories,
    }
}

/// Runs [`preload_manifests`] and records every result into `cache`.
pub async fn preload_into_cache<S: ManifestSource + ?Sized>(
    source: &S,
    known: &[DirectoryKey],
    cache: &mut ManifestCache,
) -> ManifestLoadReport {
    let mut results = Vec::new();
    let report = preload_manifests(source, known, cache, |key, files| {
        results.push((key.clone(), files));
    })
    .await;
    for (key, files) in results {
        cache.record(&key, files);
    }
    report
}

fn push_unique(keys: &mut Vec<DirectoryKey>, key: DirectoryKey) {
    if !keys.contains(&key) {
        keys.push(key);
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::manifest::{model::DirectoryManifest, source::MemoryManifestSource};

    fn known() -> Vec<DirectoryKey> {
        vec![
            DirectoryKey::nested("2d-arts", "sketches"),
            DirectoryKey::nested("3d-works", "renders"),
            DirectoryKey::category("pixel-arts"),
        ]
    }

    #[test]
    fn preload_records_files_in_manifest_order() {
        let source = MemoryManifestSource::default();
        source.insert_json("2d-arts/sketches", r#"{"files":["b.png","a.png"]}"#);
        source.insert("pixel-arts", DirectoryManifest::with_files(["cat.gif"]));

        let mut cache = ManifestCache::default();
        let report = block_on(preload_into_cache(&source, &known(), &mut cache));

        assert_eq!(
            cache.get("2d-arts", Some("sketches")),
            ["b.png".to_string(), "a.png".to_string()]
        );
        assert_eq!(cache.get("pixel-arts", None), ["cat.gif".to_string()]);
        assert!(cache.get("3d-works", Some("renders")).is_empty());
        assert!(cache.contains(&DirectoryKey::nested("3d-works", "renders")));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].directory, "3d-works/renders");
        assert_eq!(report.empty_directories, vec!["3d-works/renders".to_string()]);
    }

    #[test]
    fn one_failure_does_not_abort_other_directories() {
        let source = MemoryManifestSource::default();
        source.insert_error(
            "2d-arts/sketches",
            ManifestFetchError::Network("offline".to_string()),
        );
        source.insert_json("3d-works/renders", "{broken");
        source.insert("pixel-arts", DirectoryManifest::with_files(["cat.gif"]));

        let mut cache = ManifestCache::default();
        let report = block_on(preload_into_cache(&source, &known(), &mut cache));

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("pixel-arts", None), ["cat.gif".to_string()]);
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn manifest_without_files_array_is_recorded_empty() {
        let source = MemoryManifestSource::default();
        source.insert_json("pixel-arts", r#"{"subdirectories":["old"]}"#);
        let mut cache = ManifestCache::default();
        let report = block_on(preload_into_cache(
            &source,
            &[DirectoryKey::category("pixel-arts")],
            &mut cache,
        ));
        assert!(cache.contains(&DirectoryKey::category("pixel-arts")));
        assert_eq!(report.failures[0].error, ManifestFetchError::MissingFiles);
    }

    #[test]
    fn discovery_walks_root_and_category_manifests() {
        let source = MemoryManifestSource::default();
        source.insert(
            "",
            DirectoryManifest::default().and_subdirectories(["tattoos", "icons", "ghost"]),
        );
        source.insert(
            "tattoos",
            DirectoryManifest::default().and_subdirectories(["flashes", "fake-skin"]),
        );
        source.insert("icons", DirectoryManifest::with_files(["lily_icon.png"]));

        let outcome = block_on(discover_directories(&source));
        assert_eq!(
            outcome.directories,
            vec![
                DirectoryKey::nested("tattoos", "flashes"),
                DirectoryKey::nested("tattoos", "fake-skin"),
                DirectoryKey::category("icons"),
            ]
        );
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].directory, "ghost");
    }

    #[test]
    fn root_without_subdirectories_discovers_nothing() {
        let source = MemoryManifestSource::default();
        source.insert_json("", r#"{"description":"Image manifest root"}"#);
        let outcome = block_on(discover_directories(&source));
        assert_eq!(outcome, DiscoveryOutcome::default());
    }

    #[test]
    fn missing_root_falls_back_to_known_directories() {
        let source = MemoryManifestSource::default();
        source.insert("pixel-arts", DirectoryManifest::with_files(["cat.gif"]));
        let mut cache = ManifestCache::default();
        let report = block_on(preload_into_cache(&source, &known(), &mut cache));

        assert_eq!(report.discovery_failures[0].directory, ROOT_MANIFEST_LABEL);
        assert_eq!(report.requested, known());
    }

    #[test]
    fn discovered_directories_join_the_load_set_without_duplicates() {
        let source = MemoryManifestSource::default();
        source.insert("", DirectoryManifest::default().and_subdirectories(["2d-arts"]));
        source.insert(
            "2d-arts",
            DirectoryManifest::default().and_subdirectories(["sketches", "traditional"]),
        );
        source.insert(
            "2d-arts/traditional",
            DirectoryManifest::with_files(["ink.jpg"]),
        );

        let mut cache = ManifestCache::default();
        let report = block_on(preload_into_cache(&source, &known(), &mut cache));

        assert_eq!(
            report.requested,
            vec![
                DirectoryKey::nested("2d-arts", "sketches"),
                DirectoryKey::nested("3d-works", "renders"),
                DirectoryKey::category("pixel-arts"),
                DirectoryKey::nested("2d-arts", "traditional"),
            ]
        );
        assert_eq!(
            cache.get("2d-arts", Some("traditional")),
            ["ink.jpg".to_string()]
        );
    }

    #[test]
    fn recorded_directories_are_not_fetched_again() {
        let source = MemoryManifestSource::default();
        let mut cache = ManifestCache::default();
        cache.record_failure(&DirectoryKey::category("pixel-arts"));

        block_on(preload_into_cache(
            &source,
            &[DirectoryKey::category("pixel-arts")],
            &mut cache,
        ));
        assert_eq!(source.requests(), vec![String::new()]);
    }

    #[test]
    fn lookups_never_fetch() {
        let source = MemoryManifestSource::default();
        let cache = ManifestCache::default();
        assert!(cache.get("2d-arts", Some("sketches")).is_empty());
        assert!(source.requests().is_empty());
    }
}
