//! Folder catalog loaded from the build-time embedded `portfolio.toml`.
//!
//! Every folder slug, tab slug, and preload directory comes from this one table. Nothing else in
//! the runtime derives directory names from display labels.

use std::{fmt, str::FromStr, sync::OnceLock};

use platform_host::DirectoryKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowRect;
use crate::window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

include!(concat!(env!("OUT_DIR"), "/portfolio_catalog_generated.rs"));

const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Portfolio folders. Each folder opens at most one window.
pub enum FolderId {
    /// Biography and contact panels.
    #[serde(rename = "about-me")]
    AboutMe,
    /// 2D artwork gallery.
    #[serde(rename = "2d-arts")]
    TwoDArts,
    /// 3D renders and models.
    #[serde(rename = "3d-works")]
    ThreeDWorks,
    /// Pixel art gallery.
    #[serde(rename = "pixel-arts")]
    PixelArts,
    /// Animation gallery.
    #[serde(rename = "animations")]
    Animations,
    /// Tattoo designs.
    #[serde(rename = "tattoos")]
    Tattoos,
}

impl FolderId {
    /// Every folder.
    pub const ALL: [Self; 6] = [
        Self::AboutMe,
        Self::TwoDArts,
        Self::ThreeDWorks,
        Self::PixelArts,
        Self::Animations,
        Self::Tattoos,
    ];

    /// Canonical slug, also the folder's image directory name.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::AboutMe => "about-me",
            Self::TwoDArts => "2d-arts",
            Self::ThreeDWorks => "3d-works",
            Self::PixelArts => "pixel-arts",
            Self::Animations => "animations",
            Self::Tattoos => "tattoos",
        }
    }

    /// Looks a folder up by slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FolderId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| CatalogError::UnknownFolder(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// What a folder window renders.
pub enum ContentKind {
    /// Image grid driven by directory manifests.
    Gallery,
    /// Static biography panels.
    About,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One sub-tab of a folder window.
pub struct FolderTab {
    /// Menu bar label.
    pub label: String,
    /// Canonical slug, also the image subdirectory for gallery folders.
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog entry for one folder.
pub struct FolderDescriptor {
    /// Folder identity.
    pub id: FolderId,
    /// Window title.
    pub title: String,
    /// Taskbar button label.
    pub taskbar_label: String,
    /// Desktop and start menu icon, relative to the image root.
    pub icon: String,
    /// Content view kind.
    pub content: ContentKind,
    /// Initial window rectangle.
    pub rect: WindowRect,
    /// Ordered sub-tabs; the first one is selected on open.
    #[serde(default)]
    pub tabs: Vec<FolderTab>,
    /// Extra subdirectories to preload that are not tabs.
    #[serde(default)]
    pub preload: Vec<String>,
}

impl FolderDescriptor {
    /// Slug of the tab selected when the window opens.
    pub fn default_tab(&self) -> Option<&str> {
        self.tabs.first().map(|tab| tab.slug.as_str())
    }

    /// Looks a tab up by slug.
    pub fn tab(&self, slug: &str) -> Option<&FolderTab> {
        self.tabs.iter().find(|tab| tab.slug == slug)
    }

    /// Image directory read by the gallery for `tab`.
    pub fn directory(&self, tab: Option<&str>) -> DirectoryKey {
        DirectoryKey::from_parts(self.id.slug(), tab)
    }

    /// Directories this folder needs preloaded.
    pub fn known_directories(&self) -> Vec<DirectoryKey> {
        let mut keys: Vec<DirectoryKey> = match self.content {
            ContentKind::Gallery if self.tabs.is_empty() => {
                vec![DirectoryKey::category(self.id.slug())]
            }
            ContentKind::Gallery => self
                .tabs
                .iter()
                .map(|tab| DirectoryKey::nested(self.id.slug(), tab.slug.as_str()))
                .collect(),
            ContentKind::About => Vec::new(),
        };
        keys.extend(
            self.preload
                .iter()
                .map(|dir| DirectoryKey::nested(self.id.slug(), dir.as_str())),
        );
        keys
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Boot, login, and start menu settings.
pub struct DesktopSettings {
    /// Name shown on the BIOS and login screens.
    pub owner: String,
    /// Whether boot stops at the login screen.
    pub show_login: bool,
    /// Start menu banner text.
    pub start_menu_title: String,
    /// Start button image, relative to the image root.
    pub start_button_icon: String,
    /// Profile picture, relative to the image root.
    pub profile_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Welcome notification copy.
pub struct WelcomeSettings {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Parsed portfolio catalog.
pub struct PortfolioCatalog {
    /// Catalog format version.
    pub schema_version: u32,
    /// Top-level image directories to preload.
    #[serde(default)]
    pub preload_directories: Vec<String>,
    /// Desktop settings.
    pub desktop: DesktopSettings,
    /// Welcome notification copy.
    pub welcome: WelcomeSettings,
    /// Folders in desktop icon order.
    pub folders: Vec<FolderDescriptor>,
}

impl PortfolioCatalog {
    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and any error reported by
    /// [`validate_catalog`].
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    /// Looks a folder up by id.
    pub fn folder(&self, id: FolderId) -> Option<&FolderDescriptor> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    /// Every directory the manifest cache should load up front, de-duplicated, folders first.
    pub fn known_directories(&self) -> Vec<DirectoryKey> {
        let mut keys: Vec<DirectoryKey> = Vec::new();
        let folder_keys = self.folders.iter().flat_map(|f| f.known_directories());
        let top_level = self
            .preload_directories
            .iter()
            .map(|dir| DirectoryKey::category(dir.as_str()));
        for key in folder_keys.chain(top_level) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Catalog validation failures.
pub enum CatalogError {
    /// A slug names no folder.
    #[error("unknown folder `{0}`")]
    UnknownFolder(String),
    /// A slug is not lowercase words joined by hyphens.
    #[error("folder `{folder}` has invalid slug `{slug}`")]
    InvalidSlug {
        /// Folder owning the slug.
        folder: FolderId,
        /// Offending slug.
        slug: String,
    },
    /// A folder is declared twice.
    #[error("folder `{0}` is declared more than once")]
    DuplicateFolder(FolderId),
    /// A tab slug repeats within one folder.
    #[error("folder `{folder}` repeats tab `{slug}`")]
    DuplicateTab {
        /// Folder owning the tabs.
        folder: FolderId,
        /// Repeated slug.
        slug: String,
    },
    /// A folder has no catalog entry.
    #[error("folder `{0}` is missing from the catalog")]
    MissingFolder(FolderId),
    /// A default rectangle is below the minimum window size.
    #[error("folder `{0}` default window is smaller than the minimum size")]
    WindowTooSmall(FolderId),
    /// Unsupported catalog format.
    #[error("unsupported catalog schema version {0}")]
    UnsupportedSchema(u32),
    /// The document is not valid catalog JSON.
    #[error("catalog parse error: {0}")]
    Parse(String),
}

/// Returns whether `value` is lowercase ASCII words joined by single hyphens.
pub fn is_canonical_slug(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Checks the catalog against [`FolderId`] and the slug and geometry rules.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_catalog(catalog: &PortfolioCatalog) -> Result<(), CatalogError> {
    if catalog.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(CatalogError::UnsupportedSchema(catalog.schema_version));
    }
    if let Some(dir) = catalog
        .preload_directories
        .iter()
        .find(|dir| !is_canonical_slug(dir))
    {
        return Err(CatalogError::UnknownFolder(dir.clone()));
    }

    let mut seen: Vec<FolderId> = Vec::new();
    for folder in &catalog.folders {
        if seen.contains(&folder.id) {
            return Err(CatalogError::DuplicateFolder(folder.id));
        }
        seen.push(folder.id);

        if folder.rect.w < MIN_WINDOW_WIDTH || folder.rect.h < MIN_WINDOW_HEIGHT {
            return Err(CatalogError::WindowTooSmall(folder.id));
        }
        let slugs = folder
            .tabs
            .iter()
            .map(|tab| &tab.slug)
            .chain(folder.preload.iter());
        for slug in slugs {
            if !is_canonical_slug(slug) {
                return Err(CatalogError::InvalidSlug {
                    folder: folder.id,
                    slug: slug.clone(),
                });
            }
        }
        for (index, tab) in folder.tabs.iter().enumerate() {
            if folder.tabs[..index].iter().any(|t| t.slug == tab.slug) {
                return Err(CatalogError::DuplicateTab {
                    folder: folder.id,
                    slug: tab.slug.clone(),
                });
            }
        }
    }

    match FolderId::ALL.into_iter().find(|id| !seen.contains(id)) {
        Some(missing) => Err(CatalogError::MissingFolder(missing)),
        None => Ok(()),
    }
}

static CATALOG: OnceLock<Result<PortfolioCatalog, CatalogError>> = OnceLock::new();

/// Parses the embedded catalog once.
///
/// # Errors
///
/// Returns the parse or validation error of the embedded catalog.
pub fn try_catalog() -> Result<&'static PortfolioCatalog, CatalogError> {
    CATALOG
        .get_or_init(|| PortfolioCatalog::parse(PORTFOLIO_CATALOG_JSON))
        .as_ref()
        .map_err(Clone::clone)
}

/// The embedded catalog.
///
/// # Panics
///
/// Panics when the embedded catalog is invalid. The build script rejects such catalogs, and
/// the desktop provider calls [`try_catalog`] at startup so a bad catalog fails before any
/// window opens.
pub fn catalog() -> &'static PortfolioCatalog {
    match try_catalog() {
        Ok(catalog) => catalog,
        Err(err) => panic!("embedded portfolio catalog is invalid: {err}"),
    }
}

/// Catalog entry for `id`.
///
/// # Panics
///
/// Panics under the same conditions as [`catalog`]; a valid catalog has every folder.
pub fn folder(id: FolderId) -> &'static FolderDescriptor {
    match catalog().folder(id) {
        Some(folder) => folder,
        None => panic!("{}", CatalogError::MissingFolder(id)),
    }
}
