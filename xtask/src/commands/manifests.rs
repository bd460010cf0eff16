//! `cargo xtask manifests`: regenerates `manifest.json` files under the image root.
//!
//! Every directory below the root gets a manifest listing its image files (sorted) and, when it
//! has child directories, their names. The root itself gets an informational manifest whose
//! `subdirectories` lists the top-level categories so runtime discovery can walk the tree.

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;
use platform_host::{DirectoryManifest, MANIFEST_FILE_NAME};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Image root relative to the workspace.
pub const DEFAULT_IMAGE_ROOT: &str = "crates/site/public/images";

const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "ico"];
const IGNORED_NAMES: [&str; 5] = [
    ".DS_Store",
    "thumbs.db",
    "desktop.ini",
    MANIFEST_FILE_NAME,
    "README.md",
];

/// `xtask manifests` command family.
pub struct ManifestsCommand;

/// Parsed `xtask manifests` options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ManifestsOptions {
    /// Image root override; relative paths resolve against the workspace root.
    pub root: Option<PathBuf>,
}

/// Counts reported after a generation pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerationSummary {
    /// Manifests written, the root manifest included.
    pub manifests: usize,
    /// Image files listed across all manifests.
    pub files: usize,
}

#[derive(Serialize)]
struct RootManifest {
    description: &'static str,
    usage: &'static str,
    example: &'static str,
    structure: RootStructure,
    subdirectories: Vec<String>,
}

#[derive(Serialize)]
struct RootStructure {
    files: [&'static str; 1],
}

impl XtaskCommand for ManifestsCommand {
    type Options = ManifestsOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut options = ManifestsOptions::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--root" => {
                    let value = iter.next().ok_or_else(|| {
                        XtaskError::validation("missing value for --root")
                            .with_hint("usage: cargo xtask manifests [--root <dir>]")
                    })?;
                    options.root = Some(PathBuf::from(value));
                }
                other if other.starts_with("--root=") => {
                    options.root = Some(PathBuf::from(&other["--root=".len()..]));
                }
                other => {
                    return Err(XtaskError::validation(format!(
                        "unsupported argument for manifests: {other}"
                    ))
                    .with_hint("usage: cargo xtask manifests [--root <dir>]"));
                }
            }
        }
        Ok(options)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        let root = resolve_root(ctx.root(), options.root.as_deref());
        println!("generating image manifests under {}", root.display());
        let summary = generate_manifests(&root)?;
        println!(
            "wrote {} manifests listing {} image files",
            summary.manifests, summary.files
        );
        Ok(())
    }
}

fn resolve_root(workspace: &Path, requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => workspace.join(path),
        None => workspace.join(DEFAULT_IMAGE_ROOT),
    }
}

/// Writes the root manifest and one manifest per directory below `root`.
///
/// # Errors
///
/// Fails when `root` is not a directory or any directory cannot be read or written.
pub fn generate_manifests(root: &Path) -> XtaskResult<GenerationSummary> {
    if !root.is_dir() {
        return Err(XtaskError::validation("image root is not a directory")
            .with_path(root)
            .with_hint("pass --root <dir> pointing at the images folder"));
    }

    let (_, categories) = scan_directory(root)?;
    let root_manifest = RootManifest {
        description:
            "This manifest.json file helps the gallery application find images in the public directory",
        usage: "You can place a manifest.json file in any subdirectory of images to list files",
        example: "Place manifest.json files in each category folder to list files in that category",
        structure: RootStructure {
            files: ["Array of filenames in this directory"],
        },
        subdirectories: categories.clone(),
    };
    write_json(&root.join(MANIFEST_FILE_NAME), &root_manifest)?;

    let mut summary = GenerationSummary {
        manifests: 1,
        files: 0,
    };
    for category in &categories {
        write_directory_manifest(&root.join(category), &mut summary)?;
    }
    Ok(summary)
}

fn write_directory_manifest(dir: &Path, summary: &mut GenerationSummary) -> XtaskResult<()> {
    let (files, subdirectories) = scan_directory(dir)?;
    summary.files += files.len();
    summary.manifests += 1;

    let mut manifest = DirectoryManifest::with_files(files);
    if !subdirectories.is_empty() {
        manifest = manifest.and_subdirectories(subdirectories.iter().cloned());
    }
    write_json(&dir.join(MANIFEST_FILE_NAME), &manifest)?;

    for child in &subdirectories {
        write_directory_manifest(&dir.join(child), summary)?;
    }
    Ok(())
}

/// Returns sorted image file names and sorted child directory names of `dir`.
fn scan_directory(dir: &Path) -> XtaskResult<(Vec<String>, Vec<String>)> {
    let entries = fs::read_dir(dir)
        .map_err(|err| XtaskError::io(format!("failed to read directory: {err}")).with_path(dir))?;

    let mut files = Vec::new();
    let mut subdirectories = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| XtaskError::io(err.to_string()).with_path(dir))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if IGNORED_NAMES.contains(&name.as_str()) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            subdirectories.push(name);
        } else if is_image(&name) {
            files.push(name);
        }
    }
    files.sort();
    subdirectories.sort();
    Ok((files, subdirectories))
}

fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> XtaskResult<()> {
    let mut body = serde_json::to_string_pretty(value)
        .map_err(|err| XtaskError::io(format!("failed to encode manifest: {err}")).with_path(path))?;
    body.push('\n');
    fs::write(path, body)
        .map_err(|err| XtaskError::io(format!("failed to write manifest: {err}")).with_path(path))
}
