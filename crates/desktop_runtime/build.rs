use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const FOLDER_IDS: [&str; 6] = [
    "about-me",
    "2d-arts",
    "3d-works",
    "pixel-arts",
    "animations",
    "tattoos",
];
const MIN_WINDOW_WIDTH: i32 = 200;
const MIN_WINDOW_HEIGHT: i32 = 150;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Tab {
    label: String,
    slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Folder {
    id: String,
    title: String,
    taskbar_label: String,
    icon: String,
    content: String,
    rect: Rect,
    #[serde(default)]
    tabs: Vec<Tab>,
    #[serde(default)]
    preload: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Desktop {
    owner: String,
    show_login: bool,
    start_menu_title: String,
    start_button_icon: String,
    profile_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Welcome {
    title: String,
    message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Portfolio {
    schema_version: u32,
    #[serde(default)]
    preload_directories: Vec<String>,
    desktop: Desktop,
    welcome: Welcome,
    folders: Vec<Folder>,
}

fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn validate(portfolio: &Portfolio, source: &str) {
    if portfolio.schema_version != 1 {
        panic!(
            "portfolio schema mismatch in {source}: expected 1 found {}",
            portfolio.schema_version
        );
    }
    for dir in &portfolio.preload_directories {
        if !is_slug(dir) {
            panic!("invalid preload directory `{dir}` in {source}");
        }
    }

    let mut seen = HashSet::new();
    for folder in &portfolio.folders {
        if !FOLDER_IDS.contains(&folder.id.as_str()) {
            panic!("unknown folder id `{}` in {source}", folder.id);
        }
        if !seen.insert(folder.id.as_str()) {
            panic!("duplicate folder `{}` in {source}", folder.id);
        }
        if !matches!(folder.content.as_str(), "gallery" | "about") {
            panic!(
                "folder `{}` has unknown content kind `{}` in {source}",
                folder.id, folder.content
            );
        }
        if folder.rect.w < MIN_WINDOW_WIDTH || folder.rect.h < MIN_WINDOW_HEIGHT {
            panic!(
                "folder `{}` default rect is below the {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT} minimum in {source}",
                folder.id
            );
        }
        let mut tab_slugs = HashSet::new();
        for tab in &folder.tabs {
            if !is_slug(&tab.slug) {
                panic!(
                    "folder `{}` tab `{}` has invalid slug `{}` in {source}",
                    folder.id, tab.label, tab.slug
                );
            }
            if !tab_slugs.insert(tab.slug.as_str()) {
                panic!(
                    "folder `{}` repeats tab slug `{}` in {source}",
                    folder.id, tab.slug
                );
            }
        }
        for dir in &folder.preload {
            if !is_slug(dir) {
                panic!(
                    "folder `{}` has invalid preload directory `{dir}` in {source}",
                    folder.id
                );
            }
        }
    }
    for id in FOLDER_IDS {
        if !seen.contains(id) {
            panic!("folder `{id}` is missing from {source}");
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("portfolio.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed=PORTFOLIO_ASSET_BASE");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let portfolio: Portfolio = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&portfolio, &path.display().to_string());

    let json = serde_json::to_string_pretty(&portfolio).expect("serialize portfolio catalog");
    let generated = format!(
        "/// Build-time generated portfolio catalog JSON.\n\
pub const PORTFOLIO_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("portfolio_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
