//! Gallery view model: display names, status text, and thumbnail/viewer selection.

use platform_host::DirectoryKey;

/// Shown when a directory has no images (or its manifest failed to load).
pub const EMPTY_FOLDER_MESSAGE: &str = "This folder is empty";
/// Shown in the viewer when the full-size image fails to load.
pub const IMAGE_LOAD_FAILED_MESSAGE: &str = "Image failed to load";

/// Converts a file name into a caption: drops the last extension and turns `-`/`_` into spaces.
///
/// `"cat-sketch_02.png"` becomes `"cat sketch 02"`. A trailing dot with nothing after it is not
/// an extension.
pub fn format_display_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() && !file_name[dot + 1..].contains('/') => {
            &file_name[..dot]
        }
        _ => file_name,
    };
    stem.replace(|c: char| c == '-' || c == '_', " ")
}

/// Status bar item count, e.g. `"1 item"` or `"12 items"`.
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Status bar selection text for the selected file, if any.
pub fn selection_label(selected: Option<&str>) -> Option<String> {
    selected.map(|file| format!("Selected: {}", format_display_name(file)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One thumbnail: a file together with the directory it was listed in.
pub struct GalleryEntry {
    /// Directory whose manifest listed the file.
    pub directory: DirectoryKey,
    /// File name as listed.
    pub file: String,
}

impl GalleryEntry {
    /// Row identity. Equal file names in different directories stay distinct.
    pub fn key(&self) -> String {
        format!("{}/{}", self.directory.path(), self.file)
    }
}

/// Pairs each listed file with `directory`, keeping manifest order.
pub fn gallery_entries(directory: &DirectoryKey, files: &[String]) -> Vec<GalleryEntry> {
    files
        .iter()
        .map(|file| GalleryEntry {
            directory: directory.clone(),
            file: file.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Per-window gallery selection state.
pub struct GalleryState {
    selected: Option<String>,
    viewing: Option<String>,
}

impl GalleryState {
    /// Currently highlighted thumbnail.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// File shown in the full-size viewer.
    pub fn viewing(&self) -> Option<&str> {
        self.viewing.as_deref()
    }

    /// Activating a thumbnail selects it and opens it in the viewer.
    pub fn open(&mut self, file: &str) {
        self.selected = Some(file.to_string());
        self.viewing = Some(file.to_string());
    }

    /// Dismisses the viewer and keeps the selection.
    pub fn close_viewer(&mut self) {
        self.viewing = None;
    }

    /// Clears selection and viewer, used when the directory changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_names_drop_extension_and_separators() {
        assert_eq!(format_display_name("cat-sketch_02.png"), "cat sketch 02");
        assert_eq!(format_display_name("digital-painting.png"), "digital painting");
        assert_eq!(format_display_name("archive.tar.gz"), "archive.tar");
        assert_eq!(format_display_name("no_extension"), "no extension");
        assert_eq!(format_display_name("trailing."), "trailing.");
    }

    #[test]
    fn item_count_is_pluralized() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(7), "7 items");
    }

    #[test]
    fn selection_label_formats_name() {
        assert_eq!(selection_label(None), None);
        assert_eq!(
            selection_label(Some("blue_dragon.webp")).as_deref(),
            Some("Selected: blue dragon")
        );
    }

    #[test]
    fn same_file_name_in_another_tab_is_a_new_row() {
        let files = vec!["01.png".to_string(), "00.png".to_string()];
        let sketches = gallery_entries(&DirectoryKey::nested("2d-arts", "sketches"), &files);
        let illustrations =
            gallery_entries(&DirectoryKey::nested("2d-arts", "illustrations"), &files);

        assert_eq!(
            sketches.iter().map(|entry| entry.file.as_str()).collect::<Vec<_>>(),
            ["01.png", "00.png"]
        );
        assert_eq!(sketches[0].key(), "2d-arts/sketches/01.png");
        assert_eq!(illustrations[0].key(), "2d-arts/illustrations/01.png");
        assert_ne!(sketches[0].key(), illustrations[0].key());
    }

    #[test]
    fn closing_viewer_keeps_selection() {
        let mut state = GalleryState::default();
        state.open("a.png");
        assert_eq!(state.viewing(), Some("a.png"));
        state.close_viewer();
        assert_eq!(state.viewing(), None);
        assert_eq!(state.selected(), Some("a.png"));
        state.reset();
        assert_eq!(state, GalleryState::default());
    }
}
