// SPDX-License-Identifier: MPL-2.0
//! Locations of the files that make up an album.
//!
//! ```text
//! album/
//! ├── 1.jpg … 12.jpg
//! ├── background-music.mp3
//! ├── TIMELESS_ECHO_ANNUVIA25.pdf
//! └── logos/            (optional)
//! ```

use crate::config::{Config, DEFAULT_MUSIC_FILE, DEFAULT_PDF_FILE};
use std::fs;
use std::path::{Path, PathBuf};

const LOGOS_FOLDER: &str = "logos";
const LOGO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "svg", "webp"];

/// Resolves album files relative to the album folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumAssets {
    root: PathBuf,
    music_file: String,
    pdf_file: String,
}

impl AlbumAssets {
    /// Uses the default music and PDF file names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            music_file: DEFAULT_MUSIC_FILE.to_string(),
            pdf_file: DEFAULT_PDF_FILE.to_string(),
        }
    }

    /// Uses the file names configured in settings.
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            root: root.into(),
            music_file: config.music_file().to_string(),
            pdf_file: config.pdf_file().to_string(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<index + 1>.jpg`
    #[must_use]
    pub fn page_image(&self, index: usize) -> PathBuf {
        self.root.join(format!("{}.jpg", index + 1))
    }

    #[must_use]
    pub fn music_track(&self) -> PathBuf {
        self.root.join(&self.music_file)
    }

    #[must_use]
    pub fn music_file_name(&self) -> &str {
        &self.music_file
    }

    #[must_use]
    pub fn pdf(&self) -> PathBuf {
        self.root.join(&self.pdf_file)
    }

    #[must_use]
    pub fn pdf_file_name(&self) -> &str {
        &self.pdf_file
    }

    /// Image files in `logos/`, sorted by name. A missing folder yields none.
    #[must_use]
    pub fn logos(&self) -> Vec<PathBuf> {
        let dir = self.root.join(LOGOS_FOLDER);
        let Ok(entries) = fs::read_dir(&dir) else {
            tracing::debug!(dir = %dir.display(), "no logos folder");
            return Vec::new();
        };

        let mut logos: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_logo_extension(path))
            .collect();
        logos.sort();
        logos
    }
}

fn has_logo_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            LOGO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_file_names_live_in_root() {
        let assets = AlbumAssets::new("/srv/album");
        assert_eq!(assets.page_image(0), PathBuf::from("/srv/album/1.jpg"));
        assert_eq!(
            assets.music_track(),
            PathBuf::from("/srv/album/background-music.mp3")
        );
        assert_eq!(
            assets.pdf(),
            PathBuf::from("/srv/album/TIMELESS_ECHO_ANNUVIA25.pdf")
        );
    }

    #[test]
    fn configured_file_names_are_used() {
        let mut config = Config::default();
        config.music.file = Some("theme.ogg".to_string());
        config.album.pdf_file = Some("book.pdf".to_string());

        let assets = AlbumAssets::from_config("/a", &config);
        assert_eq!(assets.music_track(), PathBuf::from("/a/theme.ogg"));
        assert_eq!(assets.pdf_file_name(), "book.pdf");
    }

    #[test]
    fn missing_logos_folder_yields_nothing() {
        let dir = tempdir().expect("temp dir");
        assert!(AlbumAssets::new(dir.path()).logos().is_empty());
    }

    #[test]
    fn logos_are_sorted_and_filtered() {
        let dir = tempdir().expect("temp dir");
        let logos = dir.path().join("logos");
        fs::create_dir(&logos).expect("create logos");
        fs::write(logos.join("b.PNG"), b"x").expect("write");
        fs::write(logos.join("a.jpg"), b"x").expect("write");
        fs::write(logos.join("readme.txt"), b"x").expect("write");

        let found = AlbumAssets::new(dir.path()).logos();
        assert_eq!(found, vec![logos.join("a.jpg"), logos.join("b.PNG")]);
    }
}
