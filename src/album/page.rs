// SPDX-License-Identifier: MPL-2.0
//! Page descriptors generated once at startup.

use super::{AlbumAssets, LAST_PAGE, TOTAL_PAGES};
use std::path::{Path, PathBuf};

/// One album page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    image: PathBuf,
}

impl Page {
    /// Zero-based position in the album.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based page number as shown to the reader.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// English alternative text, used when no translation applies.
    #[must_use]
    pub fn alt(&self) -> String {
        format!("Page {}", self.number())
    }

    /// Cover and closing page are shown alone.
    #[must_use]
    pub fn is_single_page(&self) -> bool {
        is_single_page(self.index)
    }
}

/// Returns whether the page at `index` is displayed alone.
#[must_use]
pub fn is_single_page(index: usize) -> bool {
    index == 0 || index == LAST_PAGE
}

/// The immutable, ordered set of album pages.
#[derive(Debug, Clone)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    #[must_use]
    pub fn new(assets: &AlbumAssets) -> Self {
        let pages = (0..TOTAL_PAGES)
            .map(|index| Page {
                index,
                image: assets.page_image(index),
            })
            .collect();
        Self { pages }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
