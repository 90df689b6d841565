// SPDX-License-Identifier: MPL-2.0
//! Album model: the fixed page sequence, flip navigation and layout rules.
//!
//! Nothing in here touches the GUI toolkit, so every rule can be tested
//! without a window.

pub mod assets;
pub mod layout;
pub mod navigation;
pub mod orientation;
pub mod page;

pub use assets::AlbumAssets;
pub use layout::{animates, PageCounter, PageLayout, PageSide};
pub use navigation::{FlipDirection, FlipRequest, FlipTicket, Navigator, Phase};
pub use orientation::RotatePrompt;
pub use page::{Page, PageSet};

/// Number of pages in the album: a cover, five spreads and a closing page.
pub const TOTAL_PAGES: usize = 12;

/// Index of the closing "Special Thanks" page.
pub const LAST_PAGE: usize = TOTAL_PAGES - 1;
