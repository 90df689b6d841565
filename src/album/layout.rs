// SPDX-License-Identifier: MPL-2.0
//! Which pages are on screen, which one animates, and the counter text.

use super::navigation::FlipDirection;
use super::page::is_single_page;
use super::{LAST_PAGE, TOTAL_PAGES};
use std::fmt;

/// Position of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSide {
    Single,
    Left,
    Right,
}

/// Pages shown for a given current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    Single { page: usize },
    Spread { left: usize, right: usize },
}

impl PageLayout {
    #[must_use]
    pub fn for_page(current_page: usize) -> Self {
        if is_single_page(current_page) {
            PageLayout::Single { page: current_page }
        } else {
            PageLayout::Spread {
                left: current_page,
                right: (current_page + 1).min(LAST_PAGE),
            }
        }
    }

    /// Pages in left-to-right order with their side.
    #[must_use]
    pub fn pages(&self) -> Vec<(PageSide, usize)> {
        match *self {
            PageLayout::Single { page } => vec![(PageSide::Single, page)],
            PageLayout::Spread { left, right } => {
                vec![(PageSide::Left, left), (PageSide::Right, right)]
            }
        }
    }

    #[must_use]
    pub fn is_spread(&self) -> bool {
        matches!(self, PageLayout::Spread { .. })
    }
}

/// Returns whether the page on `side` plays the flip animation.
///
/// Backward flips turn the left page, forward flips the right one.
#[must_use]
pub fn animates(side: PageSide, direction: Option<FlipDirection>) -> bool {
    matches!(
        (side, direction),
        (PageSide::Left, Some(FlipDirection::Backward))
            | (PageSide::Right, Some(FlipDirection::Forward))
    )
}

/// Text under the book describing the visible pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCounter {
    Cover,
    SpecialThanks { page: usize },
    Spread { first: usize, second: usize, total: usize },
}

impl PageCounter {
    #[must_use]
    pub fn for_page(current_page: usize) -> Self {
        if current_page == 0 {
            PageCounter::Cover
        } else if current_page == LAST_PAGE {
            PageCounter::SpecialThanks { page: TOTAL_PAGES }
        } else {
            PageCounter::Spread {
                first: current_page + 1,
                second: current_page + 2,
                total: TOTAL_PAGES,
            }
        }
    }

    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PageCounter::Cover => "page-counter-cover",
            PageCounter::SpecialThanks { .. } => "page-counter-last",
            PageCounter::Spread { .. } => "page-counter-spread",
        }
    }

    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match *self {
            PageCounter::Cover => Vec::new(),
            PageCounter::SpecialThanks { page } => vec![("page", page.to_string())],
            PageCounter::Spread {
                first,
                second,
                total,
            } => vec![
                ("first", first.to_string()),
                ("second", second.to_string()),
                ("total", total.to_string()),
            ],
        }
    }
}

impl fmt::Display for PageCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCounter::Cover => write!(f, "Page 1 (Cover)"),
            PageCounter::SpecialThanks { page } => write!(f, "Page {page} (Special Thanks)"),
            PageCounter::Spread {
                first,
                second,
                total,
            } => write!(f, "Pages {first}-{second} of {total}"),
        }
    }
}
