// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`flipbook`] - The book: pages, flip animation, side buttons and counter
//! - [`header`] - Titles, logos, music toggle and download button
//! - [`footer`] - Credits
//! - [`rotate_prompt`] - Landscape request overlay
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon rendering

pub mod design_tokens;
pub mod flipbook;
pub mod footer;
pub mod header;
pub mod icons;
pub mod notifications;
pub mod rotate_prompt;
pub mod styles;
pub mod theming;
