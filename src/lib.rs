// SPDX-License-Identifier: MPL-2.0
//! `iced_flipbook` presents a fixed 12-page photo album as a page-flipping
//! book, built with the Iced GUI framework.
//!
//! It adds a looping background-music toggle, a "download album" PDF action,
//! Fluent translations and a small settings file.

#![doc(html_root_url = "https://docs.rs/iced_flipbook/0.1.0")]

pub mod album;
pub mod app;
pub mod config;
pub mod download;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod music;
pub mod ui;
