// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the album viewer.
//!
//! Translations are Fluent (`.ftl`) files embedded at build time from
//! `assets/i18n/`. A directory passed with `--i18n-dir` can add locales or
//! replace embedded ones without rebuilding.
//!
//! The locale is picked from the CLI, then settings, then the OS, and
//! falls back to `en-US`.

pub mod fluent;
