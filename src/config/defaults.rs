// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Album**: Asset file names and flip animation timing
//! - **Music**: Background music volume
//! - **Display**: Orientation prompt breakpoint

// ==========================================================================
// Album Defaults
// ==========================================================================

/// Folder name used under the platform data directory for album assets.
pub const DEFAULT_ALBUM_FOLDER: &str = "album";

/// Default duration of a page flip, from input to page commit (milliseconds).
pub const DEFAULT_FLIP_DURATION_MS: u64 = 850;

/// Shortest accepted flip duration (milliseconds).
pub const MIN_FLIP_DURATION_MS: u64 = 100;

/// Longest accepted flip duration (milliseconds).
pub const MAX_FLIP_DURATION_MS: u64 = 5_000;

/// File name of the album PDF inside the album folder.
pub const DEFAULT_PDF_FILE: &str = "TIMELESS_ECHO_ANNUVIA25.pdf";

// ==========================================================================
// Music Defaults
// ==========================================================================

/// File name of the background track inside the album folder.
pub const DEFAULT_MUSIC_FILE: &str = "background-music.mp3";

/// Background music volume (linear gain, 0.0 to 1.0).
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;

/// Minimum volume level.
pub const MIN_MUSIC_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_MUSIC_VOLUME: f32 = 1.0;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Windows narrower than this (in logical pixels) and taller than wide
/// show the rotate prompt.
pub const DEFAULT_ROTATE_PROMPT_BREAKPOINT: f32 = 768.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_duration_default_is_within_bounds() {
        assert!(DEFAULT_FLIP_DURATION_MS >= MIN_FLIP_DURATION_MS);
        assert!(DEFAULT_FLIP_DURATION_MS <= MAX_FLIP_DURATION_MS);
    }

    #[test]
    fn music_volume_is_reduced() {
        assert!(DEFAULT_MUSIC_VOLUME > MIN_MUSIC_VOLUME);
        assert!(DEFAULT_MUSIC_VOLUME < MAX_MUSIC_VOLUME);
    }
}
