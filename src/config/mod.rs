// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[album]` - Album folder, PDF name and flip timing
//! - `[music]` - Background track name and volume
//! - `[display]` - Rotate prompt breakpoint
//!
//! Viewer state (current page, music on/off) is never written here.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Pass `--config-dir` or set `ICED_FLIPBOOK_CONFIG_DIR`
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_flipbook::config;
//!
//! // Returns defaults plus a warning key when the file is unreadable
//! let (config, warning) = config::load_with_override(None);
//! if let Some(key) = warning {
//!     eprintln!("{key}");
//! }
//! println!("{:?}", config.flip_duration());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Album location and page flip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlbumConfig {
    /// Folder holding `1.jpg`..`12.jpg`, the music track and the PDF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Flip animation length in milliseconds.
    #[serde(
        default = "default_flip_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub flip_duration_ms: Option<u64>,

    /// File name of the downloadable PDF inside the album folder.
    #[serde(default = "default_pdf_file", skip_serializing_if = "Option::is_none")]
    pub pdf_file: Option<String>,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            directory: None,
            flip_duration_ms: default_flip_duration_ms(),
            pdf_file: default_pdf_file(),
        }
    }
}

/// Background music settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MusicConfig {
    /// File name of the track inside the album folder.
    #[serde(default = "default_music_file", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            file: default_music_file(),
            volume: default_volume(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Width below which a portrait window shows the rotate prompt.
    #[serde(
        default = "default_rotate_prompt_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotate_prompt_breakpoint: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rotate_prompt_breakpoint: default_rotate_prompt_breakpoint(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Album location and flip timing.
    #[serde(default)]
    pub album: AlbumConfig,

    /// Background music settings.
    #[serde(default)]
    pub music: MusicConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Flip duration, clamped to the supported range.
    #[must_use]
    pub fn flip_duration(&self) -> Duration {
        let millis = self
            .album
            .flip_duration_ms
            .unwrap_or(DEFAULT_FLIP_DURATION_MS)
            .clamp(MIN_FLIP_DURATION_MS, MAX_FLIP_DURATION_MS);
        Duration::from_millis(millis)
    }

    /// Music volume, clamped to the supported range.
    #[must_use]
    pub fn music_volume(&self) -> f32 {
        self.music
            .volume
            .unwrap_or(DEFAULT_MUSIC_VOLUME)
            .clamp(MIN_MUSIC_VOLUME, MAX_MUSIC_VOLUME)
    }

    #[must_use]
    pub fn music_file(&self) -> &str {
        self.music.file.as_deref().unwrap_or(DEFAULT_MUSIC_FILE)
    }

    #[must_use]
    pub fn pdf_file(&self) -> &str {
        self.album.pdf_file.as_deref().unwrap_or(DEFAULT_PDF_FILE)
    }

    #[must_use]
    pub fn rotate_prompt_breakpoint(&self) -> f32 {
        self.display
            .rotate_prompt_breakpoint
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(DEFAULT_ROTATE_PROMPT_BREAKPOINT)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_flip_duration_ms() -> Option<u64> {
    Some(DEFAULT_FLIP_DURATION_MS)
}

fn default_pdf_file() -> Option<String> {
    Some(DEFAULT_PDF_FILE.to_string())
}

fn default_music_file() -> Option<String> {
    Some(DEFAULT_MUSIC_FILE.to_string())
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_MUSIC_VOLUME)
}

fn default_rotate_prompt_breakpoint() -> Option<f32> {
    Some(DEFAULT_ROTATE_PROMPT_BREAKPOINT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration, from `base_dir` when given.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            album: AlbumConfig {
                directory: Some(PathBuf::from("/srv/album")),
                flip_duration_ms: Some(600),
                pdf_file: Some("edition.pdf".to_string()),
            },
            music: MusicConfig {
                file: Some("theme.ogg".to_string()),
                volume: Some(0.3),
            },
            display: DisplayConfig::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.flip_duration(), Duration::from_millis(850));
        assert_eq!(config.music_file(), "background-music.mp3");
        assert_eq!(config.pdf_file(), "TIMELESS_ECHO_ANNUVIA25.pdf");
        assert!((config.music_volume() - 0.5).abs() < f32::EPSILON);
        assert!(config.album.directory.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[music]\nvolume = 0.25\n").expect("write settings");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert!((loaded.music_volume() - 0.25).abs() < f32::EPSILON);
        assert_eq!(loaded.music_file(), DEFAULT_MUSIC_FILE);
        assert_eq!(loaded.flip_duration(), Duration::from_millis(DEFAULT_FLIP_DURATION_MS));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.album.flip_duration_ms = Some(1);
        config.music.volume = Some(4.0);
        config.display.rotate_prompt_breakpoint = Some(-3.0);

        assert_eq!(
            config.flip_duration(),
            Duration::from_millis(MIN_FLIP_DURATION_MS)
        );
        assert!((config.music_volume() - MAX_MUSIC_VOLUME).abs() < f32::EPSILON);
        assert!(
            (config.rotate_prompt_breakpoint() - DEFAULT_ROTATE_PROMPT_BREAKPOINT).abs()
                < f32::EPSILON
        );

        config.album.flip_duration_ms = Some(60_000);
        assert_eq!(
            config.flip_duration(),
            Duration::from_millis(MAX_FLIP_DURATION_MS)
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_reads_settings_file_in_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("save should succeed");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[album\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
