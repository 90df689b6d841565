// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for the config directory
//! and the album folder, so every component resolves them the same way.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--album-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_FLIPBOOK_ALBUM_DIR`, `ICED_FLIPBOOK_CONFIG_DIR`)
//! 4. **Settings** - `[album] directory` (album folder only)
//! 5. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.album_dir, flags.config_dir);
//! ```

use crate::config::DEFAULT_ALBUM_FOLDER;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "IcedFlipbook";

/// Environment variable to override the album folder.
pub const ENV_ALBUM_DIR: &str = "ICED_FLIPBOOK_ALBUM_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FLIPBOOK_CONFIG_DIR";

/// Global CLI override for the album folder (set once at startup).
static CLI_ALBUM_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the album and config directories.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(album_dir: Option<String>, config_dir: Option<String>) {
    if CLI_ALBUM_DIR.set(album_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("path overrides already initialized, ignoring");
    }
}

fn get_cli_album_dir() -> Option<PathBuf> {
    CLI_ALBUM_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 3. `ICED_FLIPBOOK_CONFIG_DIR` environment variable (if set and non-empty)
/// 4. Platform-specific config directory:
///    - Linux: `~/.config/IcedFlipbook/`
///    - macOS: `~/Library/Application Support/IcedFlipbook/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\IcedFlipbook\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Some(path) = env_path(ENV_CONFIG_DIR) {
        return Some(path);
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the album folder holding page images, music and PDF.
///
/// `configured` is the `[album] directory` value from settings.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. CLI argument `--album-dir` or the positional argument
/// 3. `ICED_FLIPBOOK_ALBUM_DIR` environment variable (if set and non-empty)
/// 4. `configured` from settings
/// 5. `<data dir>/IcedFlipbook/album` when that folder exists
/// 6. `./album` relative to the working directory
pub fn get_album_dir_with_override(
    override_path: Option<PathBuf>,
    configured: Option<&Path>,
) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    if let Some(path) = get_cli_album_dir() {
        return path;
    }

    if let Some(path) = env_path(ENV_ALBUM_DIR) {
        return path;
    }

    if let Some(path) = configured {
        return path.to_path_buf();
    }

    if let Some(path) = platform_album_dir().filter(|path| path.is_dir()) {
        return path;
    }

    PathBuf::from(DEFAULT_ALBUM_FOLDER)
}

fn platform_album_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(DEFAULT_ALBUM_FOLDER);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir_with_override(None);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn album_override_beats_everything() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ALBUM_DIR, "/env/album");

        let result = get_album_dir_with_override(
            Some(PathBuf::from("/override/album")),
            Some(Path::new("/configured/album")),
        );
        assert_eq!(result, PathBuf::from("/override/album"));

        std::env::remove_var(ENV_ALBUM_DIR);
    }

    #[test]
    fn album_env_var_beats_configured_directory() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ALBUM_DIR, "/env/album");

        let result = get_album_dir_with_override(None, Some(Path::new("/configured/album")));
        assert_eq!(result, PathBuf::from("/env/album"));

        std::env::remove_var(ENV_ALBUM_DIR);
    }

    #[test]
    fn configured_album_directory_is_used_without_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ALBUM_DIR);

        let result = get_album_dir_with_override(None, Some(Path::new("/configured/album")));
        assert_eq!(result, PathBuf::from("/configured/album"));
    }

    #[test]
    fn album_dir_falls_back_to_a_folder_named_album() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ALBUM_DIR, "");

        let result = get_album_dir_with_override(None, None);
        assert!(result.ends_with(DEFAULT_ALBUM_FOLDER));

        std::env::remove_var(ENV_ALBUM_DIR);
    }
}
