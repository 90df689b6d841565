// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::download::DownloadOutcome;
use crate::error::{AudioError, DownloadError, Error};
use crate::media::ImageData;
use crate::music::Track;
use crate::ui::flipbook;
use crate::ui::header;
use crate::ui::notifications;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Flipbook(flipbook::Message),
    Header(header::Message),
    Notification(notifications::NotificationMessage),
    /// Result of decoding the background track for the output device.
    MusicDecoded(Result<Track, AudioError>),
    /// Result of the "Save As" dialog and copy.
    DownloadFinished(Result<DownloadOutcome, DownloadError>),
    LogoLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Pointer input swallowed by an overlay.
    OverlayPressed,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional album folder override.
    /// Takes precedence over `ICED_FLIPBOOK_ALBUM_DIR` and settings.
    pub album_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FLIPBOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
