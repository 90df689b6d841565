// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized handlers `App::update` dispatches to.

use super::Message;
use crate::album::{AlbumAssets, RotatePrompt};
use crate::download::{self, DownloadOutcome};
use crate::error::{AudioError, DownloadError, Error};
use crate::media::ImageData;
use crate::music::{self, BackgroundMusic, Toggle, Track};
use crate::ui::flipbook::{self, Event as FlipbookEvent};
use crate::ui::header;
use crate::ui::notifications::{self, Notification};
use iced::{window, Size, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub assets: &'a AlbumAssets,
    pub flipbook: &'a mut flipbook::State,
    pub music: &'a mut BackgroundMusic,
    pub rotate_prompt: &'a mut RotatePrompt,
    pub logos: &'a mut Vec<Option<ImageData>>,
    pub download_in_progress: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles album viewer messages.
pub fn handle_flipbook_message(
    ctx: &mut UpdateContext<'_>,
    message: flipbook::Message,
) -> Task<Message> {
    let (event, task) = ctx.flipbook.handle_message(message);
    match event {
        FlipbookEvent::FlipStarted(direction) => {
            tracing::debug!(?direction, from = ctx.flipbook.current_page(), "page flip started");
        }
        FlipbookEvent::PageCommitted(page) => {
            tracing::debug!(page, "page flip finished");
        }
        FlipbookEvent::None => {}
    }
    task.map(Message::Flipbook)
}

/// Handles header button presses.
pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match message {
        header::Message::ToggleMusic => handle_music_toggle(ctx),
        header::Message::DownloadAlbum => handle_download_request(ctx),
    }
}

/// Starts or stops the background track.
pub fn handle_music_toggle(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.music.toggle() {
        Toggle::Playing => {
            tracing::info!("background music playing");
            clear_music_errors(ctx);
            Task::none()
        }
        Toggle::Stopped => {
            tracing::info!("background music stopped");
            Task::none()
        }
        Toggle::Ignored => Task::none(),
        Toggle::Decode { path, format } => {
            tracing::debug!(path = %path.display(), ?format, "decoding background music");
            Task::perform(music::decode_track_async(path, format), Message::MusicDecoded)
        }
        Toggle::Failed(error) => {
            notify_music_error(ctx, &error);
            Task::none()
        }
    }
}

/// Finishes a music start once decoding is done.
pub fn handle_music_decoded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Track, AudioError>,
) -> Task<Message> {
    match ctx.music.on_track_decoded(result) {
        Ok(()) => {
            if ctx.music.is_playing() {
                tracing::info!("background music playing");
                clear_music_errors(ctx);
            }
        }
        Err(error) => notify_music_error(ctx, &error),
    }
    Task::none()
}

/// Checks the PDF and opens the "Save As" dialog.
pub fn handle_download_request(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.download_in_progress {
        tracing::debug!("download already in progress");
        return Task::none();
    }

    match download::prepare(ctx.assets) {
        Ok(pdf) => {
            *ctx.download_in_progress = true;
            Task::perform(download::save_as(pdf), Message::DownloadFinished)
        }
        Err(error) => {
            notify_download_error(ctx, &error);
            Task::none()
        }
    }
}

/// Reports the result of a download.
pub fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<DownloadOutcome, DownloadError>,
) -> Task<Message> {
    *ctx.download_in_progress = false;
    match result {
        Ok(DownloadOutcome::Saved(path)) => {
            ctx.notifications.push(
                Notification::success("notification-download-success")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Ok(DownloadOutcome::Cancelled) => {}
        Err(error) => notify_download_error(ctx, &error),
    }
    Task::none()
}

/// Stores a decoded header logo. Missing or broken logos are skipped.
pub fn handle_logo_loaded(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(logo) => {
            if let Some(slot) = ctx.logos.get_mut(index) {
                *slot = Some(logo);
            }
        }
        Err(error) => tracing::debug!(index, %error, "logo skipped"),
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.rotate_prompt.resize(size.width, size.height);
    Task::none()
}

/// Stops the music and the book, then closes the window.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.music.release();
    ctx.flipbook.teardown();
    tracing::info!("album closed");
    window::close(id)
}

/// Notices made stale once music plays.
const MUSIC_ERROR_KEYS: [&str; 2] = [
    "notification-music-error",
    "notification-music-device-error",
];

fn clear_music_errors(ctx: &mut UpdateContext<'_>) {
    for key in MUSIC_ERROR_KEYS {
        ctx.notifications.dismiss_key(key);
    }
}

fn notify_music_error(ctx: &mut UpdateContext<'_>, error: &AudioError) {
    tracing::warn!(%error, "music playback failed");
    ctx.notifications.dismiss_key(error.i18n_key());
    ctx.notifications.push(
        Notification::error(error.i18n_key()).with_arg("file", ctx.assets.music_file_name()),
    );
}

fn notify_download_error(ctx: &mut UpdateContext<'_>, error: &DownloadError) {
    tracing::warn!(%error, "album download failed");
    ctx.notifications.dismiss_key(error.i18n_key());
    ctx.notifications.push(
        Notification::error(error.i18n_key()).with_arg("file", ctx.assets.pdf_file_name()),
    );
}
