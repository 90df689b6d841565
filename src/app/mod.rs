// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the album window.
//!
//! The `App` struct wires together the book, the background music, the PDF
//! download and the notifications, and translates messages into side effects
//! like image loading, audio decoding or the "Save As" dialog.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::album::{AlbumAssets, PageSet, RotatePrompt};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::music::{BackgroundMusic, Volume};
use crate::ui::flipbook;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    assets: AlbumAssets,
    flipbook: flipbook::State,
    music: BackgroundMusic,
    rotate_prompt: RotatePrompt,
    /// Header logos in file-name order; `None` until decoded or when broken.
    logos: Vec<Option<ImageData>>,
    download_in_progress: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("album", &self.assets.root())
            .field("page", &self.flipbook.current_page())
            .field("music", &self.music.state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
///
/// Close requests are handled by the app so the music and the book are
/// stopped before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, resolves the album folder and starts loading images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let album_root = paths::get_album_dir_with_override(
            flags.album_dir.as_ref().map(PathBuf::from),
            config.album.directory.as_deref(),
        );

        let (mut app, task) = Self::with_config(&config, album_root, flags.lang, flags.i18n_dir);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, task)
    }

    fn with_config(
        config: &Config,
        album_root: PathBuf,
        lang: Option<String>,
        i18n_dir: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(lang, i18n_dir, config);
        let assets = AlbumAssets::from_config(album_root, config);
        tracing::info!(
            album = %assets.root().display(),
            locale = %i18n.current_locale(),
            "opening album"
        );

        let (flipbook, flipbook_task) =
            flipbook::State::new(PageSet::new(&assets), config.flip_duration());
        let music = BackgroundMusic::new(assets.music_track(), Volume::new(config.music_volume()));

        let mut rotate_prompt = RotatePrompt::new(config.rotate_prompt_breakpoint());
        rotate_prompt.resize(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);

        let logo_paths = assets.logos();
        let logo_tasks = logo_paths
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, path)| {
                Task::perform(media::load_image_async(path), move |result| {
                    Message::LogoLoaded { index, result }
                })
            })
            .collect::<Vec<_>>();

        let app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            logos: vec![None; logo_paths.len()],
            assets,
            flipbook,
            music,
            rotate_prompt,
            download_in_progress: false,
            notifications: notifications::Manager::new(),
        };

        let task = Task::batch(
            std::iter::once(flipbook_task.map(Message::Flipbook)).chain(logo_tasks),
        );
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let flip_sub = subscription::create_flip_subscription(&self.flipbook);

        Subscription::batch([event_sub, tick_sub, flip_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            assets: &self.assets,
            flipbook: &mut self.flipbook,
            music: &mut self.music,
            rotate_prompt: &mut self.rotate_prompt,
            logos: &mut self.logos,
            download_in_progress: &mut self.download_in_progress,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Flipbook(flipbook_message) => {
                update::handle_flipbook_message(&mut ctx, flipbook_message)
            }
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::MusicDecoded(result) => update::handle_music_decoded(&mut ctx, result),
            Message::DownloadFinished(result) => {
                update::handle_download_finished(&mut ctx, result)
            }
            Message::LogoLoaded { index, result } => {
                update::handle_logo_loaded(&mut ctx, index, result)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::WindowCloseRequested(id) => update::handle_close_request(&mut ctx, id),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
            Message::OverlayPressed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            flipbook: &self.flipbook,
            music: self.music.state(),
            logos: &self.logos,
            show_rotate_prompt: self.rotate_prompt.is_visible(),
            notifications: &self.notifications,
        })
    }
}
