// SPDX-License-Identifier: MPL-2.0
//! Header band: logos, album titles, music toggle and download button.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::music::MusicState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image::Image, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub music: MusicState,
    /// Decoded logos in display order; may be empty.
    pub logos: Vec<&'a ImageData>,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMusic,
    DownloadAlbum,
}

/// I18n key for the music button label in `state`.
#[must_use]
pub fn music_label_key(state: MusicState) -> &'static str {
    match state {
        MusicState::Stopped => "music-button-play",
        MusicState::Starting => "music-button-starting",
        MusicState::Playing => "music-button-stop",
    }
}

/// Render the header band.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let logos = ctx.logos.iter().fold(
        Row::new().spacing(spacing::SM).align_y(alignment::Vertical::Center),
        |row, logo| {
            row.push(
                Image::new(logo.handle.clone())
                    .content_fit(ContentFit::Contain)
                    .height(Length::Fixed(sizing::LOGO_HEIGHT)),
            )
        },
    );

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("header-tagline")).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr("header-subtitle"))
                .size(typography::BODY_SM)
                .color(ctx.colors.text_secondary),
        );

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(music_button(&ctx))
        .push(action_button(
            ctx.colors,
            icons::file_download(),
            ctx.i18n.tr("download-button"),
            Message::DownloadAlbum,
        ));

    let content = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(logos)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(styles::container::band(ctx.colors))
        .into()
}

fn music_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // The muted speaker shows whenever nothing is audible yet
    let icon = if ctx.music == MusicState::Playing {
        icons::speaker()
    } else {
        icons::speaker_muted()
    };
    action_button(
        ctx.colors,
        icon,
        ctx.i18n.tr(music_label_key(ctx.music)),
        Message::ToggleMusic,
    )
}

fn action_button<'a>(
    colors: &ColorScheme,
    icon: iced::widget::svg::Svg<'static>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(icon, sizing::ICON_MD, iced::Color::WHITE))
        .push(Text::new(label).size(typography::BODY));

    button(content)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .on_press(message)
        .style(styles::button::header_action(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_label_follows_state() {
        assert_eq!(music_label_key(MusicState::Stopped), "music-button-play");
        assert_eq!(music_label_key(MusicState::Starting), "music-button-starting");
        assert_eq!(music_label_key(MusicState::Playing), "music-button-stop");
    }

    #[test]
    fn header_renders_without_logos() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let _element = view(ViewContext {
            i18n: &i18n,
            colors: &colors,
            music: MusicState::Stopped,
            logos: Vec::new(),
        });
    }
}
