// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the page (header, book, footer), the rotate
//! prompt when the window is narrow and portrait, then the toasts.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::music::MusicState;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{flipbook, footer, header, rotate_prompt};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub flipbook: &'a flipbook::State,
    pub music: MusicState,
    pub logos: &'a [Option<ImageData>],
    pub show_rotate_prompt: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the album window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        music: ctx.music,
        logos: ctx.logos.iter().flatten().collect(),
    })
    .map(Message::Header);

    let book = ctx
        .flipbook
        .view(flipbook::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        })
        .map(Message::Flipbook);

    let page = Container::new(
        Column::new()
            .push(header)
            .push(book)
            .push(footer::view(ctx.i18n, ctx.colors))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::backdrop(ctx.colors));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.show_rotate_prompt {
        layers = layers.push(rotate_prompt::view(
            ctx.i18n,
            ctx.colors,
            Message::OverlayPressed,
        ));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
