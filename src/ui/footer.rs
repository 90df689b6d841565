// SPDX-License-Identifier: MPL-2.0
//! Footer band with the album credits.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let lines = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("footer-credit")).size(typography::CAPTION))
        .push(
            Text::new(i18n.tr("footer-batches"))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );

    Container::new(lines)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::band(colors))
        .into()
}
