// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay asking the user to switch to landscape.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{mouse_area, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the overlay. It swallows pointer input so the book underneath
/// cannot be used while it is shown.
pub fn view<'a, Message: Clone + 'a>(
    i18n: &I18n,
    colors: &ColorScheme,
    swallow: Message,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icons::tinted(
            icons::rotate(),
            sizing::ICON_XXL,
            colors.overlay_text,
        ))
        .push(Text::new(i18n.tr("rotate-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("rotate-hint")).size(typography::BODY));

    let scrim = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::scrim(colors));

    mouse_area(scrim).on_press(swallow).into()
}
