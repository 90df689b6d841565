// SPDX-License-Identifier: MPL-2.0
//! Book rendering: single page or two-page spread, side buttons and counter.

use super::Message;
use crate::album::{animates, FlipDirection, PageCounter, PageLayout, PageSet, PageSide};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, image::Image, text, tooltip, Column, Container, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};
use std::f32::consts::PI;

pub(super) struct Context<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub layout: PageLayout,
    pub direction: Option<FlipDirection>,
    /// Opacity applied to the page that turns.
    pub turning_opacity: f32,
    pub pages: &'a PageSet,
    pub images: &'a [Option<ImageData>],
    pub counter: PageCounter,
    pub can_retreat: bool,
    pub can_advance: bool,
}

/// Opacity of a turning page at `progress` (0 = start, 1 = end).
///
/// Fades down to [`motion::FLIP_MIN_OPACITY`] halfway through and back up.
#[must_use]
pub fn flip_opacity(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - motion::FLIP_MIN_OPACITY) * (progress * PI).sin()
}

pub(super) fn view<'a>(ctx: Context<'a>) -> Element<'a, Message> {
    let previous = nav_button(
        ctx.colors,
        icons::chevron_left(),
        ctx.can_retreat.then_some(Message::Previous),
        ctx.i18n.tr("nav-previous"),
        tooltip::Position::Right,
    );
    let next = nav_button(
        ctx.colors,
        icons::chevron_right(),
        ctx.can_advance.then_some(Message::Next),
        ctx.i18n.tr("nav-next"),
        tooltip::Position::Left,
    );

    let book = Container::new(book_content(&ctx))
        .padding(spacing::XS)
        .max_width(sizing::BOOK_MAX_WIDTH)
        .style(styles::container::book(ctx.colors));

    let book_row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(Container::new(book).width(Length::Fill).center_x(Length::Fill))
        .push(next);

    let counter = Container::new(
        Text::new(counter_text(ctx.i18n, ctx.counter)).size(typography::BODY_LG),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(styles::container::counter(ctx.colors));

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(book_row).height(Length::Fill).center_y(Length::Fill))
        .push(counter)
        .into()
}

/// Localized page counter.
pub(super) fn counter_text(i18n: &I18n, counter: PageCounter) -> String {
    let args = counter.i18n_args();
    if args.is_empty() {
        i18n.tr(counter.i18n_key())
    } else {
        let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
        i18n.tr_with_args(counter.i18n_key(), &args)
    }
}

fn book_content<'a>(ctx: &Context<'a>) -> Element<'a, Message> {
    match ctx.layout {
        PageLayout::Single { page } => page_image(ctx, PageSide::Single, page),
        PageLayout::Spread { left, right } => {
            let half = |side: PageSide, index: usize| {
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .width(Length::FillPortion(1))
                    .push(page_image(ctx, side, index))
                    .push(page_badge(ctx.colors, index))
            };

            let spine = Container::new(Space::new())
                .width(Length::Fixed(sizing::SPINE_WIDTH))
                .height(Length::Fill)
                .style(styles::container::spine(ctx.colors));

            Row::new()
                .push(half(PageSide::Left, left))
                .push(spine)
                .push(half(PageSide::Right, right))
                .into()
        }
    }
}

fn page_image<'a>(ctx: &Context<'a>, side: PageSide, index: usize) -> Element<'a, Message> {
    let data = ctx
        .images
        .get(index)
        .and_then(Option::as_ref)
        .unwrap_or_else(|| placeholder_for(side));

    let opacity = if animates(side, ctx.direction) {
        ctx.turning_opacity
    } else {
        1.0
    };

    let image = Image::new(data.handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .opacity(opacity);

    let alt = ctx
        .pages
        .get(index)
        .map(|page| {
            let number = page.number().to_string();
            ctx.i18n.tr_with_args("page-alt", &[("page", number.as_str())])
        })
        .unwrap_or_default();

    tooltip(
        image,
        Container::new(Text::new(alt).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::badge(ctx.colors)),
        tooltip::Position::Bottom,
    )
    .into()
}

fn placeholder_for(side: PageSide) -> &'static ImageData {
    match side {
        PageSide::Single => media::single_placeholder(),
        PageSide::Left | PageSide::Right => media::half_placeholder(),
    }
}

fn page_badge<'a>(colors: &ColorScheme, index: usize) -> Element<'a, Message> {
    Container::new(text((index + 1).to_string()).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::badge(colors))
        .into()
}

fn nav_button<'a>(
    colors: &ColorScheme,
    icon: iced::widget::svg::Svg<'static>,
    on_press: Option<Message>,
    label: String,
    position: tooltip::Position,
) -> Element<'a, Message> {
    let button = button(
        Container::new(icons::tinted(icon, sizing::ICON_LG, colors.overlay_text))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .padding(spacing::XXS)
    .on_press_maybe(on_press)
    .style(styles::button::page_nav(colors));

    tooltip(
        button,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::badge(colors)),
        position,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_page_is_opaque_at_both_ends() {
        assert!((flip_opacity(0.0) - 1.0).abs() < 1e-6);
        assert!((flip_opacity(1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn turning_page_is_faintest_halfway() {
        assert!((flip_opacity(0.5) - motion::FLIP_MIN_OPACITY).abs() < 1e-6);
        assert!(flip_opacity(0.25) > flip_opacity(0.5));
    }

    #[test]
    fn progress_outside_range_is_clamped() {
        assert_eq!(flip_opacity(-1.0), flip_opacity(0.0));
        assert_eq!(flip_opacity(2.0), flip_opacity(1.0));
    }

    #[test]
    fn counter_text_uses_english_bundle() {
        let i18n = I18n::new(
            Some("en-US".into()),
            None,
            &crate::config::Config::default(),
        );
        assert_eq!(counter_text(&i18n, PageCounter::for_page(0)), "Page 1 (Cover)");
        assert_eq!(
            counter_text(&i18n, PageCounter::for_page(3)),
            "Pages 4-5 of 12"
        );
        assert_eq!(
            counter_text(&i18n, PageCounter::for_page(11)),
            "Page 12 (Special Thanks)"
        );
    }

    #[test]
    fn spread_halves_use_half_placeholder() {
        assert_eq!(placeholder_for(PageSide::Left).width, 960);
        assert_eq!(placeholder_for(PageSide::Single).width, 1920);
    }
}
