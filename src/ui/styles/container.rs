// SPDX-License-Identifier: MPL-2.0
//! Container styles for the book and the bands around it.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Degrees, Theme};

/// Window background.
pub fn backdrop(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (background, text) = (colors.backdrop, colors.text_primary);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Header and footer band.
pub fn band(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (background, text, accent) = (colors.band, colors.text_primary, colors.accent);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// The book: page background with a drop shadow.
pub fn book(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (page, accent) = (colors.page, colors.accent);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(page)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::BOOK,
        ..Default::default()
    }
}

/// Fold between the two halves of a spread, darkest in the middle.
pub fn spine(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let shade = colors.spine;
    move |_theme: &Theme| {
        let edge = Color {
            a: opacity::TRANSPARENT,
            ..shade
        };
        let middle = Color {
            a: opacity::SPINE,
            ..shade
        };
        let linear = gradient::Linear::new(Degrees(90.0))
            .add_stop(0.0, edge)
            .add_stop(0.5, middle)
            .add_stop(1.0, edge);
        container::Style {
            background: Some(Background::Gradient(linear.into())),
            ..Default::default()
        }
    }
}

/// Small pill under each spread half showing the page number.
pub fn badge(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let accent = colors.accent;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..accent
        })),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page counter below the book.
pub fn counter(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (background, text, accent) = (colors.band, colors.text_primary, colors.accent);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Full-window scrim behind the rotate prompt.
pub fn scrim(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (background, text) = (colors.overlay_background, colors.overlay_text);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Toast card with a severity-colored border.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let background = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
