// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled accent button used in the header (music, download).
pub fn header_action(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (accent, hover) = (colors.accent, colors.accent_hover);
    move |_theme: &Theme, status: button::Status| {
        let (background, elevation) = match status {
            button::Status::Hovered => (hover, shadow::MD),
            button::Status::Pressed => (accent, shadow::NONE),
            button::Status::Active => (accent, shadow::SM),
            button::Status::Disabled => (
                Color {
                    a: opacity::DISABLED,
                    ..accent
                },
                shadow::NONE,
            ),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: palette::GOLD_800,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: elevation,
            snap: true,
        }
    }
}

/// Round previous/next button beside the book.
pub fn page_nav(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let (accent, hover) = (colors.accent, colors.accent_hover);
    move |_theme: &Theme, status: button::Status| {
        let (background, text_alpha) = match status {
            button::Status::Hovered => (hover, opacity::OPAQUE),
            button::Status::Pressed => (accent, opacity::OVERLAY_PRESSED),
            button::Status::Active => (accent, opacity::OPAQUE),
            button::Status::Disabled => (
                Color {
                    a: opacity::DISABLED,
                    ..accent
                },
                opacity::OVERLAY_MEDIUM,
            ),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color {
                a: text_alpha,
                ..WHITE
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: if status == button::Status::Disabled {
                shadow::NONE
            } else {
                shadow::MD
            },
            snap: true,
        }
    }
}

/// Borderless button that only shows a hover tint (toast dismiss).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let tint = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
