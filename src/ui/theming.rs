// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling for the album window.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors of the surfaces around the book.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Window background (the "table")
    pub backdrop: Color,
    /// Header and footer band
    pub band: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Buttons, badges, counter accents
    pub accent: Color,
    pub accent_hover: Color,

    /// Background behind each page image
    pub page: Color,
    pub spine: Color,

    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            backdrop: Color::from_rgb(0.93, 0.90, 0.85),
            band: palette::PAPER,
            text_primary: palette::LEATHER_DARK,
            text_secondary: palette::GRAY_700,
            accent: palette::GOLD_600,
            accent_hover: palette::GOLD_500,
            page: palette::WHITE,
            spine: palette::BLACK,
            overlay_background: Color {
                a: opacity::SCRIM,
                ..palette::LEATHER_DARK
            },
            overlay_text: palette::PAPER,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            backdrop: palette::LEATHER_DARK,
            band: palette::LEATHER,
            text_primary: palette::GOLD_200,
            text_secondary: palette::GRAY_200,
            accent: palette::GOLD_500,
            accent_hover: palette::GOLD_400,
            page: palette::PAPER,
            spine: palette::BLACK,
            overlay_background: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
            overlay_text: palette::GOLD_200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Theme resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        tracing::debug!(?mode, dark, "theme resolved");
        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Built-in Iced theme matching the resolved mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_backdrop() {
        assert!(ColorScheme::light().backdrop.r > 0.8);
    }

    #[test]
    fn dark_scheme_has_dark_backdrop() {
        assert!(ColorScheme::dark().backdrop.r < 0.2);
    }

    #[test]
    fn pages_stay_light_in_both_schemes() {
        assert!(ColorScheme::light().page.g > 0.9);
        assert!(ColorScheme::dark().page.g > 0.9);
    }

    #[test]
    fn explicit_modes_pick_matching_iced_theme() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "mode = \"dark\"");
    }
}
