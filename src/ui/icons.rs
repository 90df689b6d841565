// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the album's SVG icons.
//!
//! Icons are stroked 24×24 outlines embedded as SVG source, tinted at render
//! time through the svg style. Handles are cached using `OnceLock`.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `speaker` not `music_on`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Wraps stroked path data in a 24×24 outline SVG document.
macro_rules! outline_svg {
    ($($path:literal),+) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" viewBox="0 0 24 24">"#,
            $(r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=""#, $path, r#""/>"#,)+
            "</svg>"
        )
    };
}

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $doc:literal, $($path:literal),+) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(outline_svg!($($path),+).as_bytes())
            });
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    speaker,
    "Speaker with sound waves.",
    "M15.536 8.464a5 5 0 010 7.072m2.828-9.9a9 9 0 010 12.728M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z"
);

define_icon!(
    speaker_muted,
    "Speaker with a cross.",
    "M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z",
    "M17 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2"
);

define_icon!(
    file_download,
    "Document with a downward arrow.",
    "M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
);

define_icon!(chevron_left, "Chevron pointing left.", "M15 19l-7-7 7-7");

define_icon!(chevron_right, "Chevron pointing right.", "M9 5l7 7-7 7");

define_icon!(
    rotate,
    "Two circular arrows.",
    "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"
);

define_icon!(cross, "Diagonal cross.", "M6 18L18 6M6 6l12 12");

define_icon!(checkmark, "Check mark.", "M5 13l4 4L19 7");

define_icon!(
    warning,
    "Exclamation mark in a triangle.",
    "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
);

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes and tints an icon.
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}

/// Sizes an icon and tints it with the theme's text color.
pub fn themed(icon: Svg<'static>, size: f32) -> Svg<'static> {
    sized(icon, size).style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.palette().text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_documents_are_well_formed() {
        let doc = outline_svg!("M0 0", "M1 1");
        assert!(doc.starts_with("<svg"));
        assert!(doc.ends_with("</svg>"));
        assert_eq!(doc.matches("<path").count(), 2);
    }

    #[test]
    fn icons_build_without_panicking() {
        for icon in [
            speaker(),
            speaker_muted(),
            file_download(),
            chevron_left(),
            chevron_right(),
            rotate(),
            cross(),
            checkmark(),
            warning(),
        ] {
            let _ = sized(icon, 16.0);
        }
    }
}
