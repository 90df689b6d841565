// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing, sizes and timings shared by every album view.

## Organization

- **Palette**: Base colors, including the paper and leather tones of the book
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation timing

## Examples

```
use iced_flipbook::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::LEATHER_DARK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (antique gold scale)
    pub const GOLD_200: Color = Color::from_rgb(0.95, 0.88, 0.70);
    pub const GOLD_400: Color = Color::from_rgb(0.86, 0.72, 0.42);
    pub const GOLD_500: Color = Color::from_rgb(0.78, 0.62, 0.31);
    pub const GOLD_600: Color = Color::from_rgb(0.66, 0.51, 0.23);
    pub const GOLD_800: Color = Color::from_rgb(0.42, 0.31, 0.13);

    // Book materials
    pub const PAPER: Color = Color::from_rgb(0.96, 0.94, 0.90);
    pub const LEATHER: Color = Color::from_rgb(0.20, 0.13, 0.10);
    pub const LEATHER_DARK: Color = Color::from_rgb(0.11, 0.07, 0.05);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Disabled navigation buttons
    pub const DISABLED: f32 = 0.3;

    /// Darkest point of the spine shadow
    pub const SPINE: f32 = 0.35;

    /// Rotate prompt backdrop
    pub const SCRIM: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XXL: f32 = 96.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;

    /// Round previous/next buttons beside the book
    pub const NAV_BUTTON: f32 = 48.0;

    /// Header logos
    pub const LOGO_HEIGHT: f32 = 56.0;

    /// Width of the shaded strip between spread halves
    pub const SPINE_WIDTH: f32 = 24.0;

    pub const TOAST_WIDTH: f32 = 360.0;

    /// Upper bound for the book so very large windows keep margins
    pub const BOOK_MAX_WIDTH: f32 = 1600.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the header, counter and footer text.

    /// Header title
    pub const TITLE_LG: f32 = 30.0;

    /// Rotate prompt heading
    pub const TITLE_MD: f32 = 22.0;

    /// Header tagline
    pub const TITLE_SM: f32 = 17.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Page-number badges, footer lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents, book edge
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// The book resting on the table
    pub const BOOK: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Animation tick interval while a page is turning (~60 fps).
    pub const FRAME: Duration = Duration::from_millis(16);

    /// Notification auto-dismiss check interval.
    pub const TOAST_TICK: Duration = Duration::from_millis(250);

    /// Lowest opacity a turning page fades to at mid-flip.
    pub const FLIP_MIN_OPACITY: f32 = 0.15;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SPINE > 0.0 && opacity::SPINE < 1.0);
    assert!(opacity::SCRIM > opacity::OVERLAY_HOVER && opacity::SCRIM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XXL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::NAV_BUTTON > sizing::ICON_MD);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation
    assert!(motion::FLIP_MIN_OPACITY > 0.0 && motion::FLIP_MIN_OPACITY < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn frame_interval_is_shorter_than_shortest_flip() {
        let shortest = std::time::Duration::from_millis(crate::config::MIN_FLIP_DURATION_MS);
        assert!(motion::FRAME < shortest);
    }
}
