//! Color palette definitions.

use tactile_render::Color;

/// A color palette for theming.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Main brand color. Fills primary raised buttons and tints primary flat ones.
    pub primary: Color,
    /// Secondary accent color.
    pub accent: Color,
    /// Window/page background color.
    pub background: Color,
    /// Surface (paper/card) color.
    pub surface: Color,
    /// Primary text color.
    pub text: Color,
    /// Secondary/muted text color.
    pub secondary_text: Color,
    /// Disabled content color.
    pub disabled: Color,
    /// Placeholder text color.
    pub placeholder: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub fn light() -> Self {
        Self {
            // Indigo 500 / pink A200
            primary: Color::from_rgb8(0x3F, 0x51, 0xB5),
            accent: Color::from_rgb8(0xFF, 0x40, 0x81),

            // Grey 100 page, white paper
            background: Color::from_rgb8(0xF5, 0xF5, 0xF5),
            surface: Color::WHITE,

            text: Color::BLACK,
            secondary_text: Color::BLACK.with_alpha(0.54),
            disabled: Color::BLACK.with_alpha(0.26),
            placeholder: Color::BLACK.with_alpha(0.38),
        }
    }

    /// Create a dark theme palette.
    pub fn dark() -> Self {
        Self {
            // Indigo 300 / pink A100 (lighter tones for dark surfaces)
            primary: Color::from_rgb8(0x79, 0x86, 0xCB),
            accent: Color::from_rgb8(0xFF, 0x80, 0xAB),

            background: Color::from_rgb8(0x30, 0x30, 0x30),
            surface: Color::from_rgb8(0x42, 0x42, 0x42),

            text: Color::WHITE,
            secondary_text: Color::WHITE.with_alpha(0.7),
            disabled: Color::WHITE.with_alpha(0.3),
            placeholder: Color::WHITE.with_alpha(0.5),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette_contrast() {
        let palette = ColorPalette::light();
        assert!(palette.primary.is_dark());
        assert!(palette.surface.is_light());
        assert!(palette.background.is_light());
    }

    #[test]
    fn test_dark_palette_contrast() {
        let palette = ColorPalette::dark();
        assert!(palette.surface.is_dark());
        assert!(palette.text.is_light());
    }
}
