//! Built-in themes.

use serde::{Deserialize, Serialize};
use tactile_render::Color;

use super::{ColorPalette, FontTokens};

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// A complete theme: colors and fonts.
///
/// Themes are plain values. Pass them to the functions that need them rather
/// than storing them globally.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Color palette.
    pub palette: ColorPalette,
    /// Font family tokens.
    pub fonts: FontTokens,
}

impl Theme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self::custom(ThemeMode::Light, ColorPalette::light())
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::custom(ThemeMode::Dark, ColorPalette::dark())
    }

    /// Create the built-in theme for a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Create a custom theme from a palette.
    pub fn custom(mode: ThemeMode, palette: ColorPalette) -> Self {
        Self {
            mode,
            palette,
            fonts: FontTokens::default(),
        }
    }

    /// Replace the primary color using builder pattern.
    pub fn with_primary(mut self, primary: Color) -> Self {
        self.palette.primary = primary;
        self
    }

    /// Replace the font tokens using builder pattern.
    pub fn with_fonts(mut self, fonts: FontTokens) -> Self {
        self.fonts = fonts;
        self
    }

    /// Get the primary color.
    pub fn primary(&self) -> Color {
        self.palette.primary
    }

    /// Get the medium-weight font family.
    pub fn medium_font(&self) -> &str {
        &self.fonts.medium
    }

    /// Get the background color.
    pub fn background(&self) -> Color {
        self.palette.background
    }

    /// Get the text color.
    pub fn text_color(&self) -> Color {
        self.palette.text
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.primary(), Color::from_rgb8(0x3F, 0x51, 0xB5));
        assert_eq!(theme.medium_font(), "Roboto-Medium");
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_with_primary() {
        let purple = Color::from_rgb8(0x62, 0x00, 0xEE);
        let theme = Theme::light().with_primary(purple);
        assert_eq!(theme.primary(), purple);
        // Other palette entries untouched
        assert_eq!(theme.palette.surface, Color::WHITE);
    }
}
