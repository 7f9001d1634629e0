//! Button style resolution.

use std::fmt;

use tactile_render::Color;

use super::rules::{
    BACKGROUND_RULES, ButtonFacts, DARKNESS_RULES, DarknessInput, TEXT_RULES, TextInput,
};
use crate::button::ButtonConfig;
use crate::theme::Theme;

/// How much of the label color's alpha the ripple drops.
pub const RIPPLE_FADE: f32 = 0.32;

/// A button surface fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// No fill; the parent shows through.
    Transparent,
    /// A solid (possibly translucent) fill.
    Fill(Color),
}

impl Background {
    /// Check whether there is no fill.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// The fill color, if any.
    #[inline]
    pub fn fill(&self) -> Option<Color> {
        match self {
            Self::Transparent => None,
            Self::Fill(color) => Some(*color),
        }
    }

    /// The color to paint, with [`Color::TRANSPARENT`] for no fill.
    #[inline]
    pub fn color(&self) -> Color {
        self.fill().unwrap_or(Color::TRANSPARENT)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Fill(color) => color.fmt(f),
        }
    }
}

/// Colors and text settings for one button render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub background: Background,
    pub text_color: Color,
    /// Whether the surface was classified as dark.
    pub is_dark: bool,
    /// Press feedback tint; always a faded `text_color`.
    pub ripple_color: Color,
    pub font_family: String,
    pub border_radius: f32,
}

impl ResolvedStyle {
    /// The ripple tint in `rgba(r, g, b, a)` form.
    pub fn ripple_rgba(&self) -> String {
        self.ripple_color.to_rgba_string()
    }
}

/// Resolve the visual style of a button.
///
/// This is a pure function of its inputs: background first, then the
/// darkness classification of that background, then the label color, and
/// finally the ripple derived from the label color.
///
/// ```
/// use tactile_style::{resolve, Background, ButtonConfig, Theme};
/// use tactile_render::Color;
///
/// let theme = Theme::light();
/// let config = ButtonConfig { raised: true, primary: true, ..ButtonConfig::new("Send") };
///
/// let style = resolve(&config, &theme);
/// assert_eq!(style.background, Background::Fill(theme.primary()));
/// assert_eq!(style.text_color, Color::WHITE);
/// ```
pub fn resolve(config: &ButtonConfig, theme: &Theme) -> ResolvedStyle {
    let facts = ButtonFacts::new(config, theme);

    let background = BACKGROUND_RULES.evaluate(&facts);
    let is_dark = DARKNESS_RULES.evaluate(&DarknessInput {
        dark: config.dark,
        background,
    });
    let text_color = TEXT_RULES.evaluate(&TextInput { facts, is_dark });
    let ripple_color = text_color.fade(RIPPLE_FADE);

    tracing::trace!(
        target: "tactile_style::resolve",
        label = %config.label,
        %background,
        %text_color,
        is_dark,
        "resolved button style"
    );

    ResolvedStyle {
        background,
        text_color,
        is_dark,
        ripple_color,
        font_family: theme.fonts.medium.clone(),
        border_radius: config.roundness,
    }
}
