//! Loading themes from TOML.
//!
//! A theme file overlays a built-in base theme; anything it leaves out keeps
//! the base value.
//!
//! ```toml
//! base = "light"
//!
//! [colors]
//! primary = "#6200EE"
//! disabled = "rgba(0, 0, 0, .26)"
//!
//! [fonts]
//! medium = "Inter-Medium"
//! ```

use std::path::Path;

use serde::Deserialize;
use tactile_render::Color;

use super::{Theme, ThemeMode};
use crate::error::{Error, Result};

/// On-disk shape of a theme file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    base: ThemeMode,
    colors: PaletteOverrides,
    fonts: FontOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PaletteOverrides {
    primary: Option<Color>,
    accent: Option<Color>,
    background: Option<Color>,
    surface: Option<Color>,
    text: Option<Color>,
    secondary_text: Option<Color>,
    disabled: Option<Color>,
    placeholder: Option<Color>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FontOverrides {
    regular: Option<String>,
    medium: Option<String>,
    light: Option<String>,
    thin: Option<String>,
}

fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ThemeFile {
    fn into_theme(self) -> Theme {
        let mut theme = Theme::for_mode(self.base);

        let palette = &mut theme.palette;
        let colors = self.colors;
        overlay(&mut palette.primary, colors.primary);
        overlay(&mut palette.accent, colors.accent);
        overlay(&mut palette.background, colors.background);
        overlay(&mut palette.surface, colors.surface);
        overlay(&mut palette.text, colors.text);
        overlay(&mut palette.secondary_text, colors.secondary_text);
        overlay(&mut palette.disabled, colors.disabled);
        overlay(&mut palette.placeholder, colors.placeholder);

        let fonts = &mut theme.fonts;
        overlay(&mut fonts.regular, self.fonts.regular);
        overlay(&mut fonts.medium, self.fonts.medium);
        overlay(&mut fonts.light, self.fonts.light);
        overlay(&mut fonts.thin, self.fonts.thin);

        theme
    }
}

impl Theme {
    /// Parse a theme from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ThemeFile =
            toml::from_str(source).map_err(|e| Error::from_toml(&e, source))?;
        let theme = file.into_theme();
        tracing::debug!(
            target: "tactile_style::theme",
            mode = ?theme.mode,
            primary = %theme.palette.primary,
            "parsed theme"
        );
        Ok(theme)
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source).inspect_err(|e| {
            tracing::warn!(target: "tactile_style::theme", path = %path.display(), "failed to load theme: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_is_light_theme() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, Theme::light());
    }

    #[test]
    fn test_overlay_on_dark_base() {
        let theme = Theme::from_toml_str(
            r##"
            base = "dark"

            [colors]
            primary = "#6200EE"

            [fonts]
            medium = "Inter-Medium"
            "##,
        )
        .unwrap();

        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.primary(), Color::from_rgb8(0x62, 0x00, 0xEE));
        assert_eq!(theme.medium_font(), "Inter-Medium");
        // Untouched entries come from the dark base
        assert_eq!(theme.palette.surface, Theme::dark().palette.surface);
        assert_eq!(theme.fonts.regular, "Roboto");
    }

    #[test]
    fn test_functional_color_notation() {
        let theme = Theme::from_toml_str(
            r#"
            [colors]
            disabled = "rgba(0, 0, 0, .26)"
            "#,
        )
        .unwrap();
        assert!((theme.palette.disabled.a - 0.26).abs() < 1e-6);
    }

    #[test]
    fn test_bad_color_reports_location() {
        let err = Theme::from_toml_str("[colors]\nprimary = \"not-a-color\"\n").unwrap_err();
        match err {
            Error::Parse { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("not-a-color"), "message: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Theme::from_toml_str("[colors]\nprimery = \"#000\"\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_roundness_is_not_a_theme_setting() {
        // Corner radius belongs to each button's configuration
        let err = Theme::from_toml_str("roundness = 6.0").unwrap_err();
        match err {
            Error::Parse { line, message, .. } => {
                assert_eq!(line, 1);
                assert!(message.contains("roundness"), "message: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[colors]\nprimary = \"teal\"").unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.primary().to_rgba8(), [0, 128, 128, 255]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
