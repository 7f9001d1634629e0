//! Button configuration record.

use serde::{Deserialize, Serialize};
use tactile_render::Color;

use crate::error::{Error, Result};

/// Corner radius of a button that does not set its own.
pub const DEFAULT_ROUNDNESS: f32 = 2.0;

/// Whether the button's surface should be treated as dark.
///
/// `Auto` lets the resolver decide from the background color; `Dark` and
/// `Light` override that decision even when it contradicts the background.
///
/// Deserializes from `"auto"`, `"dark"`, `"light"` or a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "DarkModeRepr")]
pub enum DarkMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl DarkMode {
    /// The explicit override, if any.
    pub fn explicit(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Dark => Some(true),
            Self::Light => Some(false),
        }
    }
}

impl From<Option<bool>> for DarkMode {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Auto,
            Some(true) => Self::Dark,
            Some(false) => Self::Light,
        }
    }
}

impl From<bool> for DarkMode {
    fn from(dark: bool) -> Self {
        Some(dark).into()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DarkModeRepr {
    Flag(bool),
    Named(NamedDarkMode),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum NamedDarkMode {
    Auto,
    Dark,
    Light,
}

impl From<DarkModeRepr> for DarkMode {
    fn from(repr: DarkModeRepr) -> Self {
        match repr {
            DarkModeRepr::Flag(dark) => dark.into(),
            DarkModeRepr::Named(NamedDarkMode::Auto) => Self::Auto,
            DarkModeRepr::Named(NamedDarkMode::Dark) => Self::Dark,
            DarkModeRepr::Named(NamedDarkMode::Light) => Self::Light,
        }
    }
}

/// Everything that decides how a button looks for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Disabled buttons are muted and ignore presses.
    pub disabled: bool,
    /// Raised buttons have a filled, elevated surface.
    pub raised: bool,
    /// Use the theme's primary color.
    pub primary: bool,
    /// Dark surface override.
    pub dark: DarkMode,
    /// Show a spinner in place of the icon.
    pub loading: bool,
    /// Custom color: the fill of a raised button, the text of a flat one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Corner radius.
    pub roundness: f32,
    /// Icon name shown before the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display text.
    pub label: String,
}

impl ButtonConfig {
    /// Create a flat, enabled configuration with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Check the fields a renderer relies on.
    ///
    /// The label must contain something other than whitespace and the
    /// roundness must be a non-negative number.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::invalid_value("label", "must not be empty"));
        }
        if !self.roundness.is_finite() || self.roundness < 0.0 {
            return Err(Error::invalid_value(
                "roundness",
                format!("expected a non-negative number, got {}", self.roundness),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::from_toml(&e, source))
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            raised: false,
            primary: false,
            dark: DarkMode::Auto,
            loading: false,
            color: None,
            roundness: DEFAULT_ROUNDNESS,
            icon: None,
            label: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_from_option() {
        assert_eq!(DarkMode::from(None), DarkMode::Auto);
        assert_eq!(DarkMode::from(Some(true)), DarkMode::Dark);
        assert_eq!(DarkMode::from(false), DarkMode::Light);
        assert_eq!(DarkMode::Auto.explicit(), None);
        assert_eq!(DarkMode::Dark.explicit(), Some(true));
    }

    #[test]
    fn test_defaults() {
        let config = ButtonConfig::new("Save");
        assert_eq!(config.label, "Save");
        assert_eq!(config.roundness, 2.0);
        assert_eq!(config.dark, DarkMode::Auto);
        assert!(!config.raised && !config.disabled && !config.primary && !config.loading);
    }

    #[test]
    fn test_from_toml() {
        let config = ButtonConfig::from_toml_str(
            r##"
            label = "Buy"
            raised = true
            dark = "light"
            color = "#FF4081"
            icon = "cart"
            "##,
        )
        .unwrap();

        assert!(config.raised);
        assert_eq!(config.dark, DarkMode::Light);
        assert_eq!(config.color, Some(Color::from_rgb8(0xFF, 0x40, 0x81)));
        assert_eq!(config.icon.as_deref(), Some("cart"));
        assert_eq!(config.roundness, 2.0);
    }

    #[test]
    fn test_dark_accepts_boolean() {
        let config = ButtonConfig::from_toml_str("label = \"x\"\ndark = true").unwrap();
        assert_eq!(config.dark, DarkMode::Dark);
    }

    #[test]
    fn test_dark_serializes_as_name() {
        let config = ButtonConfig {
            dark: DarkMode::Dark,
            ..ButtonConfig::new("Go")
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("dark = \"dark\""), "{text}");
        assert!(!text.contains("color"), "{text}");

        let back = ButtonConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validate() {
        assert!(ButtonConfig::new("OK").validate().is_ok());

        let err = ButtonConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref property, .. } if property == "label"));

        let bad_radius = ButtonConfig {
            roundness: f32::NAN,
            ..ButtonConfig::new("OK")
        };
        assert!(bad_radius.validate().is_err());
    }
}
