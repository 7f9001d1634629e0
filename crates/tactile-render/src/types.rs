//! Basic color and geometry types for rendering.
//!
//! This module provides the value types the button core hands to a renderer:
//! colors (with CSS-style parsing and formatting), corner radii and edge insets.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, ColorResult};

/// YIQ brightness at or above which a color counts as light.
pub const LIGHTNESS_THRESHOLD: f32 = 128.0;

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Components are in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a 32-bit RGBA value (0xRRGGBBAA).
    #[inline]
    pub fn from_u32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Create a color from a hex string (`#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::from_rgb8(digit(0)?, digit(1)?, digit(2)?)),
            4 => Some(Self::from_rgba8(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
            6 => Some(Self::from_rgb8(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::from_rgba8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// Parse a CSS color: hex notation, `rgb()`/`rgba()` or a color keyword.
    ///
    /// ```
    /// use tactile_render::Color;
    ///
    /// let tint = Color::parse("rgba(0, 0, 0, .12)").unwrap();
    /// assert_eq!(tint.to_rgba8(), [0, 0, 0, 31]);
    /// assert_eq!(Color::parse("#6200EE").unwrap(), Color::from_rgb8(0x62, 0x00, 0xEE));
    /// assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
    /// ```
    pub fn parse(input: &str) -> ColorResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed).ok_or_else(|| ColorError::InvalidHex(trimmed.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
            return parse_rgb_function(args, trimmed);
        }

        named(&lower).ok_or_else(|| ColorError::UnknownName(trimmed.to_string()))
    }

    /// Convert to 8-bit RGBA components, rounding to nearest.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Return a new color with the given alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Reduce the alpha by `ratio` of its current value.
    ///
    /// `fade(0.32)` on an opaque color yields alpha 0.68.
    #[inline]
    pub fn fade(self, ratio: f32) -> Self {
        self.with_alpha(self.a - self.a * ratio)
    }

    /// Perceived brightness on the 0-255 YIQ scale.
    ///
    /// Alpha is not taken into account.
    pub fn brightness(self) -> f32 {
        let [r, g, b, _] = self.to_rgba8();
        (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) as f32 / 1000.0
    }

    /// Check whether the color reads as light (brightness at or above the midpoint).
    #[inline]
    pub fn is_light(self) -> bool {
        self.brightness() >= LIGHTNESS_THRESHOLD
    }

    /// Check whether the color reads as dark.
    #[inline]
    pub fn is_dark(self) -> bool {
        !self.is_light()
    }

    /// Format as `rgba(r, g, b, a)` with 8-bit channels.
    ///
    /// The alpha is written in full, so parsing the string back yields the
    /// same alpha.
    pub fn to_rgba_string(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({r}, {g}, {b}, {})", format_alpha(self.a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex_string(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::from_rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::from_rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::from_rgb(1.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.to_rgba8()[3] == 255 {
            f.write_str(&self.to_hex_string())
        } else {
            f.write_str(&self.to_rgba_string())
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a CSS color string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
                Color::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Strip `name(` ... `)` and return the argument list.
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_function(args: &str, input: &str) -> ColorResult<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorError::InvalidFunction(input.to_string()));
    }

    let channel = |part: &str| -> ColorResult<f32> {
        let value = match part.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f32>().map(|v| v / 100.0),
            None => part.parse::<f32>().map(|v| v / 255.0),
        };
        match value {
            Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
            _ => Err(ColorError::invalid_component(part, input)),
        }
    };

    let alpha = match parts.get(3) {
        Some(part) => {
            let value = match part.strip_suffix('%') {
                Some(pct) => pct.trim().parse::<f32>().map(|v| v / 100.0),
                None => part.parse::<f32>(),
            };
            match value {
                Ok(v) if (0.0..=1.0).contains(&v) => v,
                _ => return Err(ColorError::invalid_component(*part, input)),
            }
        }
        None => 1.0,
    };

    Ok(Color::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

fn named(name: &str) -> Option<Color> {
    let rgb = match name {
        "transparent" => return Some(Color::TRANSPARENT),
        "black" => 0x000000,
        "white" => 0xFFFFFF,
        "red" => 0xFF0000,
        "green" => 0x008000,
        "lime" => 0x00FF00,
        "blue" => 0x0000FF,
        "yellow" => 0xFFFF00,
        "cyan" | "aqua" => 0x00FFFF,
        "magenta" | "fuchsia" => 0xFF00FF,
        "gray" | "grey" => 0x808080,
        "silver" => 0xC0C0C0,
        "maroon" => 0x800000,
        "olive" => 0x808000,
        "navy" => 0x000080,
        "purple" => 0x800080,
        "teal" => 0x008080,
        "orange" => 0xFFA500,
        _ => return None,
    };
    Some(Color::from_u32((rgb << 8) | 0xFF))
}

fn format_alpha(alpha: f32) -> String {
    format!("{}", alpha.clamp(0.0, 1.0))
}

/// Corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Create corner radii with the same value for all corners.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// Spacing around the four edges of a box. Values may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// Create insets from explicit edge values.
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Vertical value on top/bottom, horizontal value on left/right.
    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal extent.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
