//! Color primitives for Tactile.
//!
//! This crate provides the value types that flow from style resolution to a
//! renderer: [`Color`] with CSS-style parsing and formatting, a perceptual
//! lightness test, [`CornerRadii`] and [`Insets`].
//!
//! # Example
//!
//! ```
//! use tactile_render::Color;
//!
//! let primary: Color = "#6200EE".parse().unwrap();
//! assert!(primary.is_dark());
//!
//! // Ripple tints are faded variants of the label color
//! let ripple = Color::WHITE.fade(0.32);
//! assert_eq!(ripple.to_rgba_string(), "rgba(255, 255, 255, 0.68)");
//! ```

mod error;
mod types;

pub use error::{ColorError, ColorResult};
pub use types::{Color, CornerRadii, Insets, LIGHTNESS_THRESHOLD};
