//! Theme and button styling for Tactile.
//!
//! This crate decides what a button looks like. It provides:
//!
//! - **Themes**: built-in light and dark palettes, font tokens, and TOML theme files
//! - **Button configuration**: the flags and overrides a button is rendered with
//! - **Resolution**: a pure function from configuration and theme to colors
//!
//! # Example
//!
//! ```
//! use tactile_style::prelude::*;
//!
//! let theme = Theme::from_toml_str(r##"
//!     [colors]
//!     primary = "#6200EE"
//! "##)?;
//!
//! let config = ButtonConfig { raised: true, primary: true, ..ButtonConfig::new("Send") };
//! let style = resolve(&config, &theme);
//!
//! assert!(style.is_dark);
//! assert_eq!(style.ripple_rgba(), "rgba(255, 255, 255, 0.68)");
//! # Ok::<(), tactile_style::Error>(())
//! ```

pub mod button;
pub mod resolve;
pub mod theme;

mod error;

pub use button::{ButtonConfig, DarkMode};
pub use error::{Error, Result};
pub use resolve::{Background, ResolvedStyle, resolve};
pub use theme::{Theme, ThemeMode};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::button::{ButtonConfig, DarkMode};
    pub use crate::resolve::{Background, ResolvedStyle, resolve};
    pub use crate::theme::{ColorPalette, FontTokens, Theme, ThemeMode};
}
