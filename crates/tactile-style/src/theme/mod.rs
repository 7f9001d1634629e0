//! Theme system with built-in themes.

mod builtin;
mod fonts;
mod loader;
mod palette;

pub use builtin::{Theme, ThemeMode};
pub use fonts::FontTokens;
pub use palette::ColorPalette;
