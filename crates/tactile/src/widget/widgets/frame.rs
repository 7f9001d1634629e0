//! Render descriptions produced by [`Button::frame`](super::Button::frame).
//!
//! A [`ButtonFrame`] is plain data: everything a painter needs to draw one
//! frame of a button, with no reference back to the widget.

use std::time::Duration;

use tactile_render::{Color, CornerRadii, Insets};
use tactile_style::Background;

/// Fixed layout metrics of a button.
pub mod metrics {
    use tactile_render::Insets;

    /// Outer margin around the surface.
    pub const SURFACE_MARGIN: f32 = 8.0;
    /// Minimum surface width.
    pub const MIN_WIDTH: f32 = 88.0;
    /// Size of an icon glyph.
    pub const ICON_SIZE: f32 = 16.0;
    /// Width of the box holding an icon or spinner.
    pub const ADORNMENT_WIDTH: f32 = 16.0;
    /// Space before the adornment box.
    pub const ADORNMENT_MARGIN_LEFT: f32 = 12.0;
    /// Space after the adornment box; negative pulls the label closer.
    pub const ADORNMENT_MARGIN_RIGHT: f32 = -4.0;
    /// Margins around the label text.
    pub const LABEL_MARGINS: Insets = Insets::symmetric(9.0, 16.0);
}

/// Everything needed to draw one frame of a button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonFrame {
    pub surface: Surface,
    pub adornment: Adornment,
    pub label: LabelFrame,
    /// Press feedback; `None` when the button is not touchable.
    pub ripple: Option<Ripple>,
}

/// The elevated, rounded background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub background: Background,
    pub corner_radii: CornerRadii,
    pub elevation: f32,
    pub margin: f32,
    pub min_width: f32,
}

/// What sits before the label.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Adornment {
    #[default]
    None,
    /// Activity indicator shown while loading.
    Spinner { color: Color },
    /// A named icon glyph.
    Icon { name: String, size: f32, color: Color },
}

impl Adornment {
    /// Check if anything is drawn before the label.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Width the adornment takes in the row, including its margins.
    pub fn advance(&self) -> f32 {
        if self.is_visible() {
            metrics::ADORNMENT_MARGIN_LEFT + metrics::ADORNMENT_WIDTH + metrics::ADORNMENT_MARGIN_RIGHT
        } else {
            0.0
        }
    }
}

/// The label text run.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFrame {
    /// Text as displayed, upper-cased.
    pub text: String,
    pub color: Color,
    pub font_family: String,
    /// Maximum number of lines.
    pub max_lines: u32,
    pub margins: Insets,
}

/// Touch feedback settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub color: Color,
    /// The ripple may spread outside the surface bounds.
    pub borderless: bool,
    pub delay_press_in: Duration,
}
