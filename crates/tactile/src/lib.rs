//! Tactile - raised and flat buttons with press-driven elevation.
//!
//! This is the widget crate. It re-exports the color types from
//! `tactile-render` and the theme and style resolution from `tactile-style`.
//!
//! # Example
//!
//! ```
//! use tactile::prelude::*;
//!
//! let theme = Theme::dark();
//! let button = Button::new("Retry").with_raised(true).with_icon("refresh");
//!
//! let frame = button.frame(&theme);
//! assert_eq!(frame.label.text, "RETRY");
//! assert_eq!(frame.surface.elevation, 2.0);
//! ```

pub mod logging;
pub mod widget;

/// Color and geometry primitives.
pub mod render {
    pub use tactile_render::*;
}

/// Themes and style resolution.
pub mod style {
    pub use tactile_style::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use tactile_render::{Color, CornerRadii, Insets};
    pub use tactile_style::prelude::*;

    pub use crate::widget::animation::{Animator, Easing, Tween};
    pub use crate::widget::widgets::{
        Adornment, Button, ButtonFrame, ElevationController, ElevationPhase, LabelFrame, Ripple,
        Surface,
    };
}
