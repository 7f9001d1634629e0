//! Animation support for Tactile widgets.
//!
//! Animations here are frame-driven: the owner calls
//! [`Animator::advance`] with the time since the last frame. Nothing runs
//! on its own timer.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tactile::widget::animation::{Animator, Tween};
//!
//! let mut elevation = Tween::new(2.0);
//! elevation.animate_to(6.0, Duration::from_millis(200));
//! while elevation.is_animating() {
//!     elevation.advance(Duration::from_millis(16));
//! }
//! assert_eq!(elevation.value(), 6.0);
//! ```

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{Animator, Tween};
