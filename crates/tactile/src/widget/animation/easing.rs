//! Easing curves for elevation and other scalar animations.
//!
//! An easing curve maps linear progress in `0.0..=1.0` to eased progress in
//! the same range. Every curve here fixes both endpoints.

use std::f32::consts::PI;

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic; starts slow.
    EaseIn,
    /// Quadratic; ends slow.
    EaseOut,
    /// Quadratic; slow at both ends.
    #[default]
    EaseInOut,
    /// Cubic; ends slow.
    EaseOutCubic,
    /// Cubic; slow at both ends.
    EaseInOutCubic,
    /// Sinusoidal; slow at both ends.
    EaseInOutSine,
}

impl Easing {
    /// Apply the curve to a progress value. Input is clamped to `0.0..=1.0`.
    ///
    /// ```
    /// use tactile::widget::animation::Easing;
    ///
    /// assert_eq!(Easing::Linear.apply(0.25), 0.25);
    /// assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    /// assert!(Easing::EaseIn.apply(0.5) < 0.5);
    /// ```
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Interpolate from `start` to `end` along the curve.
    #[inline]
    pub fn interpolate(self, start: f32, end: f32, t: f32) -> f32 {
        start + (end - start) * self.apply(t)
    }
}
