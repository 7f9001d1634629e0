//! Frame-driven scalar tweens.

use std::time::Duration;

use super::easing::Easing;

/// Something that animates a single scalar towards a target.
///
/// Implementations are driven by the caller: [`advance`](Self::advance) is
/// called once per frame with the time since the previous frame. Calling
/// [`animate_to`](Self::animate_to) while a transition is running replaces
/// it, starting from whatever value is current at that moment.
pub trait Animator {
    /// The current value.
    fn value(&self) -> f32;

    /// Start moving towards `target` over `duration`.
    fn animate_to(&mut self, target: f32, duration: Duration);

    /// Advance the running transition by `dt`.
    fn advance(&mut self, dt: Duration);

    /// Check if a transition is in progress.
    fn is_animating(&self) -> bool;
}

/// A retargetable, eased scalar animation.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tactile::widget::animation::{Animator, Easing, Tween};
///
/// let mut tween = Tween::new(2.0).with_easing(Easing::Linear);
/// tween.animate_to(6.0, Duration::from_millis(200));
///
/// tween.advance(Duration::from_millis(100));
/// assert_eq!(tween.value(), 4.0);
///
/// tween.advance(Duration::from_millis(100));
/// assert_eq!(tween.value(), 6.0);
/// assert!(!tween.is_animating());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    value: f32,
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
    running: bool,
}

impl Tween {
    /// Create a tween resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            to: value,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::default(),
            running: false,
        }
    }

    /// Set the easing curve using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get the easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing curve. Takes effect on the next frame.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// The value the tween is heading to, or resting at.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress of the running transition, if any.
    pub fn progress(&self) -> Option<f32> {
        self.running
            .then(|| self.elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Jump to `value`, cancelling any running transition.
    pub fn set_value(&mut self, value: f32) {
        *self = Self::new(value).with_easing(self.easing);
    }
}

impl Animator for Tween {
    #[inline]
    fn value(&self) -> f32 {
        self.value
    }

    fn animate_to(&mut self, target: f32, duration: Duration) {
        if duration.is_zero() {
            self.set_value(target);
            return;
        }
        self.from = self.value;
        self.to = target;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.running = true;
    }

    fn advance(&mut self, dt: Duration) {
        if !self.running {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.value = self.to;
            self.elapsed = self.duration;
            self.running = false;
            return;
        }

        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.value = self.easing.interpolate(self.from, self.to, t);
    }

    #[inline]
    fn is_animating(&self) -> bool {
        self.running
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}
