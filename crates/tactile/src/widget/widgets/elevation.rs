//! Press-driven elevation for raised buttons.
//!
//! A raised surface rests at [`RESTING_ELEVATION`] and lifts to
//! [`PRESSED_ELEVATION`] while pressed. Flat surfaces stay at zero.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tactile::widget::widgets::ElevationController;
//!
//! let mut elevation = ElevationController::new(true);
//! assert_eq!(elevation.elevation(), 2.0);
//!
//! elevation.on_press_in();
//! elevation.tick(Duration::from_millis(200));
//! assert_eq!(elevation.elevation(), 6.0);
//! ```

use std::time::Duration;

use crate::logging::targets;
use crate::widget::animation::{Animator, Tween};

/// Elevation of a raised surface at rest.
pub const RESTING_ELEVATION: f32 = 2.0;
/// Elevation of a raised surface while pressed.
pub const PRESSED_ELEVATION: f32 = 6.0;
/// Time to lift on press.
pub const PRESS_IN_DURATION: Duration = Duration::from_millis(200);
/// Time to settle on release.
pub const PRESS_OUT_DURATION: Duration = Duration::from_millis(150);

/// The last gesture the controller acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElevationPhase {
    #[default]
    Resting,
    Pressed,
}

impl ElevationPhase {
    /// The elevation this phase settles at on a raised surface.
    pub fn target(self) -> f32 {
        match self {
            Self::Resting => RESTING_ELEVATION,
            Self::Pressed => PRESSED_ELEVATION,
        }
    }
}

/// Drives the elevation of one button from its press gestures.
///
/// The `raised` flag is read when a gesture arrives. Changing it with
/// [`set_raised`](Self::set_raised) does not move the current elevation.
#[derive(Debug, Clone)]
pub struct ElevationController<A: Animator = Tween> {
    raised: bool,
    phase: ElevationPhase,
    animator: A,
}

impl ElevationController<Tween> {
    /// Create a controller backed by an eased [`Tween`].
    pub fn new(raised: bool) -> Self {
        Self::with_animator(raised, Tween::new)
    }
}

impl<A: Animator> ElevationController<A> {
    /// Create a controller with a custom animator.
    ///
    /// `make_animator` receives the initial elevation: [`RESTING_ELEVATION`]
    /// when raised, zero otherwise.
    pub fn with_animator(raised: bool, make_animator: impl FnOnce(f32) -> A) -> Self {
        let initial = if raised { RESTING_ELEVATION } else { 0.0 };
        Self {
            raised,
            phase: ElevationPhase::Resting,
            animator: make_animator(initial),
        }
    }

    /// Check if the surface is raised.
    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// Set whether the surface is raised. Applies from the next gesture.
    pub fn set_raised(&mut self, raised: bool) {
        self.raised = raised;
    }

    /// The current elevation.
    #[inline]
    pub fn elevation(&self) -> f32 {
        self.animator.value()
    }

    /// The last gesture acted on.
    #[inline]
    pub fn phase(&self) -> ElevationPhase {
        self.phase
    }

    /// Check if the elevation is still moving.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Get the animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Lift towards [`PRESSED_ELEVATION`]. Does nothing on a flat surface.
    pub fn on_press_in(&mut self) {
        self.transition(ElevationPhase::Pressed, PRESS_IN_DURATION);
    }

    /// Settle towards [`RESTING_ELEVATION`]. Does nothing on a flat surface.
    pub fn on_press_out(&mut self) {
        self.transition(ElevationPhase::Resting, PRESS_OUT_DURATION);
    }

    /// Advance the elevation animation by one frame.
    pub fn tick(&mut self, dt: Duration) {
        self.animator.advance(dt);
    }

    fn transition(&mut self, phase: ElevationPhase, duration: Duration) {
        if !self.raised {
            return;
        }
        let target = phase.target();
        tracing::debug!(
            target: targets::ELEVATION,
            from = self.animator.value(),
            to = target,
            duration_ms = duration.as_millis() as u64,
            ?phase,
            "elevation transition"
        );
        self.phase = phase;
        self.animator.animate_to(target, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every request and jumps straight to the target on `advance`.
    #[derive(Debug, Default)]
    struct RecordingAnimator {
        value: f32,
        pending: Option<f32>,
        calls: Vec<(f32, Duration)>,
    }

    impl RecordingAnimator {
        fn new(value: f32) -> Self {
            Self { value, ..Self::default() }
        }
    }

    impl Animator for RecordingAnimator {
        fn value(&self) -> f32 {
            self.value
        }

        fn animate_to(&mut self, target: f32, duration: Duration) {
            self.calls.push((target, duration));
            self.pending = Some(target);
        }

        fn advance(&mut self, _dt: Duration) {
            if let Some(target) = self.pending.take() {
                self.value = target;
            }
        }

        fn is_animating(&self) -> bool {
            self.pending.is_some()
        }
    }

    fn recorded(raised: bool) -> ElevationController<RecordingAnimator> {
        ElevationController::with_animator(raised, RecordingAnimator::new)
    }

    #[test]
    fn test_initial_elevation() {
        assert_eq!(recorded(true).elevation(), RESTING_ELEVATION);
        assert_eq!(recorded(false).elevation(), 0.0);
        assert_eq!(recorded(true).phase(), ElevationPhase::Resting);
    }

    #[test]
    fn test_press_requests() {
        let mut controller = recorded(true);
        controller.on_press_in();
        controller.on_press_out();

        assert_eq!(
            controller.animator().calls,
            vec![(6.0, Duration::from_millis(200)), (2.0, Duration::from_millis(150))]
        );
        assert_eq!(controller.phase(), ElevationPhase::Resting);
    }

    #[test]
    fn test_repeated_press_in_requests_same_target() {
        let mut controller = recorded(true);
        controller.on_press_in();
        controller.on_press_in();

        assert_eq!(controller.animator().calls, vec![(6.0, Duration::from_millis(200)); 2]);
        assert_eq!(controller.phase(), ElevationPhase::Pressed);
    }

    #[test]
    fn test_flat_ignores_presses() {
        let mut controller = recorded(false);
        controller.on_press_in();
        controller.tick(Duration::from_millis(200));
        controller.on_press_out();
        controller.tick(Duration::from_millis(150));

        assert!(controller.animator().calls.is_empty());
        assert_eq!(controller.elevation(), 0.0);
        assert_eq!(controller.phase(), ElevationPhase::Resting);
    }

    #[test]
    fn test_set_raised_applies_on_next_press() {
        let mut controller = recorded(false);
        controller.set_raised(true);
        // Not moved by the flag change itself
        assert_eq!(controller.elevation(), 0.0);
        assert!(controller.animator().calls.is_empty());

        controller.on_press_in();
        controller.tick(Duration::from_millis(16));
        assert_eq!(controller.elevation(), PRESSED_ELEVATION);
        assert_eq!(controller.phase(), ElevationPhase::Pressed);

        controller.set_raised(false);
        controller.on_press_out();
        assert_eq!(controller.animator().calls.len(), 1);
        assert_eq!(controller.elevation(), PRESSED_ELEVATION);
    }

    #[test]
    fn test_tween_retarget_mid_press() {
        let mut controller = ElevationController::new(true);
        controller.on_press_in();
        controller.tick(Duration::from_millis(100));
        let lifted = controller.elevation();
        assert!(lifted > RESTING_ELEVATION && lifted < PRESSED_ELEVATION);

        controller.on_press_out();
        assert_eq!(controller.elevation(), lifted);
        assert!(controller.is_animating());

        controller.tick(Duration::from_millis(150));
        assert_eq!(controller.elevation(), RESTING_ELEVATION);
        assert!(!controller.is_animating());
    }
}
