//! Standard widgets for Tactile.
//!
//! - [`Button`]: raised or flat pressable button
//! - [`ElevationController`]: press-driven elevation used by raised surfaces

mod button;
mod elevation;
mod frame;

pub use button::Button;
pub use elevation::{
    ElevationController, ElevationPhase, PRESS_IN_DURATION, PRESS_OUT_DURATION, PRESSED_ELEVATION,
    RESTING_ELEVATION,
};
pub use frame::{Adornment, ButtonFrame, LabelFrame, Ripple, Surface, metrics};
