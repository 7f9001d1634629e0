//! Button style resolution.
//!
//! [`resolve`] turns a [`ButtonConfig`](crate::button::ButtonConfig) and a
//! [`Theme`](crate::theme::Theme) into a [`ResolvedStyle`]. Each color
//! channel is decided by an ordered rule table in [`rules`].

mod engine;
pub mod rules;

pub use engine::{Background, ResolvedStyle, RIPPLE_FADE, resolve};
pub use rules::{DISABLED_BACKGROUND, DISABLED_TEXT, RuleMatch, RuleSet};
