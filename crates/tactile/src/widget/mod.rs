//! Widgets and the animation primitives they are built on.

pub mod animation;
pub mod widgets;
