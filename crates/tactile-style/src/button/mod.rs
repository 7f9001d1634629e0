//! Button configuration.

mod config;

pub use config::{ButtonConfig, DEFAULT_ROUNDNESS, DarkMode};
