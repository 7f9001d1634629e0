//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while parsing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// A `#`-prefixed value that is not 3, 4, 6 or 8 hex digits.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    /// A bare word that is not a known color keyword.
    #[error("unknown color name '{0}'")]
    UnknownName(String),

    /// A malformed `rgb(...)` / `rgba(...)` expression.
    #[error("invalid color function '{0}'")]
    InvalidFunction(String),

    /// A single component of a color function could not be used.
    #[error("invalid component '{component}' in '{input}'")]
    InvalidComponent { component: String, input: String },
}

impl ColorError {
    /// Create a component error.
    pub fn invalid_component(component: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            input: input.into(),
        }
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
