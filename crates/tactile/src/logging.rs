//! Logging facilities for Tactile.
//!
//! Tactile uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter(tactile::logging::directive(tracing::Level::DEBUG))
//!     .init();
//! ```

use tracing::Level;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Widget crate target.
    pub const TACTILE: &str = "tactile";
    /// Button press handling.
    pub const BUTTON: &str = "tactile::button";
    /// Elevation transitions.
    pub const ELEVATION: &str = "tactile::elevation";
    /// Style crate target.
    pub const STYLE: &str = "tactile_style";
    /// Per-channel rule matches during style resolution.
    pub const RESOLVE: &str = "tactile_style::resolve";
    /// Theme loading.
    pub const THEME: &str = "tactile_style::theme";
}

/// Build a filter directive enabling both crates at `level`.
///
/// ```
/// use tactile::logging::directive;
///
/// assert_eq!(directive(tracing::Level::DEBUG), "tactile=debug,tactile_style=debug");
/// ```
pub fn directive(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    format!("{}={level},{}={level}", targets::TACTILE, targets::STYLE)
}
