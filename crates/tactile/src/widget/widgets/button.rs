//! Raised and flat button widget.
//!
//! This module provides [`Button`], a pressable control with an optional
//! icon or loading spinner, a label, a ripple and an animated elevation.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tactile::prelude::*;
//!
//! let mut button = Button::new("Send").with_raised(true).with_primary(true);
//! button.set_on_press(|| println!("sent"));
//!
//! button.press_in();
//! button.tick(Duration::from_millis(200));
//! assert!(button.press());
//! button.press_out();
//!
//! let frame = button.frame(&Theme::light());
//! assert_eq!(frame.label.text, "SEND");
//! assert_eq!(frame.surface.elevation, 6.0);
//! ```

use std::fmt;
use std::time::Duration;

use tactile_render::{Color, CornerRadii};
use tactile_style::{ButtonConfig, DarkMode, Theme, resolve};

use super::elevation::ElevationController;
use super::frame::{Adornment, ButtonFrame, LabelFrame, Ripple, Surface, metrics};
use crate::logging::targets;

type PressCallback = Box<dyn FnMut()>;

/// A pressable button.
///
/// The button holds its [`ButtonConfig`] and an [`ElevationController`].
/// Colors are resolved fresh for each [`frame`](Self::frame) from the theme
/// passed in, so the same button can be drawn under different themes.
///
/// # Interaction
///
/// - [`press_in`](Self::press_in) and [`press_out`](Self::press_out) drive
///   the elevation of raised buttons.
/// - [`press`](Self::press) fires the `on_press` callback.
///
/// Disabled buttons are not touchable: all three are ignored.
pub struct Button {
    config: ButtonConfig,
    elevation: ElevationController,
    on_press: Option<PressCallback>,
}

impl Button {
    /// Create a flat, enabled button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_config(ButtonConfig::new(label))
    }

    /// Create a button from a full configuration.
    pub fn from_config(config: ButtonConfig) -> Self {
        let elevation = ElevationController::new(config.raised);
        Self {
            config,
            elevation,
            on_press: None,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Get the elevation controller.
    pub fn elevation(&self) -> &ElevationController {
        &self.elevation
    }

    // =========================================================================
    // Label and Icon
    // =========================================================================

    /// Get the label as configured, before upper-casing.
    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Set the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.config.label = label.into();
    }

    /// Get the icon name, if any.
    pub fn icon(&self) -> Option<&str> {
        self.config.icon.as_deref()
    }

    /// Set or clear the icon.
    pub fn set_icon(&mut self, icon: Option<String>) {
        self.config.icon = icon;
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.config.icon = Some(icon.into());
        self
    }

    // =========================================================================
    // Flags
    // =========================================================================

    /// Check if the button is raised.
    pub fn is_raised(&self) -> bool {
        self.config.raised
    }

    /// Set whether the button is raised.
    ///
    /// The elevation picks up the change at the next press.
    pub fn set_raised(&mut self, raised: bool) {
        self.config.raised = raised;
        self.elevation.set_raised(raised);
    }

    /// Set raised using builder pattern.
    ///
    /// Unlike [`set_raised`](Self::set_raised), this also resets the
    /// elevation to its resting value.
    pub fn with_raised(mut self, raised: bool) -> Self {
        self.config.raised = raised;
        self.elevation = ElevationController::new(raised);
        self
    }

    /// Check if the button uses the theme's primary color.
    pub fn is_primary(&self) -> bool {
        self.config.primary
    }

    /// Set whether the button uses the theme's primary color.
    pub fn set_primary(&mut self, primary: bool) {
        self.config.primary = primary;
    }

    /// Set primary using builder pattern.
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.config.primary = primary;
        self
    }

    /// Check if the button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Set whether the button is disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Check if the loading spinner is shown.
    pub fn is_loading(&self) -> bool {
        self.config.loading
    }

    /// Set whether the loading spinner is shown.
    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    /// Set loading using builder pattern.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Get the dark surface override.
    pub fn dark(&self) -> DarkMode {
        self.config.dark
    }

    /// Set the dark surface override.
    pub fn set_dark(&mut self, dark: impl Into<DarkMode>) {
        self.config.dark = dark.into();
    }

    /// Set the dark surface override using builder pattern.
    pub fn with_dark(mut self, dark: impl Into<DarkMode>) -> Self {
        self.set_dark(dark);
        self
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Get the custom color, if any.
    pub fn color(&self) -> Option<Color> {
        self.config.color
    }

    /// Set or clear the custom color.
    ///
    /// A raised button uses it as its fill; a flat one as its label color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.config.color = color;
    }

    /// Set the custom color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.config.color = Some(color);
        self
    }

    /// Get the corner radius.
    pub fn roundness(&self) -> f32 {
        self.config.roundness
    }

    /// Set the corner radius.
    pub fn set_roundness(&mut self, roundness: f32) {
        self.config.roundness = roundness;
    }

    /// Set the corner radius using builder pattern.
    pub fn with_roundness(mut self, roundness: f32) -> Self {
        self.config.roundness = roundness;
        self
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Set the callback fired by [`press`](Self::press).
    pub fn set_on_press(&mut self, on_press: impl FnMut() + 'static) {
        self.on_press = Some(Box::new(on_press));
    }

    /// Set the press callback using builder pattern.
    pub fn with_on_press(mut self, on_press: impl FnMut() + 'static) -> Self {
        self.set_on_press(on_press);
        self
    }

    /// Check if the button reacts to touches.
    pub fn is_touchable(&self) -> bool {
        !self.config.disabled
    }

    /// Handle the start of a touch.
    pub fn press_in(&mut self) {
        if self.is_touchable() {
            self.elevation.on_press_in();
        }
    }

    /// Handle the end of a touch.
    pub fn press_out(&mut self) {
        if self.is_touchable() {
            self.elevation.on_press_out();
        }
    }

    /// Activate the button.
    ///
    /// Returns `true` if a callback was fired.
    pub fn press(&mut self) -> bool {
        if !self.is_touchable() {
            tracing::trace!(target: targets::BUTTON, label = %self.config.label, "press ignored while disabled");
            return false;
        }
        let Some(on_press) = self.on_press.as_mut() else {
            return false;
        };
        tracing::debug!(target: targets::BUTTON, label = %self.config.label, "button pressed");
        on_press();
        true
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self, dt: Duration) {
        self.elevation.tick(dt);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Describe the button as it should be drawn now.
    pub fn frame(&self, theme: &Theme) -> ButtonFrame {
        let style = resolve(&self.config, theme);
        let config = &self.config;

        let elevation = if config.disabled {
            0.0
        } else {
            self.elevation.elevation()
        };

        let adornment = if config.loading {
            Adornment::Spinner {
                color: style.text_color,
            }
        } else if let Some(name) = &config.icon {
            Adornment::Icon {
                name: name.clone(),
                size: metrics::ICON_SIZE,
                color: style.text_color,
            }
        } else {
            Adornment::None
        };

        let ripple = (!config.disabled).then_some(Ripple {
            color: style.ripple_color,
            borderless: true,
            delay_press_in: Duration::ZERO,
        });

        ButtonFrame {
            surface: Surface {
                background: style.background,
                corner_radii: CornerRadii::uniform(style.border_radius),
                elevation,
                margin: metrics::SURFACE_MARGIN,
                min_width: metrics::MIN_WIDTH,
            },
            adornment,
            label: LabelFrame {
                text: config.label.to_uppercase(),
                color: style.text_color,
                font_family: style.font_family,
                max_lines: 1,
                margins: metrics::LABEL_MARGINS,
            },
            ripple,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("config", &self.config)
            .field("elevation", &self.elevation)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

impl From<ButtonConfig> for Button {
    fn from(config: ButtonConfig) -> Self {
        Self::from_config(config)
    }
}
