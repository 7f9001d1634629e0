//! Prints the resolved frame of a button in each of its common states.
//!
//! Run with:
//! ```sh
//! cargo run -p tactile --example button_states -- [theme.toml]
//! ```
//!
//! Set `RUST_LOG=tactile=debug,tactile_style=trace` to see rule matches and
//! elevation transitions.

use std::time::Duration;

use tactile::logging::directive;
use tactile::prelude::*;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn describe(name: &str, frame: &ButtonFrame) {
    let adornment = match &frame.adornment {
        Adornment::None => "-".to_string(),
        Adornment::Spinner { .. } => "spinner".to_string(),
        Adornment::Icon { name, .. } => format!("icon:{name}"),
    };
    let ripple = frame
        .ripple
        .map(|ripple| ripple.color.to_rgba_string())
        .unwrap_or_else(|| "none".to_string());

    println!(
        "{name:<16} {:<12} {:<26} elev {:>4.2}  {:<12} ripple {ripple}",
        frame.label.text,
        frame.surface.background.to_string(),
        frame.surface.elevation,
        adornment,
    );
    println!("{:<16} text {}", "", frame.label.color.to_rgba_string());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(tracing::Level::INFO)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let theme = match std::env::args().nth(1) {
        Some(path) => Theme::from_file(path)?,
        None => Theme::light(),
    };
    tracing::info!(mode = ?theme.mode, primary = %theme.primary(), "using theme");

    let buttons = [
        ("flat", Button::new("Cancel")),
        ("flat custom", Button::new("Learn more").with_color(theme.palette.accent)),
        ("raised", Button::new("Save").with_raised(true)),
        ("raised primary", Button::new("Send").with_raised(true).with_primary(true).with_icon("send")),
        ("raised dark", Button::new("Night").with_raised(true).with_dark(true)),
        ("loading", Button::new("Upload").with_raised(true).with_icon("upload").with_loading(true)),
        ("disabled", Button::new("Nope").with_raised(true).with_disabled(true)),
    ];

    for (name, button) in &buttons {
        button.config().validate()?;
        describe(name, &button.frame(&theme));
    }

    println!();
    let (_, mut pressed) = buttons
        .into_iter()
        .find(|(name, _)| *name == "raised primary")
        .ok_or("missing raised primary button")?;
    pressed.set_on_press(|| tracing::info!("send pressed"));

    pressed.press_in();
    for _ in 0..6 {
        pressed.tick(FRAME);
    }
    describe("half pressed", &pressed.frame(&theme));

    pressed.press_out();
    pressed.press();
    while pressed.elevation().is_animating() {
        pressed.tick(FRAME);
    }
    describe("released", &pressed.frame(&theme));

    Ok(())
}
