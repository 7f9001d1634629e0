//! Ordered rule tables for button color channels.
//!
//! Each channel is a list of named rules tried in order; the first rule that
//! returns a value wins, and the table's fallback covers everything else.
//! Keeping precedence as data lets each rule be checked on its own.

use tactile_render::Color;

use crate::button::{ButtonConfig, DarkMode};
use crate::theme::Theme;

use super::engine::Background;

/// Fill of a raised, disabled button.
pub const DISABLED_BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 0.12);
/// Label color of a disabled button.
pub const DISABLED_TEXT: Color = Color::new(0.0, 0.0, 0.0, 0.26);
/// Fill of a plain raised button marked dark.
pub const DARK_SURFACE: Color = Color::BLACK;
/// Fill of a plain raised button otherwise.
pub const LIGHT_SURFACE: Color = Color::WHITE;

/// A single named rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule<I, T> {
    pub name: &'static str,
    pub apply: fn(&I) -> Option<T>,
}

/// The rule used when nothing else matched.
#[derive(Debug, Clone, Copy)]
pub struct Fallback<I, T> {
    pub name: &'static str,
    pub apply: fn(&I) -> T,
}

/// The outcome of evaluating a rule set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMatch<T> {
    /// Name of the rule that produced the value.
    pub rule: &'static str,
    pub value: T,
}

/// An ordered, first-match-wins rule table for one channel.
#[derive(Debug)]
pub struct RuleSet<I: 'static, T: 'static> {
    pub channel: &'static str,
    pub rules: &'static [Rule<I, T>],
    pub fallback: Fallback<I, T>,
}

impl<I: 'static, T: std::fmt::Debug + 'static> RuleSet<I, T> {
    /// Evaluate the table and report which rule matched.
    pub fn matching(&self, input: &I) -> RuleMatch<T> {
        let found = self
            .rules
            .iter()
            .find_map(|rule| (rule.apply)(input).map(|value| RuleMatch { rule: rule.name, value }));
        let matched = found.unwrap_or_else(|| RuleMatch {
            rule: self.fallback.name,
            value: (self.fallback.apply)(input),
        });
        tracing::trace!(
            target: "tactile_style::resolve",
            channel = self.channel,
            rule = matched.rule,
            value = ?matched.value,
            "rule matched"
        );
        matched
    }

    /// Evaluate the table.
    pub fn evaluate(&self, input: &I) -> T {
        self.matching(input).value
    }

    /// Names of all rules in precedence order, fallback last.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .map(|rule| rule.name)
            .chain(std::iter::once(self.fallback.name))
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// The configuration and theme fields the color rules read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonFacts {
    pub disabled: bool,
    pub raised: bool,
    pub primary: bool,
    pub dark: DarkMode,
    pub color: Option<Color>,
    pub theme_primary: Color,
}

impl ButtonFacts {
    /// Extract the facts from a configuration and theme.
    pub fn new(config: &ButtonConfig, theme: &Theme) -> Self {
        Self {
            disabled: config.disabled,
            raised: config.raised,
            primary: config.primary,
            dark: config.dark,
            color: config.color,
            theme_primary: theme.palette.primary,
        }
    }
}

/// Input to the darkness rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarknessInput {
    pub dark: DarkMode,
    pub background: Background,
}

/// Input to the text color rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextInput {
    pub facts: ButtonFacts,
    pub is_dark: bool,
}

fn contrast(is_dark: bool) -> Color {
    if is_dark { Color::WHITE } else { Color::BLACK }
}

// =============================================================================
// Background
// =============================================================================

fn flat_background(f: &ButtonFacts) -> Option<Background> {
    (!f.raised).then_some(Background::Transparent)
}

fn disabled_background(f: &ButtonFacts) -> Option<Background> {
    f.disabled.then_some(Background::Fill(DISABLED_BACKGROUND))
}

fn custom_background(f: &ButtonFacts) -> Option<Background> {
    f.color.map(Background::Fill)
}

fn primary_background(f: &ButtonFacts) -> Option<Background> {
    f.primary.then_some(Background::Fill(f.theme_primary))
}

fn surface_background(f: &ButtonFacts) -> Background {
    match f.dark {
        DarkMode::Dark => Background::Fill(DARK_SURFACE),
        DarkMode::Auto | DarkMode::Light => Background::Fill(LIGHT_SURFACE),
    }
}

/// Background precedence: flat, disabled, custom color, primary, surface.
pub static BACKGROUND_RULES: RuleSet<ButtonFacts, Background> = RuleSet {
    channel: "background",
    rules: &[
        Rule { name: "flat", apply: flat_background },
        Rule { name: "disabled", apply: disabled_background },
        Rule { name: "custom", apply: custom_background },
        Rule { name: "primary", apply: primary_background },
    ],
    fallback: Fallback { name: "surface", apply: surface_background },
};

// =============================================================================
// Darkness
// =============================================================================

fn explicit_darkness(i: &DarknessInput) -> Option<bool> {
    i.dark.explicit()
}

fn transparent_darkness(i: &DarknessInput) -> Option<bool> {
    i.background.is_transparent().then_some(false)
}

fn computed_darkness(i: &DarknessInput) -> bool {
    i.background.color().is_dark()
}

/// Darkness precedence: explicit override, transparent, perceived lightness.
pub static DARKNESS_RULES: RuleSet<DarknessInput, bool> = RuleSet {
    channel: "is_dark",
    rules: &[
        Rule { name: "explicit", apply: explicit_darkness },
        Rule { name: "transparent", apply: transparent_darkness },
    ],
    fallback: Fallback { name: "lightness", apply: computed_darkness },
};

// =============================================================================
// Text
// =============================================================================

fn disabled_text(i: &TextInput) -> Option<Color> {
    i.facts.disabled.then_some(DISABLED_TEXT)
}

fn raised_text(i: &TextInput) -> Option<Color> {
    i.facts.raised.then(|| contrast(i.is_dark))
}

fn custom_text(i: &TextInput) -> Option<Color> {
    i.facts.color
}

fn primary_text(i: &TextInput) -> Option<Color> {
    i.facts.primary.then_some(i.facts.theme_primary)
}

fn contrast_text(i: &TextInput) -> Color {
    contrast(i.is_dark)
}

/// Text precedence: disabled, raised contrast, custom color, primary, contrast.
pub static TEXT_RULES: RuleSet<TextInput, Color> = RuleSet {
    channel: "text",
    rules: &[
        Rule { name: "disabled", apply: disabled_text },
        Rule { name: "raised", apply: raised_text },
        Rule { name: "custom", apply: custom_text },
        Rule { name: "primary", apply: primary_text },
    ],
    fallback: Fallback { name: "contrast", apply: contrast_text },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> ButtonFacts {
        ButtonFacts::new(&ButtonConfig::new("Test"), &Theme::light())
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = BACKGROUND_RULES.rule_names().collect();
        assert_eq!(names, ["flat", "disabled", "custom", "primary", "surface"]);

        let names: Vec<_> = DARKNESS_RULES.rule_names().collect();
        assert_eq!(names, ["explicit", "transparent", "lightness"]);

        let names: Vec<_> = TEXT_RULES.rule_names().collect();
        assert_eq!(names, ["disabled", "raised", "custom", "primary", "contrast"]);
    }

    #[test]
    fn test_flat_wins_over_everything() {
        let input = ButtonFacts {
            disabled: true,
            primary: true,
            color: Some(Color::RED),
            dark: DarkMode::Dark,
            ..facts()
        };
        let matched = BACKGROUND_RULES.matching(&input);
        assert_eq!(matched.rule, "flat");
        assert_eq!(matched.value, Background::Transparent);
    }

    #[test]
    fn test_disabled_beats_custom_and_primary() {
        let input = ButtonFacts {
            raised: true,
            disabled: true,
            primary: true,
            color: Some(Color::RED),
            ..facts()
        };
        let matched = BACKGROUND_RULES.matching(&input);
        assert_eq!(matched.rule, "disabled");
        assert_eq!(matched.value, Background::Fill(DISABLED_BACKGROUND));
    }

    #[test]
    fn test_custom_beats_primary() {
        let input = ButtonFacts {
            raised: true,
            primary: true,
            color: Some(Color::RED),
            ..facts()
        };
        assert_eq!(BACKGROUND_RULES.evaluate(&input), Background::Fill(Color::RED));
    }

    #[test]
    fn test_surface_fallback() {
        let raised = ButtonFacts { raised: true, ..facts() };
        let matched = BACKGROUND_RULES.matching(&raised);
        assert_eq!(matched.rule, "surface");
        assert_eq!(matched.value, Background::Fill(LIGHT_SURFACE));

        let dark = ButtonFacts { dark: DarkMode::Dark, ..raised };
        assert_eq!(BACKGROUND_RULES.evaluate(&dark), Background::Fill(DARK_SURFACE));

        let light = ButtonFacts { dark: DarkMode::Light, ..raised };
        assert_eq!(BACKGROUND_RULES.evaluate(&light), Background::Fill(LIGHT_SURFACE));
    }

    #[test]
    fn test_explicit_darkness_ignores_background() {
        let input = DarknessInput {
            dark: DarkMode::Dark,
            background: Background::Fill(Color::WHITE),
        };
        let matched = DARKNESS_RULES.matching(&input);
        assert_eq!(matched.rule, "explicit");
        assert!(matched.value);

        let input = DarknessInput {
            dark: DarkMode::Light,
            background: Background::Transparent,
        };
        assert!(!DARKNESS_RULES.evaluate(&input));
    }

    #[test]
    fn test_transparent_is_light() {
        let input = DarknessInput {
            dark: DarkMode::Auto,
            background: Background::Transparent,
        };
        let matched = DARKNESS_RULES.matching(&input);
        assert_eq!(matched.rule, "transparent");
        assert!(!matched.value);
    }

    #[test]
    fn test_computed_darkness() {
        let on = |color| DarknessInput {
            dark: DarkMode::Auto,
            background: Background::Fill(color),
        };
        assert!(DARKNESS_RULES.evaluate(&on(Color::BLACK)));
        assert!(!DARKNESS_RULES.evaluate(&on(Color::WHITE)));
        // The disabled tint is translucent black; alpha is ignored
        assert!(DARKNESS_RULES.evaluate(&on(DISABLED_BACKGROUND)));
    }

    #[test]
    fn test_text_rules() {
        let base = facts();

        let disabled = TextInput {
            facts: ButtonFacts { disabled: true, raised: true, color: Some(Color::RED), ..base },
            is_dark: true,
        };
        assert_eq!(TEXT_RULES.evaluate(&disabled), DISABLED_TEXT);

        let raised_custom = TextInput {
            facts: ButtonFacts { raised: true, color: Some(Color::RED), ..base },
            is_dark: true,
        };
        let matched = TEXT_RULES.matching(&raised_custom);
        assert_eq!(matched.rule, "raised");
        assert_eq!(matched.value, Color::WHITE);

        let flat_custom = TextInput {
            facts: ButtonFacts { color: Some(Color::RED), primary: true, ..base },
            is_dark: false,
        };
        assert_eq!(TEXT_RULES.evaluate(&flat_custom), Color::RED);

        let flat_primary = TextInput {
            facts: ButtonFacts { primary: true, ..base },
            is_dark: false,
        };
        assert_eq!(TEXT_RULES.evaluate(&flat_primary), base.theme_primary);

        let plain_dark = TextInput { facts: base, is_dark: true };
        let matched = TEXT_RULES.matching(&plain_dark);
        assert_eq!(matched.rule, "contrast");
        assert_eq!(matched.value, Color::WHITE);
    }
}
