//! Font family tokens.

/// Font family names per weight.
///
/// Buttons render their label with [`medium`](Self::medium).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTokens {
    pub regular: String,
    pub medium: String,
    pub light: String,
    pub thin: String,
}

impl FontTokens {
    /// The Roboto family, one file per weight.
    pub fn roboto() -> Self {
        Self {
            regular: "Roboto".to_string(),
            medium: "Roboto-Medium".to_string(),
            light: "Roboto-Light".to_string(),
            thin: "Roboto-Thin".to_string(),
        }
    }
}

impl Default for FontTokens {
    fn default() -> Self {
        Self::roboto()
    }
}
