use serde::{Deserialize, Serialize};

/// Neutral gray used in the fallback palette. A CMS-delivered background
/// equal to this value is a known bad export and is coerced to white.
pub const FALLBACK_NEUTRAL_GRAY: &str = "#F5F5F5";

/// Substitute applied when the gray-collision rule fires.
pub const WHITE: &str = "#FFFFFF";

/// Custom properties a theme owns on the document root.
pub const CSS_PROPERTY_NAMES: [&str; 6] = [
    "--color-primary",
    "--color-secondary",
    "--color-accent",
    "--color-neutral",
    "--color-background",
    "--color-text",
];

/// Color palette attached to every page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub neutral_color: String,
    pub background_color: String,
    pub text_color: String,
}

impl ColorTheme {
    /// Palette used when a page document carries no theme.
    pub fn fallback() -> Self {
        Self {
            id: None,
            name: "Fallback".to_string(),
            primary_color: "#2563EB".to_string(),
            secondary_color: "#0F172A".to_string(),
            accent_color: "#F59E0B".to_string(),
            neutral_color: FALLBACK_NEUTRAL_GRAY.to_string(),
            background_color: WHITE.to_string(),
            text_color: "#1F2937".to_string(),
        }
    }

    /// Background with the gray-collision rule applied.
    pub fn effective_background(&self) -> &str {
        if self.background_color.eq_ignore_ascii_case(FALLBACK_NEUTRAL_GRAY) {
            WHITE
        } else {
            &self.background_color
        }
    }

    /// The six custom properties published on the document root, in a
    /// stable order. Same input always yields the same output, so applying
    /// a theme twice is indistinguishable from applying it once.
    pub fn css_properties(&self) -> [(&'static str, String); 6] {
        [
            (CSS_PROPERTY_NAMES[0], self.primary_color.clone()),
            (CSS_PROPERTY_NAMES[1], self.secondary_color.clone()),
            (CSS_PROPERTY_NAMES[2], self.accent_color.clone()),
            (CSS_PROPERTY_NAMES[3], self.neutral_color.clone()),
            (CSS_PROPERTY_NAMES[4], self.effective_background().to_string()),
            (CSS_PROPERTY_NAMES[5], self.text_color.clone()),
        ]
    }

    /// Inline `:root` rule for server-rendered documents, so the first
    /// paint is themed before hydration runs.
    pub fn css_root_block(&self) -> String {
        let mut out = String::from(":root{");
        for (name, value) in self.css_properties() {
            out.push_str(name);
            out.push(':');
            out.push_str(&value);
            out.push(';');
        }
        out.push('}');
        out
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::fallback()
    }
}
