mod common;

#[cfg(test)]
pub mod theme_tests {
    use super::common::*;
    use brochure::models::*;

    #[test]
    fn test_css_properties_covers_every_owned_name() {
        let theme = get_seed_theme();
        let properties = theme.css_properties();
        assert_eq!(properties.len(), CSS_PROPERTY_NAMES.len());
        for ((name, _), expected) in properties.iter().zip(CSS_PROPERTY_NAMES) {
            assert_eq!(*name, expected);
        }
    }

    #[test]
    fn test_application_is_idempotent() {
        // Property derivation is pure; applying twice writes the same
        // values as applying once.
        let theme = get_seed_theme();
        assert_eq!(theme.css_properties(), theme.css_properties());
        assert_eq!(theme.css_root_block(), theme.css_root_block());
    }

    #[test]
    fn test_gray_background_is_coerced_to_white() {
        let theme = get_seed_theme_gray_background();
        assert_eq!(theme.effective_background(), WHITE);

        let (_, background) = theme
            .css_properties()
            .into_iter()
            .find(|(name, _)| *name == "--color-background")
            .expect("background property present");
        assert_eq!(background, WHITE);
    }

    #[test]
    fn test_gray_coercion_is_case_insensitive() {
        let theme = ColorTheme {
            background_color: FALLBACK_NEUTRAL_GRAY.to_lowercase(),
            ..get_seed_theme()
        };
        assert_eq!(theme.effective_background(), WHITE);
    }

    #[test]
    fn test_non_gray_background_passes_through() {
        let theme = ColorTheme {
            background_color: "#ABCDEF".to_string(),
            ..get_seed_theme()
        };
        assert_eq!(theme.effective_background(), "#ABCDEF");
    }

    #[test]
    fn test_css_root_block_contains_every_property() {
        let block = get_seed_theme().css_root_block();
        assert!(block.starts_with(":root{"));
        for name in CSS_PROPERTY_NAMES {
            assert!(block.contains(name), "missing {name} in {block}");
        }
    }

    #[test]
    fn test_fallback_theme_background_is_white() {
        assert_eq!(ColorTheme::fallback().effective_background(), WHITE);
    }

    #[test]
    fn test_theme_deserializes_from_cms_payload() {
        let theme: ColorTheme = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Forest",
            "primary_color": "#166534",
            "secondary_color": "#14532D",
            "accent_color": "#EAB308",
            "neutral_color": "#F5F5F4",
            "background_color": "#FFFFFF",
            "text_color": "#052E16"
        }))
        .unwrap();
        assert_eq!(theme.name, "Forest");
        assert_eq!(theme.primary_color, "#166534");
    }
}
