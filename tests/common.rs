use serde_json::json;

use brochure::models::*;

pub fn get_seed_theme() -> ColorTheme {
    ColorTheme {
        id: Some(7),
        name: "Ocean".to_string(),
        primary_color: "#0EA5E9".to_string(),
        secondary_color: "#0F172A".to_string(),
        accent_color: "#F97316".to_string(),
        neutral_color: "#E2E8F0".to_string(),
        background_color: "#FFFFFF".to_string(),
        text_color: "#0F172A".to_string(),
    }
}

pub fn get_seed_theme_gray_background() -> ColorTheme {
    ColorTheme {
        background_color: FALLBACK_NEUTRAL_GRAY.to_string(),
        ..get_seed_theme()
    }
}

pub fn raw_block(kind: &str, value: serde_json::Value) -> RawBlock {
    RawBlock {
        id: Some("blk-0001".to_string()),
        kind: kind.to_string(),
        value,
    }
}

pub fn get_seed_cta_block() -> RawBlock {
    raw_block("cta", json!({ "title": "Go" }))
}

pub fn get_seed_faq_block() -> RawBlock {
    raw_block(
        "faq",
        json!({
            "title": "Common questions",
            "items": [
                { "question": "Is it fast?", "answer": "Yes." },
                { "question": "Is it safe?", "answer": "Also yes." }
            ]
        }),
    )
}

pub fn get_seed_unknown_block() -> RawBlock {
    raw_block("unknown_type", json!({}))
}

pub fn get_seed_nav_entry(title: Option<&str>, url: Option<&str>) -> RawNavEntry {
    RawNavEntry {
        id: Some(1),
        title: title.map(str::to_string),
        url: url.map(str::to_string),
        page_slug: None,
        link_type: Some("url".to_string()),
        order: Some(1),
        children: Vec::new(),
    }
}
