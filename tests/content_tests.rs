mod common;

#[cfg(test)]
pub mod block_tests {
    use serde_json::json;

    use super::common::*;
    use brochure::models::*;

    #[test]
    fn test_parse_cta_block_success() {
        let block = ContentBlock::parse(&get_seed_cta_block()).expect("cta should parse");
        match block {
            ContentBlock::Cta(value) => {
                assert_eq!(value.title, "Go");
                assert!(value.button_text.is_none());
            }
            other => panic!("expected cta, got {}", other.kind()),
        }
    }

    #[test]
    fn test_parse_unknown_type_is_skipped() {
        assert!(ContentBlock::parse(&get_seed_unknown_block()).is_none());
    }

    #[test]
    fn test_parse_malformed_payload_is_skipped() {
        // cta requires a title
        let block = raw_block("cta", json!({ "description": "no title here" }));
        assert!(ContentBlock::parse(&block).is_none());
    }

    #[test]
    fn test_parse_all_preserves_order_and_drops_failures() {
        let raw = vec![
            get_seed_cta_block(),
            get_seed_unknown_block(),
            get_seed_faq_block(),
            raw_block("video", json!({ "title": "missing url" })),
            raw_block("rich_text", json!({ "content": "<p>hi</p>" })),
        ];

        let blocks = ContentBlock::parse_all(&raw);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind(), "cta");
        assert_eq!(blocks[1].kind(), "faq");
        assert_eq!(blocks[2].kind(), "rich_text");
    }

    #[test]
    fn test_parse_feature_grid_alias_folds_to_card_grid() {
        let legacy = raw_block("feature_grid", json!({ "cards": [{ "title": "A" }] }));
        let current = raw_block("card_grid", json!({ "cards": [{ "title": "A" }] }));

        let legacy = ContentBlock::parse(&legacy).expect("legacy alias should parse");
        let current = ContentBlock::parse(&current).expect("card_grid should parse");
        assert_eq!(legacy, current);
        assert_eq!(legacy.kind(), "card_grid");
    }

    #[test]
    fn test_parse_faq_items_success() {
        let block = ContentBlock::parse(&get_seed_faq_block()).expect("faq should parse");
        match block {
            ContentBlock::Faq(value) => {
                assert_eq!(value.items.len(), 2);
                assert_eq!(value.items[0].question, "Is it fast?");
            }
            other => panic!("expected faq, got {}", other.kind()),
        }
    }
}

#[cfg(test)]
pub mod normalization_tests {
    use serde_json::json;

    use brochure::models::*;

    #[test]
    fn test_list_response_unwraps_items() {
        let list: ListResponse<BlogPostSummary> = serde_json::from_value(json!({
            "items": [{ "title": "A", "slug": "a" }]
        }))
        .unwrap();

        let items = list.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "a");
    }

    #[test]
    fn test_list_response_empty_items_is_empty_vec() {
        let list: ListResponse<BlogPostSummary> =
            serde_json::from_value(json!({ "items": [] })).unwrap();
        assert!(list.into_items().is_empty());
    }

    #[test]
    fn test_list_response_absent_items_is_empty_vec() {
        let list: ListResponse<BlogPostSummary> = serde_json::from_value(json!({})).unwrap();
        assert!(list.into_items().is_empty());
    }

    #[test]
    fn test_how_it_works_steps_wrapper_is_flattened() {
        let list: ListResponse<LandingPageData> = serde_json::from_value(json!({
            "items": [{ "title": "A", "how_it_works_steps": { "steps": [{ "step": 1 }] } }]
        }))
        .unwrap();

        let page = &list.into_items()[0];
        assert_eq!(page.how_it_works_steps.len(), 1);
        assert_eq!(page.how_it_works_steps[0].step, Some(1));
    }

    #[test]
    fn test_how_it_works_steps_bare_array_also_accepted() {
        let page: LandingPageData = serde_json::from_value(json!({
            "how_it_works_steps": [{ "step": 2, "title": "Do it" }]
        }))
        .unwrap();

        assert_eq!(page.how_it_works_steps.len(), 1);
        assert_eq!(page.how_it_works_steps[0].title.as_deref(), Some("Do it"));
    }

    #[test]
    fn test_benefits_items_wrapper_is_flattened() {
        let page: LandingPageData = serde_json::from_value(json!({
            "benefits": { "items": [{ "title": "Fast" }] }
        }))
        .unwrap();

        assert_eq!(page.benefits.len(), 1);
        assert_eq!(page.benefits[0].title.as_deref(), Some("Fast"));
    }

    #[test]
    fn test_absent_lists_never_surface_as_null() {
        let page: LandingPageData = serde_json::from_value(json!({ "title": "Bare" })).unwrap();
        assert!(page.features.is_empty());
        assert!(page.benefits.is_empty());
        assert!(page.how_it_works_steps.is_empty());
        assert!(page.dynamic_content.is_empty());
        assert!(page.section_order.is_empty());
    }

    #[test]
    fn test_null_list_field_is_empty_vec() {
        let page: LandingPageData =
            serde_json::from_value(json!({ "benefits": null })).unwrap();
        assert!(page.benefits.is_empty());
    }

    #[test]
    fn test_numeric_block_id_does_not_fail_document() {
        let page: LandingPageData = serde_json::from_value(json!({
            "dynamic_content": [{ "id": 7, "type": "cta", "value": { "title": "Go" } }]
        }))
        .unwrap();

        assert_eq!(page.dynamic_content.len(), 1);
        assert_eq!(page.dynamic_content[0].id.as_deref(), Some("7"));
        assert_eq!(ContentBlock::parse_all(&page.dynamic_content).len(), 1);
    }

    #[test]
    fn test_block_row_missing_type_is_skipped_not_fatal() {
        let page: LandingPageData = serde_json::from_value(json!({
            "title": "A",
            "dynamic_content": [
                { "value": {} },
                { "type": "rich_text", "value": { "content": "<p>hi</p>" } }
            ]
        }))
        .unwrap();

        // The typeless row survives the envelope and is dropped at parse;
        // its sibling still renders.
        assert_eq!(page.dynamic_content.len(), 2);
        let blocks = ContentBlock::parse_all(&page.dynamic_content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind(), "rich_text");
    }

    #[test]
    fn test_unreadable_block_row_is_dropped_not_fatal() {
        let page: LandingPageData = serde_json::from_value(json!({
            "dynamic_content": [42, { "type": "cta", "value": { "title": "Go" } }]
        }))
        .unwrap();

        assert_eq!(page.dynamic_content.len(), 1);
        assert_eq!(page.dynamic_content[0].kind, "cta");
    }
}

#[cfg(test)]
pub mod section_tests {
    use brochure::models::*;

    #[test]
    fn test_resolve_section_order_respects_cms_order() {
        let keys = vec![
            "faq".to_string(),
            "header".to_string(),
            "pricing".to_string(),
        ];
        assert_eq!(
            resolve_section_order(&keys),
            vec![SectionKey::Faq, SectionKey::Header, SectionKey::Pricing]
        );
    }

    #[test]
    fn test_resolve_section_order_empty_uses_default() {
        assert_eq!(resolve_section_order(&[]), DEFAULT_SECTION_ORDER.to_vec());
    }

    #[test]
    fn test_resolve_section_order_drops_unknown_keys() {
        let keys = vec!["header".to_string(), "hologram".to_string()];
        assert_eq!(resolve_section_order(&keys), vec![SectionKey::Header]);
    }

    #[test]
    fn test_resolve_section_order_all_unknown_uses_default() {
        let keys = vec!["bogus".to_string()];
        assert_eq!(resolve_section_order(&keys), DEFAULT_SECTION_ORDER.to_vec());
    }

    #[test]
    fn test_section_key_round_trips_through_as_str() {
        for key in DEFAULT_SECTION_ORDER {
            assert_eq!(key.as_str().parse::<SectionKey>(), Ok(key));
        }
    }
}

#[cfg(test)]
pub mod nav_tests {
    use super::common::*;
    use brochure::models::*;

    #[test]
    fn test_build_navigation_sorts_by_order() {
        let mut first = get_seed_nav_entry(Some("B"), Some("/b"));
        first.order = Some(2);
        let mut second = get_seed_nav_entry(Some("A"), Some("/a"));
        second.order = Some(1);

        let items = build_navigation(&[first, second]);
        assert_eq!(items[0].title, "A");
        assert_eq!(items[1].title, "B");
    }

    #[test]
    fn test_navigation_item_infers_title_from_url() {
        let entry = get_seed_nav_entry(None, Some("/pricing-and-plans"));
        let item = NavigationItem::from_raw(&entry);
        assert_eq!(item.title, "Pricing And Plans");
    }

    #[test]
    fn test_navigation_item_infers_url_from_page_slug() {
        let mut entry = get_seed_nav_entry(Some("Team"), None);
        entry.page_slug = Some("team".to_string());
        let item = NavigationItem::from_raw(&entry);
        assert_eq!(item.url, "/team");
    }

    #[test]
    fn test_navigation_item_without_url_or_slug_is_inert() {
        let entry = get_seed_nav_entry(Some("Soon"), None);
        let item = NavigationItem::from_raw(&entry);
        assert_eq!(item.url, "#");
    }

    #[test]
    fn test_navigation_item_invalid_link_type_defaults_to_url() {
        let mut entry = get_seed_nav_entry(Some("X"), Some("/x"));
        entry.link_type = Some("mystery".to_string());
        let item = NavigationItem::from_raw(&entry);
        assert_eq!(item.link_type, LinkType::Url);
    }
}

#[cfg(test)]
pub mod error_tests {
    use brochure::common::CmsError;

    #[test]
    fn test_http_error_display_contains_status_code() {
        let err = CmsError::Http {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"), "got: {message}");
        assert!(message.contains("Internal Server Error"));
    }

    #[test]
    fn test_network_and_decode_errors_keep_their_cause() {
        let err = CmsError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
        let err = CmsError::Decode("expected value at line 1".to_string());
        assert!(err.to_string().contains("Malformed"));
    }
}
