#[cfg(test)]
pub mod widget_tests {
    use serde_json::json;

    use brochure::models::*;

    #[test]
    fn test_widget_deserializes_from_settings_payload() {
        let widget: Widget = serde_json::from_value(json!({
            "type": "contact_widget",
            "data": {
                "id": 4,
                "name": "Talk to us",
                "embed_code": "<div class=\"contact-widget\"></div>",
                "is_active": true
            }
        }))
        .unwrap();

        assert_eq!(widget.kind, WidgetKind::ContactWidget);
        assert!(widget.data.is_active);
        assert_eq!(widget.display_name(), "Talk to us");
    }

    #[test]
    fn test_display_name_falls_back_to_kind_label() {
        let widget = Widget {
            kind: WidgetKind::HelpdeskWidget,
            data: WidgetData::default(),
        };
        assert_eq!(widget.display_name(), "Help desk");
    }

    #[test]
    fn test_close_control_matches_aria_label() {
        assert!(is_close_control("div", "", "Close chat"));
        assert!(is_close_control("span", "", "dismiss"));
    }

    #[test]
    fn test_close_control_matches_close_classes() {
        assert!(is_close_control("button", "chat-close-btn", ""));
        assert!(is_close_control("a", "modal__dismiss", ""));
    }

    #[test]
    fn test_close_control_fails_on_unrelated_element() {
        assert!(!is_close_control("button", "submit-btn", "Send message"));
        assert!(!is_close_control("input", "close-field", ""));
    }

    #[test]
    fn test_artifact_class_matches_known_hints() {
        assert!(is_widget_artifact_class("contact-widget-frame"));
        assert!(is_widget_artifact_class("x-widget-modal open"));
        assert!(!is_widget_artifact_class("hero-section"));
    }

    #[test]
    fn test_content_looks_closed_on_emptied_container() {
        assert!(content_looks_closed(""));
        assert!(content_looks_closed("   <div></div> "));
        let open = "<div class=\"helpdesk-widget\">".to_string() + &"x".repeat(200) + "</div>";
        assert!(!content_looks_closed(&open));
    }
}
