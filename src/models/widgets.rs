//! Third-party embeddable widgets and the close-detection heuristics the
//! overlay uses against them.
//!
//! The embed scripts are opaque, so closing is detected empirically: by
//! close-button-shaped controls, by the container emptying out, and by the
//! widget's own modal nodes vanishing from the document. The matching rules
//! live here as pure functions so they stay testable away from the DOM.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    ContactWidget,
    HelpdeskWidget,
    W9formWidget,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactWidget => "contact_widget",
            Self::HelpdeskWidget => "helpdesk_widget",
            Self::W9formWidget => "w9form_widget",
        }
    }

    /// Label shown in the overlay menu when several widgets are active.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContactWidget => "Contact us",
            Self::HelpdeskWidget => "Help desk",
            Self::W9formWidget => "W-9 form",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub embed_code: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub data: WidgetData,
}

impl Widget {
    pub fn display_name(&self) -> String {
        self.data
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.kind.label().to_string())
    }
}

/// Container content below this many characters of markup counts as
/// "the widget closed itself and emptied out".
pub const MIN_OPEN_CONTENT_LEN: usize = 80;

/// Class-name fragments that identify stray widget DOM anywhere in the
/// document. Tuned by trial and error against the embeds we ship.
pub const WIDGET_ARTIFACT_HINTS: [&str; 6] = [
    "contact-widget",
    "helpdesk-widget",
    "w9form-widget",
    "widget-modal",
    "widget-overlay",
    "widget-backdrop",
];

/// True when an element looks like the widget's own close control.
pub fn is_close_control(tag: &str, class_name: &str, aria_label: &str) -> bool {
    let aria = aria_label.to_lowercase();
    if aria.contains("close") || aria.contains("dismiss") {
        return true;
    }

    let class = class_name.to_lowercase();
    let closeish = class.contains("close") || class.contains("dismiss");
    closeish && matches!(tag.to_lowercase().as_str(), "button" | "a" | "span" | "div" | "svg")
}

/// True when a class attribute marks an element as widget debris that the
/// teardown sweep should remove.
pub fn is_widget_artifact_class(class_name: &str) -> bool {
    let class = class_name.to_lowercase();
    WIDGET_ARTIFACT_HINTS.iter().any(|hint| class.contains(hint))
}

/// True when the container's remaining markup is too small to still be an
/// open widget.
pub fn content_looks_closed(inner_html: &str) -> bool {
    inner_html.trim().len() < MIN_OPEN_CONTENT_LEN
}
