//! Dynamic content blocks.
//!
//! The CMS emits an open-ended list of `{id, type, value}` rows. Rows are
//! parsed at the boundary into the closed [`ContentBlock`] enum; a row whose
//! type is unknown or whose payload fails its schema is logged and skipped,
//! never fatal, so one bad block cannot take out the rest of the page.

use serde::{Deserialize, Deserializer, Serialize};

use super::items::{Card, FaqItem, PricingPlan, Testimonial};

/// A content-block row exactly as the CMS delivers it. The envelope is
/// deliberately lenient: ids arrive as strings or numbers depending on the
/// CMS version, and a row without a `type` still deserializes so it can be
/// skipped at parse instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(default, deserialize_with = "id_string_or_number")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

fn id_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|id| match id {
        Repr::Text(text) => text,
        Repr::Number(number) => number.to_string(),
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextValue {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoValue {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub autoplay: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardGridValue {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaValue {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqValue {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingValue {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsValue {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageValue {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacerValue {
    #[serde(default)]
    pub size: Option<u32>,
}

/// Every block kind the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    RichText(RichTextValue),
    Video(VideoValue),
    CardGrid(CardGridValue),
    Cta(CtaValue),
    Faq(FaqValue),
    Pricing(PricingValue),
    Testimonials(TestimonialsValue),
    Image(ImageValue),
    Spacer(SpacerValue),
}

impl ContentBlock {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RichText(_) => "rich_text",
            Self::Video(_) => "video",
            Self::CardGrid(_) => "card_grid",
            Self::Cta(_) => "cta",
            Self::Faq(_) => "faq",
            Self::Pricing(_) => "pricing",
            Self::Testimonials(_) => "testimonials",
            Self::Image(_) => "image",
            Self::Spacer(_) => "spacer",
        }
    }

    /// Parses one raw row. Legacy aliases are folded here (`feature_grid`
    /// and `card_grid` were historically separate registry entries for the
    /// same renderer).
    pub fn parse(raw: &RawBlock) -> Option<Self> {
        let value = raw.value.clone();
        let parsed = match raw.kind.as_str() {
            "rich_text" | "text" => serde_json::from_value(value).map(Self::RichText),
            "video" => serde_json::from_value(value).map(Self::Video),
            "card_grid" | "feature_grid" => serde_json::from_value(value).map(Self::CardGrid),
            "cta" | "call_to_action" => serde_json::from_value(value).map(Self::Cta),
            "faq" => serde_json::from_value(value).map(Self::Faq),
            "pricing" | "pricing_table" => serde_json::from_value(value).map(Self::Pricing),
            "testimonials" => serde_json::from_value(value).map(Self::Testimonials),
            "image" => serde_json::from_value(value).map(Self::Image),
            "spacer" => serde_json::from_value(value).map(Self::Spacer),
            other => {
                log::warn!("Skipping content block with unknown type {other:?}");
                return None;
            }
        };

        match parsed {
            Ok(block) => Some(block),
            Err(e) => {
                log::warn!("Skipping malformed {:?} block: {e}", raw.kind);
                None
            }
        }
    }

    /// Parses a whole `dynamic_content` array, preserving input order and
    /// dropping rows that fail [`ContentBlock::parse`].
    pub fn parse_all(raw: &[RawBlock]) -> Vec<Self> {
        raw.iter().filter_map(Self::parse).collect()
    }
}
