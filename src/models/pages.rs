//! Page documents as fetched from the CMS read API.
//!
//! The API wraps lists inconsistently: top-level collections arrive as
//! `{"items": [...]}`, while some nested fields arrive either bare or under
//! their own wrapper (`how_it_works_steps.steps`, `benefits.items`). The
//! serde helpers here flatten all of those to plain `Vec`s at the boundary,
//! so the UI never sees a wrapper object or a missing list.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::blocks::RawBlock;
use super::items::{
    BenefitItem, Card, CardSection, FaqItem, FeatureItem, GalleryImage, HowItWorksStep,
    PricingPlan, TeamMember, Testimonial,
};
use super::nav::RawNavEntry;
use super::theme::ColorTheme;
use super::widgets::Widget;

/// The `{items: [...]}` envelope used by every collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Unwraps to the flat list the UI works with.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Accepts `{"items": [...]}`, a bare array, or null, yielding a flat list.
pub fn items_or_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Wrapped {
            #[serde(default = "Vec::new")]
            items: Vec<T>,
        },
        Bare(Vec<T>),
    }

    Ok(match Option::<Repr<T>>::deserialize(deserializer)? {
        Some(Repr::Wrapped { items }) => items,
        Some(Repr::Bare(items)) => items,
        None => Vec::new(),
    })
}

/// Deserializes a `dynamic_content` array one row at a time; a row that is
/// not even a readable block envelope is logged and dropped rather than
/// failing the whole page document.
pub fn raw_blocks<'de, D>(deserializer: D) -> Result<Vec<RawBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<RawBlock>(row) {
            Ok(block) => Some(block),
            Err(e) => {
                log::warn!("Skipping unreadable content block row: {e}");
                None
            }
        })
        .collect())
}

/// Accepts `{"steps": [...]}`, a bare array, or null, yielding a flat list.
pub fn steps_or_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Wrapped {
            #[serde(default = "Vec::new")]
            steps: Vec<T>,
        },
        Bare(Vec<T>),
    }

    Ok(match Option::<Repr<T>>::deserialize(deserializer)? {
        Some(Repr::Wrapped { steps }) => steps,
        Some(Repr::Bare(steps)) => steps,
        None => Vec::new(),
    })
}

/// The main landing page document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingPageData {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,

    #[serde(default)]
    pub hero_heading: Option<String>,
    #[serde(default)]
    pub hero_subheading: Option<String>,
    #[serde(default)]
    pub hero_cta_text: Option<String>,
    #[serde(default)]
    pub hero_cta_url: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,

    #[serde(default, deserialize_with = "items_or_list")]
    pub features: Vec<FeatureItem>,

    #[serde(default)]
    pub problem_heading: Option<String>,
    #[serde(default)]
    pub problem_description: Option<String>,
    #[serde(default)]
    pub solution_heading: Option<String>,
    #[serde(default)]
    pub solution_description: Option<String>,

    #[serde(default, deserialize_with = "steps_or_list")]
    pub how_it_works_steps: Vec<HowItWorksStep>,

    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub video_title: Option<String>,

    #[serde(default, deserialize_with = "items_or_list")]
    pub benefits: Vec<BenefitItem>,

    #[serde(default, deserialize_with = "items_or_list")]
    pub pricing_plans: Vec<PricingPlan>,

    #[serde(default, deserialize_with = "items_or_list")]
    pub card_sections: Vec<CardSection>,

    #[serde(default, deserialize_with = "raw_blocks")]
    pub dynamic_content: Vec<RawBlock>,

    #[serde(default, deserialize_with = "items_or_list")]
    pub testimonials: Vec<Testimonial>,

    #[serde(default, deserialize_with = "items_or_list")]
    pub faqs: Vec<FaqItem>,

    #[serde(default)]
    pub cta_heading: Option<String>,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub cta_url: Option<String>,
    #[serde(default)]
    pub secondary_cta_heading: Option<String>,
    #[serde(default)]
    pub secondary_cta_text: Option<String>,
    #[serde(default)]
    pub secondary_cta_url: Option<String>,

    #[serde(default)]
    pub section_order: Vec<String>,

    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
}

/// A feature page (one per product module).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesPageData {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub module_slug: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub intro_heading: Option<String>,
    #[serde(default)]
    pub intro_text: Option<String>,
    #[serde(default, deserialize_with = "items_or_list")]
    pub benefits: Vec<BenefitItem>,
    #[serde(default, deserialize_with = "items_or_list")]
    pub cards: Vec<Card>,
    #[serde(default, deserialize_with = "raw_blocks")]
    pub dynamic_content: Vec<RawBlock>,
    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
}

/// About / legal / generic information page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InformationPageData {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "raw_blocks")]
    pub dynamic_content: Vec<RawBlock>,
    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostData {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "raw_blocks")]
    pub dynamic_content: Vec<RawBlock>,
    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryPageData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "items_or_list")]
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPageData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "items_or_list")]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffiliatePageData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub signup_url: Option<String>,
    #[serde(default, deserialize_with = "raw_blocks")]
    pub dynamic_content: Vec<RawBlock>,
    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
}

/// Site-wide settings: navigation, branding, embeddable widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "items_or_list")]
    pub navigation: Vec<RawNavEntry>,
    #[serde(default, deserialize_with = "items_or_list")]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub default_theme: Option<ColorTheme>,
}
