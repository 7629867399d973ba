use serde::{Deserialize, Serialize};

/// Named landing-page sections the CMS may order via `section_order`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Header,
    Features,
    ProblemSolution,
    HowItWorks,
    Video,
    Benefits,
    Pricing,
    CardSections,
    DynamicContent,
    Testimonials,
    Faq,
    Cta,
    SecondaryCta,
    Footer,
}

/// Order used when a page document carries no `section_order`.
pub const DEFAULT_SECTION_ORDER: [SectionKey; 14] = [
    SectionKey::Header,
    SectionKey::Features,
    SectionKey::ProblemSolution,
    SectionKey::HowItWorks,
    SectionKey::Video,
    SectionKey::Benefits,
    SectionKey::Pricing,
    SectionKey::CardSections,
    SectionKey::DynamicContent,
    SectionKey::Testimonials,
    SectionKey::Faq,
    SectionKey::Cta,
    SectionKey::SecondaryCta,
    SectionKey::Footer,
];

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Features => "features",
            Self::ProblemSolution => "problem_solution",
            Self::HowItWorks => "how_it_works",
            Self::Video => "video",
            Self::Benefits => "benefits",
            Self::Pricing => "pricing",
            Self::CardSections => "card_sections",
            Self::DynamicContent => "dynamic_content",
            Self::Testimonials => "testimonials",
            Self::Faq => "faq",
            Self::Cta => "cta",
            Self::SecondaryCta => "secondary_cta",
            Self::Footer => "footer",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "header" => Ok(Self::Header),
            "features" => Ok(Self::Features),
            "problem_solution" => Ok(Self::ProblemSolution),
            "how_it_works" => Ok(Self::HowItWorks),
            "video" => Ok(Self::Video),
            "benefits" => Ok(Self::Benefits),
            "pricing" => Ok(Self::Pricing),
            "card_sections" => Ok(Self::CardSections),
            "dynamic_content" => Ok(Self::DynamicContent),
            "testimonials" => Ok(Self::Testimonials),
            "faq" => Ok(Self::Faq),
            "cta" => Ok(Self::Cta),
            "secondary_cta" => Ok(Self::SecondaryCta),
            "footer" => Ok(Self::Footer),
            _ => Err(format!("invalid section key: {}", s)),
        }
    }
}

/// Resolves a CMS-provided `section_order` into render order. Unknown keys
/// are warned about and dropped; an empty or absent list falls back to
/// [`DEFAULT_SECTION_ORDER`]. There is deliberately one code path for both
/// cases.
pub fn resolve_section_order(keys: &[String]) -> Vec<SectionKey> {
    if keys.is_empty() {
        return DEFAULT_SECTION_ORDER.to_vec();
    }

    let resolved: Vec<SectionKey> = keys
        .iter()
        .filter_map(|key| match key.parse::<SectionKey>() {
            Ok(section) => Some(section),
            Err(_) => {
                log::warn!("Ignoring unknown section key {key:?} in section_order");
                None
            }
        })
        .collect();

    if resolved.is_empty() {
        DEFAULT_SECTION_ORDER.to_vec()
    } else {
        resolved
    }
}
