use serde::{Deserialize, Serialize};

/// Navigation entry as the CMS delivers it. Title and URL are both
/// optional; site editors frequently fill in only a page slug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNavEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub page_slug: Option<String>,
    #[serde(default)]
    pub link_type: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub children: Vec<RawNavEntry>,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Page,
    #[default]
    Url,
    Dropdown,
}

impl std::str::FromStr for LinkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page" => Ok(Self::Page),
            "url" => Ok(Self::Url),
            "dropdown" => Ok(Self::Dropdown),
            _ => Err(format!("invalid link type: {}", s)),
        }
    }
}

/// Normalized navigation entry the header renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub link_type: LinkType,
    pub order: i64,
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    /// Builds one item from a raw entry, inferring the title from the URL
    /// and the URL from the page slug when the editor left them blank.
    pub fn from_raw(raw: &RawNavEntry) -> Self {
        let link_type = raw
            .link_type
            .as_deref()
            .and_then(|s| s.parse::<LinkType>().ok())
            .unwrap_or_default();

        let url = raw
            .url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| {
                raw.page_slug
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .map(|slug| format!("/{}", slug.trim().trim_matches('/')))
            })
            .unwrap_or_else(|| "#".to_string());

        let title = raw
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| title_from_url(&url));

        Self {
            id: raw.id,
            title,
            url,
            link_type,
            order: raw.order.unwrap_or(i64::MAX),
            children: build_navigation(&raw.children),
        }
    }
}

/// Transforms and orders a raw navigation tree.
pub fn build_navigation(raw: &[RawNavEntry]) -> Vec<NavigationItem> {
    let mut items: Vec<NavigationItem> = raw.iter().map(NavigationItem::from_raw).collect();
    items.sort_by_key(|item| item.order);
    items
}

/// Derives a display title from the last path segment of a URL
/// (`/pricing-and-plans` becomes "Pricing And Plans").
fn title_from_url(url: &str) -> String {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .trim_start_matches('#');

    if segment.is_empty() {
        return "Home".to_string();
    }

    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_url_capitalizes_segments() {
        assert_eq!(title_from_url("/pricing-and-plans"), "Pricing And Plans");
    }

    #[test]
    fn test_title_from_url_root_is_home() {
        assert_eq!(title_from_url("/"), "Home");
    }
}
