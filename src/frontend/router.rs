//! Client-side view resolution.
//!
//! The URL surface is a fixed set of path patterns, checked in priority
//! order: specific debug panels before the generic `/debug`, slug-bearing
//! patterns before their bare counterparts. Anything unmatched lands on the
//! landing page. Hash fragments are consulted only when the path itself
//! matches nothing.

/// Every view the site can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    DebugFeatures,
    DebugLanding,
    Debug,
    Blog { slug: Option<String> },
    About { slug: Option<String> },
    Salespage,
    Gallery,
    Affiliate,
    Team,
    Features { slug: Option<String> },
    Landing,
}

impl View {
    /// Resolves the current location to exactly one view.
    pub fn resolve(path: &str, hash: &str) -> Self {
        if let Some(view) = Self::match_target(path) {
            return view;
        }

        // Older shared links use hash fragments ("#/gallery"); honor them
        // when the path is unremarkable.
        let fragment = hash.trim_start_matches('#');
        if !fragment.is_empty() {
            let as_path = format!("/{}", fragment.trim_start_matches('/'));
            if let Some(view) = Self::match_target(&as_path) {
                return view;
            }
        }

        Self::Landing
    }

    fn match_target(path: &str) -> Option<Self> {
        let path = normalize(path);

        if path.contains("/debug-features") {
            return Some(Self::DebugFeatures);
        }
        if path.contains("/debug-landing") {
            return Some(Self::DebugLanding);
        }
        if path.contains("/debug") {
            return Some(Self::Debug);
        }

        if let Some(slug) = slug_after(&path, "/blog/") {
            return Some(Self::Blog { slug: Some(slug) });
        }
        if path == "/blog" {
            return Some(Self::Blog { slug: None });
        }

        if let Some(slug) = slug_after(&path, "/about/") {
            return Some(Self::About { slug: Some(slug) });
        }
        if path == "/about" {
            return Some(Self::About { slug: None });
        }

        if path == "/salespage" {
            return Some(Self::Salespage);
        }
        if path == "/gallery" {
            return Some(Self::Gallery);
        }
        if path == "/affiliate" {
            return Some(Self::Affiliate);
        }
        if path == "/team" {
            return Some(Self::Team);
        }

        if let Some(slug) = slug_after(&path, "/features/") {
            return Some(Self::Features { slug: Some(slug) });
        }
        if path == "/features" {
            // Bare /features (with or without trailing slash) gets the
            // generic listing, never a default slug.
            return Some(Self::Features { slug: None });
        }

        None
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Extracts the first path segment after `prefix`, if non-empty.
fn slug_after(path: &str, prefix: &str) -> Option<String> {
    let rest = path.strip_prefix(prefix)?;
    let slug = rest.split('/').next().unwrap_or("");
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}
