//! CMS endpoint configuration.
//!
//! Base URLs are resolved once per request from the environment so a running
//! server picks up `.env` values loaded at startup. Development builds talk
//! to a local CMS; release builds talk to the production host unless
//! overridden.

/// Production CMS host serving the public read API.
pub const PRODUCTION_CMS_HOST: &str = "https://cms.brochure.site";

/// Local CMS instance used during development.
pub const DEV_CMS_HOST: &str = "http://localhost:8000";

/// Versioned prefix for page content endpoints.
pub const CONTENT_API_PREFIX: &str = "/blogs/api/v2";

/// Versioned prefix for site-wide settings.
pub const SETTINGS_API_PREFIX: &str = "/api/v2";

/// Resolved CMS configuration for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct CmsConfig {
    pub cms_host: String,
    pub settings_base: String,
    pub frontend_url: String,
}

impl CmsConfig {
    /// Reads configuration from the environment, falling back to the
    /// build-profile default host.
    pub fn from_env() -> Self {
        let cms_host = std::env::var("CMS_HOST")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::default_host().to_string());

        // Site settings can live on a separate host (e.g. a settings-only
        // mirror); SITE_SETTINGS_API_URL overrides the derived base.
        let settings_base = std::env::var("SITE_SETTINGS_API_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("{cms_host}{SETTINGS_API_PREFIX}"));

        let frontend_url = std::env::var("FRONTEND_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        Self {
            cms_host,
            settings_base,
            frontend_url,
        }
    }

    pub fn default_host() -> &'static str {
        if cfg!(debug_assertions) {
            DEV_CMS_HOST
        } else {
            PRODUCTION_CMS_HOST
        }
    }

    /// Absolute URL for a content endpoint path like `mypages/`.
    pub fn content_url(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.cms_host,
            CONTENT_API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    /// Absolute URL for a settings endpoint path like `site-settings/`.
    pub fn settings_url(&self, path: &str) -> String {
        format!("{}/{}", self.settings_base, path.trim_start_matches('/'))
    }
}
