//! Page data loaders.
//!
//! Each view type gets one `#[server]` function issuing a single
//! unauthenticated GET against the CMS read API. List envelopes are
//! unwrapped here so callers always receive flat data. There is no caching;
//! every page view re-fetches on load.

use crate::models::*;
use leptos::prelude::*;

#[cfg(feature = "ssr")]
mod client {
    use serde::de::DeserializeOwned;

    use crate::common::CmsError;
    use crate::config::CmsConfig;
    use crate::models::ListResponse;

    /// GET a content endpoint and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CmsError> {
        let config = CmsConfig::from_env();
        let response = reqwest::Client::new()
            .get(url)
            .query(query)
            .header("X-Frontend-Url", config.frontend_url)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.json::<T>().await.map_err(CmsError::from)
    }

    /// GET a collection endpoint, unwrapping the `{items: [...]}` envelope.
    pub async fn get_items<T: DeserializeOwned>(
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, CmsError> {
        let config = CmsConfig::from_env();
        let url = config.content_url(path);
        let list: ListResponse<T> = get_json(&url, query).await?;
        Ok(list.into_items())
    }

    /// GET a collection endpoint and keep only the first item.
    pub async fn get_first<T: DeserializeOwned>(
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, CmsError> {
        Ok(get_items(path, query).await?.into_iter().next())
    }
}

#[cfg(feature = "ssr")]
fn to_server_error(e: crate::common::CmsError) -> ServerFnError {
    log::error!("CMS request failed: {e}");
    ServerFnError::new(e.to_string())
}

/// Fetches the landing page document.
#[server(GetLandingPage, "/api")]
pub async fn get_landing_page() -> Result<Option<LandingPageData>, ServerFnError> {
    client::get_first("mypages/", &[]).await.map_err(to_server_error)
}

/// Fetches one features page by slug, trying the explicit slug first and
/// the owning module's slug second.
#[server(GetFeaturesPage, "/api")]
pub async fn get_features_page(slug: String) -> Result<Option<FeaturesPageData>, ServerFnError> {
    let by_slug: Option<FeaturesPageData> = client::get_first("features-pages/", &[("slug", slug.as_str())])
        .await
        .map_err(to_server_error)?;

    if by_slug.is_some() {
        return Ok(by_slug);
    }

    client::get_first("features-pages/", &[("module_slug", slug.as_str())])
        .await
        .map_err(to_server_error)
}

/// Fetches every published features page, for the listing view.
#[server(ListFeaturesPages, "/api")]
pub async fn list_features_pages() -> Result<Vec<FeaturesPageData>, ServerFnError> {
    client::get_items("features-pages/", &[]).await.map_err(to_server_error)
}

/// Fetches one information (about) page by slug.
#[server(GetInformationPage, "/api")]
pub async fn get_information_page(
    slug: String,
) -> Result<Option<InformationPageData>, ServerFnError> {
    client::get_first("information-pages/", &[("slug", slug.as_str())])
        .await
        .map_err(to_server_error)
}

/// Fetches every published information page, for the about index.
#[server(ListInformationPages, "/api")]
pub async fn list_information_pages() -> Result<Vec<InformationPageData>, ServerFnError> {
    client::get_items("information-pages/", &[]).await.map_err(to_server_error)
}

/// Fetches the blog index.
#[server(GetBlogIndex, "/api")]
pub async fn get_blog_index() -> Result<Vec<BlogPostSummary>, ServerFnError> {
    client::get_items("posts/", &[]).await.map_err(to_server_error)
}

/// Fetches one blog post by slug.
#[server(GetBlogPost, "/api")]
pub async fn get_blog_post(slug: String) -> Result<Option<BlogPostData>, ServerFnError> {
    client::get_first("posts/", &[("slug", slug.as_str())])
        .await
        .map_err(to_server_error)
}

/// Fetches the gallery page document.
#[server(GetGalleryPage, "/api")]
pub async fn get_gallery_page() -> Result<Option<GalleryPageData>, ServerFnError> {
    client::get_first("gallery-pages/", &[]).await.map_err(to_server_error)
}

/// Fetches the team page document.
#[server(GetTeamPage, "/api")]
pub async fn get_team_page() -> Result<Option<TeamPageData>, ServerFnError> {
    client::get_first("team-pages/", &[]).await.map_err(to_server_error)
}

/// Fetches the affiliate program page document.
#[server(GetAffiliatePage, "/api")]
pub async fn get_affiliate_page() -> Result<Option<AffiliatePageData>, ServerFnError> {
    client::get_first("affiliate-pages/", &[]).await.map_err(to_server_error)
}

/// Fetches site-wide settings (navigation, branding, widgets). Served from
/// its own endpoint family, overridable via SITE_SETTINGS_API_URL.
#[server(GetSiteSettings, "/api")]
pub async fn get_site_settings() -> Result<SiteSettings, ServerFnError> {
    let config = crate::config::CmsConfig::from_env();
    let url = config.settings_url("site-settings/");
    client::get_json(&url, &[]).await.map_err(to_server_error)
}
