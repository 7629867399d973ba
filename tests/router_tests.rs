#[cfg(test)]
pub mod router_tests {
    use brochure::frontend::router::View;

    #[test]
    fn test_resolve_landing_fallback_success() {
        assert_eq!(View::resolve("/", ""), View::Landing);
        assert_eq!(View::resolve("/nonsense", ""), View::Landing);
    }

    #[test]
    fn test_resolve_debug_features_beats_generic_debug() {
        assert_eq!(View::resolve("/debug-features", ""), View::DebugFeatures);
    }

    #[test]
    fn test_resolve_debug_landing_beats_generic_debug() {
        assert_eq!(View::resolve("/debug-landing", ""), View::DebugLanding);
    }

    #[test]
    fn test_resolve_generic_debug_success() {
        assert_eq!(View::resolve("/debug", ""), View::Debug);
    }

    #[test]
    fn test_resolve_blog_with_slug_success() {
        assert_eq!(
            View::resolve("/blog/my-post", ""),
            View::Blog {
                slug: Some("my-post".to_string())
            }
        );
    }

    #[test]
    fn test_resolve_bare_blog_has_no_slug() {
        assert_eq!(View::resolve("/blog", ""), View::Blog { slug: None });
        assert_eq!(View::resolve("/blog/", ""), View::Blog { slug: None });
    }

    #[test]
    fn test_resolve_about_with_slug_success() {
        assert_eq!(
            View::resolve("/about/our-story", ""),
            View::About {
                slug: Some("our-story".to_string())
            }
        );
    }

    #[test]
    fn test_resolve_bare_about_success() {
        assert_eq!(View::resolve("/about", ""), View::About { slug: None });
    }

    #[test]
    fn test_resolve_simple_views_success() {
        assert_eq!(View::resolve("/salespage", ""), View::Salespage);
        assert_eq!(View::resolve("/gallery", ""), View::Gallery);
        assert_eq!(View::resolve("/affiliate", ""), View::Affiliate);
        assert_eq!(View::resolve("/team", ""), View::Team);
    }

    #[test]
    fn test_resolve_features_with_slug_success() {
        assert_eq!(
            View::resolve("/features/sales-marketing", ""),
            View::Features {
                slug: Some("sales-marketing".to_string())
            }
        );
    }

    #[test]
    fn test_resolve_bare_features_falls_back_to_listing() {
        // A missing slug gets the generic listing, never a hardcoded
        // default page.
        assert_eq!(View::resolve("/features", ""), View::Features { slug: None });
        assert_eq!(View::resolve("/features/", ""), View::Features { slug: None });
    }

    #[test]
    fn test_resolve_hash_fragment_success() {
        assert_eq!(View::resolve("/", "#/gallery"), View::Gallery);
        assert_eq!(
            View::resolve("/", "#/blog/my-post"),
            View::Blog {
                slug: Some("my-post".to_string())
            }
        );
    }

    #[test]
    fn test_resolve_path_beats_hash() {
        assert_eq!(View::resolve("/team", "#/gallery"), View::Team);
    }

    #[test]
    fn test_resolve_every_path_yields_exactly_one_view() {
        let paths = [
            "/debug-features",
            "/debug-landing",
            "/debug",
            "/blog/my-post",
            "/blog",
            "/about/our-story",
            "/about",
            "/salespage",
            "/gallery",
            "/affiliate",
            "/team",
            "/features/crm",
            "/features",
            "/",
        ];
        for path in paths {
            // resolve always returns a value; this guards against a panic
            // on any enumerated pattern.
            let _ = View::resolve(path, "");
        }
    }
}
