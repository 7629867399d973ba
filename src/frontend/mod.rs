pub mod components;
pub mod pages;
pub mod router;
pub mod theme;
pub mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::api::get_site_settings;
use crate::models::build_navigation;
use components::{SiteNav, Spinner};
use pages::*;
use router::View;
use widgets::WidgetOverlay;

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component: site chrome plus the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Navigation and widgets come from site settings; a failed fetch just
    // renders empty chrome, never an error page.
    let settings = Resource::new(
        || (),
        |_| async move { get_site_settings().await.unwrap_or_default() },
    );

    view! {
        <Stylesheet id="leptos" href="/pkg/brochure.css"/>
        <Title text="Brochure"/>

        <Router>
            <Suspense fallback=|| ()>
                {move || {
                    settings.get().map(|settings| view! {
                        <SiteNav
                            items=build_navigation(&settings.navigation)
                            site_name=settings.site_name.clone()
                            logo_url=settings.logo_url.clone()
                        />
                        <WidgetOverlay widgets=settings.widgets.clone()/>
                    })
                }}
            </Suspense>
            <main>
                <Routes fallback=|| view! { <PageDispatch/> }>
                    <Route path=path!("/*any") view=PageDispatch/>
                </Routes>
            </main>
        </Router>
    }
}

/// Resolves the location to a view and mounts the matching page. A
/// transition is a synchronous signal change followed by a re-render that
/// swaps the page component tree.
#[component]
fn PageDispatch() -> impl IntoView {
    let location = use_location();
    let current =
        Memo::new(move |_| View::resolve(&location.pathname.get(), &location.hash.get()));

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || match current.get() {
                View::DebugFeatures => view! { <DebugFeaturesPage/> }.into_any(),
                View::DebugLanding => view! { <DebugLandingPage/> }.into_any(),
                View::Debug => view! { <DebugPage/> }.into_any(),
                View::Blog { slug: Some(slug) } => view! { <BlogPostPage slug/> }.into_any(),
                View::Blog { slug: None } => view! { <BlogIndexPage/> }.into_any(),
                View::About { slug: Some(slug) } => view! { <InformationPage slug/> }.into_any(),
                View::About { slug: None } => view! { <AboutIndexPage/> }.into_any(),
                // The sales page renders the same landing document under a
                // dedicated URL.
                View::Salespage => view! { <LandingPage/> }.into_any(),
                View::Gallery => view! { <GalleryPage/> }.into_any(),
                View::Affiliate => view! { <AffiliatePage/> }.into_any(),
                View::Team => view! { <TeamPage/> }.into_any(),
                View::Features { slug: Some(slug) } => view! { <FeaturesPage slug/> }.into_any(),
                View::Features { slug: None } => view! { <FeaturesIndexPage/> }.into_any(),
                View::Landing => view! { <LandingPage/> }.into_any(),
            }}
        </Suspense>
    }
}
