use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::api::get_landing_page;
use crate::frontend::components::sections::render_section;
use crate::frontend::components::{ErrorState, Spinner};
use crate::frontend::theme::ThemeProvider;
use crate::models::{resolve_section_order, LandingPageData};

/// Main landing page. Section order comes from the document's
/// `section_order` when present, the default constant otherwise.
#[component]
pub fn LandingPage() -> impl IntoView {
    let page = Resource::new(|| (), |_| get_landing_page());

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(Some(data)) => view! { <LandingContent data/> }.into_any(),
                    Ok(None) => view! { <ErrorState message="Page not found"/> }.into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn LandingContent(data: LandingPageData) -> impl IntoView {
    let order = resolve_section_order(&data.section_order);
    let title = data
        .seo_title
        .clone()
        .or_else(|| data.title.clone())
        .unwrap_or_else(|| "Welcome".to_string());

    view! {
        <ThemeProvider theme=data.color_theme.clone()>
            <Title text=title/>
            {data.seo_description.clone().map(|desc| view! {
                <Meta name="description" content=desc/>
            })}
            <div class="landing-page">
                {order
                    .into_iter()
                    .map(|key| render_section(key, &data))
                    .collect_view()}
            </div>
        </ThemeProvider>
    }
}
