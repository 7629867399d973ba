use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::api::{get_information_page, list_information_pages};
use crate::frontend::components::{DynamicBlocks, ErrorState, Footer, Spinner};
use crate::frontend::theme::ThemeProvider;
use crate::models::InformationPageData;

/// One information (about) page, looked up by slug.
#[component]
pub fn InformationPage(slug: String) -> impl IntoView {
    let page = Resource::new(move || slug.clone(), get_information_page);

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(Some(data)) => view! { <InformationContent data/> }.into_any(),
                    Ok(None) => view! { <ErrorState message="Page not found"/> }.into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

/// Index of information pages, shown for a bare /about.
#[component]
pub fn AboutIndexPage() -> impl IntoView {
    let pages = Resource::new(|| (), |_| list_information_pages());

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                pages.get().map(|result| match result {
                    Ok(pages) => view! {
                        <Title text="About"/>
                        <div class="max-w-3xl mx-auto pt-32 pb-20 px-6">
                            <h1 class="text-4xl font-bold mb-12 text-center">"About"</h1>
                            <ul class="space-y-4">
                                {pages
                                    .into_iter()
                                    .map(|page| {
                                        let href = page
                                            .slug
                                            .clone()
                                            .map(|s| format!("/about/{s}"))
                                            .unwrap_or_else(|| "/about".to_string());
                                        view! {
                                            <li>
                                                <a
                                                    href=href
                                                    class="text-[var(--color-primary)] text-lg font-semibold"
                                                >
                                                    {page.title.unwrap_or_default()}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <Footer/>
                    }
                    .into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn InformationContent(data: InformationPageData) -> impl IntoView {
    let title = data
        .seo_title
        .clone()
        .or_else(|| data.title.clone())
        .unwrap_or_else(|| "About".to_string());

    view! {
        <ThemeProvider theme=data.color_theme.clone()>
            <Title text=title.clone()/>
            {data.seo_description.clone().map(|desc| view! {
                <Meta name="description" content=desc/>
            })}
            <article class="max-w-3xl mx-auto pt-32 pb-20 px-6">
                <h1 class="text-4xl font-bold mb-8">{data.title.clone().unwrap_or(title)}</h1>
                {data.body.clone().map(|body| view! {
                    <div class="prose" inner_html=body></div>
                })}
                {(!data.dynamic_content.is_empty()).then(|| view! {
                    <DynamicBlocks raw=data.dynamic_content.clone()/>
                })}
            </article>
            <Footer/>
        </ThemeProvider>
    }
}
