use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::api::{get_features_page, list_features_pages};
use crate::frontend::components::{CardGrid, DynamicBlocks, ErrorState, Footer, Spinner};
use crate::frontend::theme::ThemeProvider;
use crate::models::FeaturesPageData;

/// One feature page, looked up by slug (explicit slug first, module slug
/// as the fallback).
#[component]
pub fn FeaturesPage(slug: String) -> impl IntoView {
    let page = Resource::new(move || slug.clone(), get_features_page);

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(Some(data)) => view! { <FeaturesContent data/> }.into_any(),
                    Ok(None) => view! { <ErrorState message="Page not found"/> }.into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

/// Listing of every published feature page.
#[component]
pub fn FeaturesIndexPage() -> impl IntoView {
    let pages = Resource::new(|| (), |_| list_features_pages());

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                pages.get().map(|result| match result {
                    Ok(pages) => view! {
                        <Title text="Features"/>
                        <div class="max-w-6xl mx-auto pt-32 pb-20 px-6">
                            <h1 class="text-4xl font-bold mb-12 text-center">"Features"</h1>
                            <div class="grid gap-6 md:grid-cols-3">
                                {pages
                                    .into_iter()
                                    .map(|page| {
                                        let href = page
                                            .slug
                                            .clone()
                                            .map(|s| format!("/features/{s}"))
                                            .unwrap_or_else(|| "/features".to_string());
                                        view! {
                                            <a
                                                href=href
                                                class="p-6 rounded-xl border border-[var(--color-neutral)]
                                                       hover:border-[var(--color-primary)] transition-colors"
                                            >
                                                <h2 class="text-xl font-semibold mb-2">
                                                    {page.title.unwrap_or_default()}
                                                </h2>
                                                <p class="text-sm opacity-80">
                                                    {page.intro_text.unwrap_or_default()}
                                                </p>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
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
fn FeaturesContent(data: FeaturesPageData) -> impl IntoView {
    let title = data
        .seo_title
        .clone()
        .or_else(|| data.title.clone())
        .unwrap_or_else(|| "Features".to_string());

    view! {
        <ThemeProvider theme=data.color_theme.clone()>
            <Title text=title/>
            {data.seo_description.clone().map(|desc| view! {
                <Meta name="description" content=desc/>
            })}
            <div class="pt-32 pb-20">
                <header class="max-w-3xl mx-auto px-6 text-center mb-16">
                    {data.intro_heading.clone().map(|h| view! {
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">{h}</h1>
                    })}
                    {data.intro_text.clone().map(|t| view! {
                        <p class="text-xl opacity-70">{t}</p>
                    })}
                </header>
                {(!data.benefits.is_empty()).then(|| view! {
                    <div class="max-w-6xl mx-auto px-6 mb-16 grid gap-6 md:grid-cols-2">
                        {data
                            .benefits
                            .iter()
                            .cloned()
                            .map(|b| view! {
                                <div class="flex gap-4 items-start">
                                    {b.icon.map(|i| view! { <span class="text-3xl">{i}</span> })}
                                    <div>
                                        {b.title.map(|t| view! { <h3 class="font-semibold mb-1">{t}</h3> })}
                                        {b.description.map(|d| view! { <p class="text-sm opacity-80">{d}</p> })}
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                })}
                {(!data.cards.is_empty()).then(|| view! {
                    <div class="max-w-6xl mx-auto px-6 mb-16">
                        <CardGrid cards=data.cards.clone()/>
                    </div>
                })}
                {(!data.dynamic_content.is_empty()).then(|| view! {
                    <DynamicBlocks raw=data.dynamic_content.clone()/>
                })}
            </div>
            <Footer/>
        </ThemeProvider>
    }
}
