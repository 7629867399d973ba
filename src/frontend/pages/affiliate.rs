use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::get_affiliate_page;
use crate::frontend::components::{DynamicBlocks, ErrorState, Footer, Spinner};
use crate::frontend::theme::ThemeProvider;

#[component]
pub fn AffiliatePage() -> impl IntoView {
    let page = Resource::new(|| (), |_| get_affiliate_page());

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(Some(data)) => view! {
                        <ThemeProvider theme=data.color_theme.clone()>
                            <Title text=data
                                .title
                                .clone()
                                .unwrap_or_else(|| "Affiliate Program".to_string())/>
                            <div class="max-w-3xl mx-auto pt-32 pb-20 px-6 text-center">
                                {data.heading.clone().map(|h| view! {
                                    <h1 class="text-4xl md:text-5xl font-bold mb-6">{h}</h1>
                                })}
                                {data.description.clone().map(|d| view! {
                                    <p class="text-xl opacity-70 mb-10">{d}</p>
                                })}
                                {data.signup_url.clone().map(|url| view! {
                                    <a href=url class="btn-primary btn-large inline-block mb-16">
                                        "Become an Affiliate"
                                    </a>
                                })}
                                {(!data.dynamic_content.is_empty()).then(|| view! {
                                    <DynamicBlocks raw=data.dynamic_content.clone()/>
                                })}
                            </div>
                            <Footer/>
                        </ThemeProvider>
                    }
                    .into_any(),
                    Ok(None) => view! { <ErrorState message="Page not found"/> }.into_any(),
                    Err(e) => view! { <ErrorState message=e.to_string()/> }.into_any(),
                })
            }}
        </Suspense>
    }
}
