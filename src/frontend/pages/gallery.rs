use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::get_gallery_page;
use crate::frontend::components::{ErrorState, Footer, Spinner};
use crate::frontend::theme::ThemeProvider;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let page = Resource::new(|| (), |_| get_gallery_page());

    view! {
        <Suspense fallback=|| view! { <Spinner/> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(Some(data)) => view! {
                        <ThemeProvider theme=data.color_theme.clone()>
                            <Title text=data.title.clone().unwrap_or_else(|| "Gallery".to_string())/>
                            <div class="max-w-6xl mx-auto pt-32 pb-20 px-6">
                                <h1 class="text-4xl font-bold mb-4 text-center">
                                    {data.title.clone().unwrap_or_else(|| "Gallery".to_string())}
                                </h1>
                                {data.description.clone().map(|d| view! {
                                    <p class="opacity-70 mb-12 text-center">{d}</p>
                                })}
                                <div class="grid gap-4 sm:grid-cols-2 md:grid-cols-3">
                                    {data
                                        .images
                                        .iter()
                                        .cloned()
                                        .map(|image| view! {
                                            <figure>
                                                <img
                                                    src=image.url
                                                    alt=image.alt.unwrap_or_default()
                                                    class="rounded-xl w-full h-56 object-cover"
                                                />
                                                {image.caption.map(|c| view! {
                                                    <figcaption class="mt-1 text-sm opacity-60">{c}</figcaption>
                                                })}
                                            </figure>
                                        })
                                        .collect_view()}
                                </div>
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
